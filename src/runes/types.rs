use serde::Serialize;

/// A forgemagie rune: the craft material tied to one stat type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rune {
    /// Unique key, also used in price files (e.g. "fo", "ga_pa")
    pub key: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Weight contribution factor of the stat this rune carries
    pub density: f64,
    /// Stat value granted per rune
    pub effect: f64,
    /// Characteristic id in the item catalog, when it has one
    pub characteristic_id: Option<i32>,
    /// Catalog effect ids that resolve to this rune
    pub effect_ids: &'static [u32],
}

impl Rune {
    /// The special hunting rune, kept apart from the others in listings.
    pub fn is_chasse(&self) -> bool {
        self.key == CHASSE_RUNE_KEY
    }
}

pub const CHASSE_RUNE_KEY: &str = "chasse";
