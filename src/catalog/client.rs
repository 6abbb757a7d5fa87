//! Blocking client for the DofusDB item catalog.
//!
//! One request per call, no retries: failures go straight back to the caller.

use super::error::CatalogError;
use super::types::{CatalogItem, ItemType, Paginated};
use crate::config::AppConfig;
use serde::de::DeserializeOwned;

/// Item type ids of equipment that can go through forgemagie.
///
/// 1 Amulet, 2 Bow, 3 Wand, 4 Staff, 5 Dagger, 6 Sword, 7 Hammer, 8 Shovel,
/// 9 Ring, 10 Belt, 11 Boots, 16 Hat, 17 Cloak, 19 Axe, 21 Pickaxe,
/// 22 Scythe, 23 Dofus, 82 Shield, 102 Prysmaradite, 103 Faulchon,
/// 114 Sertisseur, 115 Explosive bow, 189 Trophy
pub const EQUIPMENT_TYPE_IDS: [u32; 23] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 16, 17, 19, 21, 22, 23, 82, 102, 103, 114, 115, 189,
];

/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 2;

pub fn is_equipment(type_id: Option<u32>) -> bool {
    type_id.is_some_and(|id| EQUIPMENT_TYPE_IDS.contains(&id))
}

/// Turn a free-text query into the catalog's slug format.
/// "Coiffe  du Bouftou" -> "coiffe-du-bouftou"
pub fn slugify(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Keep equipment only, at most `limit` of them.
pub fn filter_equipments(items: Vec<CatalogItem>, limit: usize) -> Vec<CatalogItem> {
    items
        .into_iter()
        .filter(|item| is_equipment(item.type_id))
        .take(limit)
        .collect()
}

pub struct CatalogClient {
    agent: ureq::Agent,
    base_url: String,
    referer: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, referer: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            referer: referer.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_base_url, &config.referer)
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.agent.get(&url).set("Referer", &self.referer);
        for (key, value) in params {
            request = request.query(key, value);
        }

        log::debug!("GET {} {:?}", url, params);
        let response = request.call().map_err(CatalogError::from)?;
        log::debug!("{} -> {}", url, response.status());

        response
            .into_json::<T>()
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// Search equipment by name. Short queries return nothing without a request.
    pub fn search_equipments(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        // Over-fetch since non-equipment results are filtered out locally
        let page: Paginated<CatalogItem> = self.fetch(
            "/items",
            &[
                ("slug.fr[$regex]", slugify(query)),
                ("$limit", (limit * 3).to_string()),
            ],
        )?;

        Ok(filter_equipments(page.data, limit))
    }

    pub fn get_item_by_id(&self, item_id: u32) -> Result<CatalogItem, CatalogError> {
        self.fetch(&format!("/items/{}", item_id), &[])
    }

    pub fn get_item_types(&self) -> Result<Vec<ItemType>, CatalogError> {
        let page: Paginated<ItemType> = self.fetch("/item-types", &[("$limit", "200".into())])?;
        Ok(page.data)
    }

    pub fn item_image_url(&self, icon_id: u32) -> String {
        format!("{}/img/items/{}.png", self.base_url, icon_id)
    }
}
