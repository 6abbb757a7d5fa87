use super::error::DrawError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Characters accepted between participant names.
pub const PARTICIPANT_SEPARATORS: [char; 2] = ['|', '/'];

/// Outcome of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// Every participant, shuffled
    pub order: Vec<String>,
    /// The first `count` entries of `order`
    pub winners: Vec<String>,
}

/// Split a "Alice | Bob / Carol" list into trimmed, non-empty names.
pub fn parse_participants(input: &str) -> Result<Vec<String>, DrawError> {
    let participants: Vec<String> = input
        .split(PARTICIPANT_SEPARATORS)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if participants.is_empty() {
        return Err(DrawError::NoParticipants);
    }
    Ok(participants)
}

/// Shuffle the participants and take `count` winners from the front.
/// `None` draws a single winner.
pub fn draw_winners<R: Rng>(
    participants: &[String],
    count: Option<usize>,
    rng: &mut R,
) -> Result<DrawResult, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::NoParticipants);
    }
    let count = count.unwrap_or(1);
    if count == 0 {
        return Err(DrawError::InvalidWinnerCount);
    }
    if count > participants.len() {
        return Err(DrawError::TooManyWinners {
            requested: count,
            available: participants.len(),
        });
    }

    let mut order = participants.to_vec();
    order.shuffle(rng);
    let winners = order[..count].to_vec();

    Ok(DrawResult { order, winners })
}

/// Parse and draw in one go.
pub fn run_draw<R: Rng>(
    input: &str,
    count: Option<usize>,
    rng: &mut R,
) -> Result<DrawResult, DrawError> {
    let participants = parse_participants(input)?;
    draw_winners(&participants, count, rng)
}
