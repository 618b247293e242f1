use crate::model::card::Card;
use crate::model::color::Color;
use serde::{Deserialize, Serialize};

/// Read-only view of the match handed to a decision engine before each turn.
///
/// The per-seat vectors are indexed by turn-order offset from the acting
/// player: entry 0 describes the seat that plays next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Every card played so far, in play order. The last entry is the upcard.
    pub played_cards: Vec<Card>,
    /// Hand size of each upcoming seat.
    pub hand_sizes: Vec<usize>,
    /// Most recent color each upcoming seat declared after a wild, if any.
    pub called_colors: Vec<Option<Color>>,
    /// Cumulative game points of each upcoming seat.
    pub total_scores: Vec<u32>,
}

impl MatchSnapshot {
    pub fn upcoming_count(&self) -> usize {
        self.hand_sizes.len()
    }
}
