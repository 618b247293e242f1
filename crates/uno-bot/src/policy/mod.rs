mod baseline;
mod engine;

pub use baseline::FirstLegalPolicy;
pub use engine::EnginePolicy;

use uno_core::game::snapshot::MatchSnapshot;
use uno_core::model::card::Card;
use uno_core::model::color::Color;

/// Everything a policy may look at when it is asked to act.
pub struct TurnView<'a> {
    pub hand: &'a [Card],
    pub up_card: Card,
    pub called_color: Option<Color>,
    pub snapshot: &'a MatchSnapshot,
}

/// Unified interface for turn decisions, heuristic or otherwise.
pub trait Policy: Send {
    /// Index of the card to play, or `None` to draw.
    fn choose_card(&mut self, view: &TurnView) -> Option<usize>;

    /// Color to declare when the chosen card is a wild.
    fn call_color(&mut self, view: &TurnView) -> Color;
}
