use crate::policy::{Policy, TurnView};
use uno_core::model::color::Color;

/// Benchmark opponent: plays the first legal card it finds and calls the
/// first non-wild color in its hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalPolicy;

impl Policy for FirstLegalPolicy {
    fn choose_card(&mut self, view: &TurnView) -> Option<usize> {
        view.hand
            .iter()
            .position(|card| card.can_play_on(view.up_card, view.called_color))
    }

    fn call_color(&mut self, view: &TurnView) -> Color {
        view.hand
            .iter()
            .find_map(|card| card.color)
            .unwrap_or(Color::Red)
    }
}
