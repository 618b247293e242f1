mod belief;
mod evaluate;
mod params;

pub use belief::BeliefState;
pub use evaluate::evaluate;
pub use params::EvalParams;

use tracing::trace;
use uno_core::game::snapshot::MatchSnapshot;
use uno_core::model::card::Card;
use uno_core::model::color::Color;

/// Heuristic card chooser. One engine instance serves one seat for the
/// length of a game; its belief state carries across turns.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    belief: BeliefState,
    params: EvalParams,
}

impl DecisionEngine {
    pub fn new(params: EvalParams) -> Self {
        Self {
            belief: BeliefState::new(),
            params,
        }
    }

    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    /// Pick the index of the card to play, or `None` when nothing in the
    /// hand is legal and the seat must draw.
    ///
    /// Scoring keeps the earliest maximum: a later card replaces the
    /// front-runner only by strictly beating it, so the choice is stable
    /// under re-evaluation.
    pub fn select_card(
        &mut self,
        hand: &[Card],
        up_card: Card,
        called_color: Option<Color>,
        snapshot: &MatchSnapshot,
    ) -> Option<usize> {
        self.belief
            .refresh(&snapshot.played_cards, &snapshot.called_colors);

        let mut best: Option<(usize, i32)> = None;
        for (index, card) in hand.iter().enumerate() {
            if !card.can_play_on(up_card, called_color) {
                continue;
            }
            let score = evaluate(
                *card,
                up_card,
                called_color,
                snapshot,
                hand,
                &self.belief,
                &self.params,
            );
            trace!(%card, score, "scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index)
    }

    /// Color to declare on a wild play: the color the hand holds most of.
    /// Ties and empty hands fall back to Red.
    pub fn choose_color(&self, hand: &[Card]) -> Color {
        let mut chosen = Color::Red;
        let mut top = 0;
        for color in Color::ALL {
            let count = hand
                .iter()
                .filter(|card| card.color == Some(color))
                .count();
            if count > top {
                chosen = color;
                top = count;
            }
        }
        chosen
    }
}
