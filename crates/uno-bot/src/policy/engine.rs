use crate::engine::{DecisionEngine, EvalParams};
use crate::policy::{Policy, TurnView};
use uno_core::model::color::Color;

/// Policy backed by the heuristic evaluator.
#[derive(Debug, Clone, Default)]
pub struct EnginePolicy {
    engine: DecisionEngine,
}

impl EnginePolicy {
    pub fn new(params: EvalParams) -> Self {
        Self {
            engine: DecisionEngine::new(params),
        }
    }
}

impl Policy for EnginePolicy {
    fn choose_card(&mut self, view: &TurnView) -> Option<usize> {
        self.engine
            .select_card(view.hand, view.up_card, view.called_color, view.snapshot)
    }

    fn call_color(&mut self, view: &TurnView) -> Color {
        self.engine.choose_color(view.hand)
    }
}
