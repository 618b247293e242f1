pub mod engine;
pub mod policy;

pub use engine::{BeliefState, DecisionEngine, EvalParams, evaluate};
pub use policy::{EnginePolicy, FirstLegalPolicy, Policy, TurnView};
