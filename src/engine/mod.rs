mod matcher;
mod normalizer;
mod reconciliation_engine;

pub use matcher::{reconcile, MatchOutcome, MatchedPair, OutcomeSummary};
pub use normalizer::normalize;
pub use reconciliation_engine::{ReconciliationEngine, ReconciliationInputs};
