use crate::engine::{reconcile, MatchOutcome};
use crate::loader::load_external_feed;
use crate::models::{ExternalRecord, LedgerTransaction};
use crate::storage::{LedgerSource, Scope};
use std::path::Path;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::info;

/// Both sides of a run, fully materialized and in input order.
#[derive(Debug, Default)]
pub struct ReconciliationInputs {
    pub ledger: Vec<LedgerTransaction>,
    pub external: Vec<ExternalRecord>
}

impl ReconciliationInputs {
    pub fn reconcile(&self) -> MatchOutcome<'_> {
        reconcile(&self.ledger, &self.external)
    }
}

/// Loads the ledger and external feeds for a reconciliation run.
pub struct ReconciliationEngine<S: LedgerSource> {
    source: Arc<S>
}

impl<S: LedgerSource> ReconciliationEngine<S> {
    /// Creates a new engine instance reading the ledger side from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source
        }
    }

    /// Reads both feeds concurrently on the blocking pool.
    ///
    /// Any fatal load error from either side aborts the run. Recoverable
    /// external record errors have already been logged by the loader.
    pub async fn load(&self, external_path: &Path, scope: Scope) -> anyhow::Result<ReconciliationInputs> {
        let source = self.source.clone();
        let ledger_handle = spawn_blocking(move || source.transactions(scope));

        let path = external_path.to_path_buf();
        let external_handle = spawn_blocking(move || load_external_feed(&path));

        let (ledger, external_feed) = tokio::try_join!(ledger_handle, external_handle)?;
        let ledger = ledger?;
        let external_feed = external_feed?;

        info!("Fetched [{}] ledger transactions for {scope}", ledger.len());
        info!(
            "Loaded [{}] external records from [{}], skipped [{}]",
            external_feed.records.len(),
            external_path.display(),
            external_feed.skipped.len()
        );

        Ok(ReconciliationInputs {
            ledger,
            external: external_feed.records
        })
    }
}
