//! Worker loop.
//!
//! Runs a [`CampaignCycle`] on a fixed timer. A failed cycle is logged and the
//! loop carries on; there is no other recovery and no distinction between
//! transient and permanent failures.

use std::time::Duration;

use crate::bible::BuildOutcome;
use crate::cycle::{CampaignCycle, CycleReport};

/// Result of a single [`Worker::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Completed,
    Failed,
}

pub struct Worker<'a> {
    cycle: CampaignCycle<'a>,
    interval: Duration,
}

impl<'a> Worker<'a> {
    pub const fn new(cycle: CampaignCycle<'a>, interval: Duration) -> Self {
        Self { cycle, interval }
    }

    /// Run one cycle, absorbing and logging any failure.
    pub async fn tick(&self) -> TickOutcome {
        match self.cycle.run_cycle().await {
            Ok(report) => {
                log_report(&report);
                TickOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "cycle failed");
                TickOutcome::Failed
            }
        }
    }

    /// Tick, then sleep the interval, `cycles` times (forever when `None`).
    ///
    /// Returns the number of failed cycles.
    pub async fn run(&self, cycles: Option<usize>) -> usize {
        let mut failures = 0;
        let mut completed = 0;
        loop {
            if self.tick().await == TickOutcome::Failed {
                failures += 1;
            }
            completed += 1;
            if cycles.is_some_and(|limit| completed >= limit) {
                return failures;
            }

            tracing::info!(secs = self.interval.as_secs(), "waiting for next cycle");
            tokio::time::sleep(self.interval).await;
        }
    }
}

fn log_report(report: &CycleReport) {
    match report {
        CycleReport::Idle => tracing::info!("cycle complete, nothing to do"),
        CycleReport::Processed {
            campaign,
            bible,
            qualified,
            advanced,
        } => {
            let bible = match bible {
                BuildOutcome::AlreadyBuilt => "existing",
                BuildOutcome::Built { .. } => "built",
                BuildOutcome::Skipped { .. } => "skipped",
            };
            tracing::info!(%campaign, bible, qualified, advanced, "cycle complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::SalesBibleBuilder;
    use crate::qualifier::{NoAnalysis, ProspectQualifier};
    use crate::test_support::{campaign_record, prospects, sales_generator};
    use closer_core::tables;
    use closer_store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_stop_the_loop() {
        let store = MemoryStore::new();
        store.seed(tables::CAMPAIGNS, [campaign_record(1, "analyzing")]);
        store.fail_inserts_after(0);
        let generator = sales_generator(5);
        let worker = Worker::new(
            CampaignCycle::new(
                &store,
                SalesBibleBuilder::new(&store, &generator, 5),
                ProspectQualifier::new(&store, &NoAnalysis, 10),
            ),
            Duration::from_secs(3600),
        );

        let started = tokio::time::Instant::now();
        let failures = worker.run(Some(3)).await;

        assert_eq!(failures, 3);
        assert_eq!(store.calls(tables::CAMPAIGNS).selects, 3);
        assert!(started.elapsed() >= Duration::from_secs(2 * 3600));
        assert!(started.elapsed() < Duration::from_secs(3 * 3600));
    }

    #[tokio::test(start_paused = true)]
    async fn drains_then_advances_across_cycles() {
        let store = MemoryStore::new();
        store.seed(tables::CAMPAIGNS, [campaign_record(1, "analyzing")]);
        store.seed(tables::PROSPECTS, prospects(1, 15));
        let generator = sales_generator(5);
        let worker = Worker::new(
            CampaignCycle::new(
                &store,
                SalesBibleBuilder::new(&store, &generator, 5),
                ProspectQualifier::new(&store, &NoAnalysis, 10),
            ),
            Duration::from_secs(60),
        );

        // 10 qualified, 5 qualified, 0 → advance, then idle.
        assert_eq!(worker.run(Some(4)).await, 0);

        assert_eq!(store.rows(tables::SALES_BIBLE).len(), 5);
        assert_eq!(store.calls(tables::CAMPAIGNS).updates, 1);
        assert_eq!(generator.calls(), 6);
    }

    #[tokio::test]
    async fn tick_reports_outcome() {
        let store = MemoryStore::new();
        let generator = sales_generator(5);
        let worker = Worker::new(
            CampaignCycle::new(
                &store,
                SalesBibleBuilder::new(&store, &generator, 5),
                ProspectQualifier::new(&store, &NoAnalysis, 10),
            ),
            Duration::from_secs(1),
        );

        assert_eq!(worker.tick().await, TickOutcome::Completed);
    }
}
