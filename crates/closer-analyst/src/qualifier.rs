//! Prospect qualification.
//!
//! Moves a bounded batch of a campaign's `hunted` prospects to `qualified`.
//! Website analysis of each prospect goes through [`SiteAnalyzer`]; the only
//! implementation today is [`NoAnalysis`], so every hunted prospect qualifies.

use std::time::Duration;

use async_trait::async_trait;
use closer_core::entities::Prospect;
use closer_core::enums::ProspectStatus;
use closer_core::ids::RecordId;
use closer_core::tables::{self, prospect as col};
use closer_store::{Filter, Record, RecordStore};
use serde_json::Value;

use crate::error::CycleError;

/// Looks at a prospect's web presence before it is qualified.
#[async_trait]
pub trait SiteAnalyzer: Send + Sync {
    /// A short note about the prospect's site, if anything was learned.
    async fn analyze(&self, prospect: &Prospect) -> Option<String>;
}

/// Analyzer that looks at nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnalysis;

#[async_trait]
impl SiteAnalyzer for NoAnalysis {
    async fn analyze(&self, _prospect: &Prospect) -> Option<String> {
        None
    }
}

pub struct ProspectQualifier<'a> {
    store: &'a dyn RecordStore,
    analyzer: &'a dyn SiteAnalyzer,
    batch_size: usize,
    pause: Duration,
}

impl<'a> ProspectQualifier<'a> {
    pub fn new(store: &'a dyn RecordStore, analyzer: &'a dyn SiteAnalyzer, batch_size: usize) -> Self {
        Self {
            store,
            analyzer,
            batch_size,
            pause: Duration::ZERO,
        }
    }

    /// Sleep this long after each prospect update.
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Qualify up to one batch of hunted prospects of `campaign_id`.
    ///
    /// Returns how many prospects were processed; `0` means none are left.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] if the store fails or returns a malformed
    /// prospect. Prospects updated before the failure stay qualified.
    pub async fn qualify_batch(&self, campaign_id: &RecordId) -> Result<usize, CycleError> {
        tracing::info!(campaign = %campaign_id, "looking for hunted prospects");

        let rows = self
            .store
            .select(
                tables::PROSPECTS,
                &[
                    Filter::eq(col::CAMPAIGN_ID, campaign_id.to_value()),
                    Filter::eq(col::STATUS, ProspectStatus::Hunted.as_str()),
                ],
                Some(self.batch_size),
            )
            .await?;

        if rows.is_empty() {
            tracing::info!(campaign = %campaign_id, "no prospects left to qualify");
            return Ok(0);
        }

        let mut processed = 0;
        for row in rows {
            let prospect = Prospect::from_record(row)?;
            if let Some(note) = self.analyzer.analyze(&prospect).await {
                tracing::debug!(prospect = %prospect.id, %note, "site analysis");
            }

            let mut patch = Record::new();
            patch.insert(
                col::STATUS.into(),
                Value::from(ProspectStatus::Qualified.as_str()),
            );
            self.store
                .update(
                    tables::PROSPECTS,
                    &[Filter::eq(col::ID, prospect.id.to_value())],
                    patch,
                )
                .await?;

            processed += 1;
            tracing::info!(
                prospect = %prospect.id,
                name = prospect.business_name.as_deref().unwrap_or("-"),
                "qualified"
            );

            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }
        Ok(processed)
    }
}
