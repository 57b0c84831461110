//! Campaign cycle controller.
//!
//! One cycle picks a single campaign in `analyzing`, makes sure its sales
//! bible exists, qualifies one batch of its prospects, and moves it to
//! `persuading` once a batch comes back empty. A campaign whose bible build
//! was skipped stays in `analyzing` so the build is retried next cycle.
//!
//! ```text
//! campaign:  analyzing --(no hunted prospects left)--> persuading
//! prospect:  hunted --(qualifier)--> qualified
//! ```

use closer_core::entities::Campaign;
use closer_core::enums::CampaignStatus;
use closer_core::errors::CoreError;
use closer_core::ids::RecordId;
use closer_core::tables::{self, campaign as col};
use closer_store::{Filter, Record, RecordStore};
use serde_json::Value;

use crate::bible::{BuildOutcome, SalesBibleBuilder};
use crate::error::CycleError;
use crate::qualifier::ProspectQualifier;

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// No campaign was waiting for analysis.
    Idle,
    Processed {
        campaign: RecordId,
        bible: BuildOutcome,
        qualified: usize,
        /// Whether the campaign moved to `persuading` this cycle.
        advanced: bool,
    },
}

pub struct CampaignCycle<'a> {
    store: &'a dyn RecordStore,
    builder: SalesBibleBuilder<'a>,
    qualifier: ProspectQualifier<'a>,
}

impl<'a> CampaignCycle<'a> {
    pub fn new(
        store: &'a dyn RecordStore,
        builder: SalesBibleBuilder<'a>,
        qualifier: ProspectQualifier<'a>,
    ) -> Self {
        Self {
            store,
            builder,
            qualifier,
        }
    }

    /// Run one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] for any store failure, a rebuttal generation
    /// failure, or a malformed record. Work committed before the failure stays.
    pub async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
        let Some(campaign) = self.next_campaign().await? else {
            tracing::info!("no campaign in analysis");
            return Ok(CycleReport::Idle);
        };
        tracing::info!(campaign = %campaign.id, "analyzing campaign");

        let bible = self.builder.build(&campaign).await?;
        let qualified = self.qualifier.qualify_batch(&campaign.id).await?;

        let advanced = match (&bible, qualified) {
            (BuildOutcome::Skipped { reason }, 0) => {
                tracing::warn!(campaign = %campaign.id, %reason, "no sales bible, not advancing");
                false
            }
            (_, 0) => self.advance(&campaign).await?,
            _ => false,
        };

        Ok(CycleReport::Processed {
            campaign: campaign.id,
            bible,
            qualified,
            advanced,
        })
    }

    /// First campaign in `analyzing`, in the store's order.
    async fn next_campaign(&self) -> Result<Option<Campaign>, CycleError> {
        let rows = self
            .store
            .select(
                tables::CAMPAIGNS,
                &[Filter::eq(col::STATUS, CampaignStatus::Analyzing.as_str())],
                Some(1),
            )
            .await?;
        Ok(rows
            .into_iter()
            .next()
            .map(Campaign::from_record)
            .transpose()?)
    }

    /// Returns whether this call moved the campaign.
    async fn advance(&self, campaign: &Campaign) -> Result<bool, CycleError> {
        let next = CampaignStatus::Persuading;
        if !campaign.status.can_transition_to(&next) {
            return Err(CoreError::InvalidTransition {
                entity: "campaign",
                id: campaign.id.to_string(),
                from: campaign.status.to_string(),
                to: next.to_string(),
            }
            .into());
        }

        let mut patch = Record::new();
        patch.insert(col::STATUS.into(), Value::from(next.as_str()));
        // Guarded on the current status so a concurrent transition is not repeated.
        let updated = self
            .store
            .update(
                tables::CAMPAIGNS,
                &[
                    Filter::eq(col::ID, campaign.id.to_value()),
                    Filter::eq(col::STATUS, campaign.status.as_str()),
                ],
                patch,
            )
            .await?;

        if updated == 0 {
            tracing::warn!(campaign = %campaign.id, "campaign already left analyzing");
            return Ok(false);
        }
        tracing::info!(campaign = %campaign.id, "campaign moved to persuading");
        Ok(true)
    }
}
