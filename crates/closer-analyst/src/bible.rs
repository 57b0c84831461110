//! Sales-bible builder.
//!
//! A campaign's sales bible is created at most once: the presence of any
//! `argumentarios_venta` row for the campaign means it is built. Rows are
//! committed one by one as rebuttals come back, so a failure halfway through
//! leaves the rows already written in place and later cycles treat the bible
//! as built.
//!
//! The check-then-insert guard is not atomic. Two workers running against the
//! same campaign can both see an empty bible and both write one.

use closer_core::entities::{Campaign, SalesBibleEntry};
use closer_core::tables::{self, sales_bible};
use closer_llm::TextGenerator;
use closer_store::{Filter, RecordStore};

use crate::error::CycleError;
use crate::objections::{extract_objections, generate_rebuttal};

/// What a [`SalesBibleBuilder::build`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Entries already existed; nothing was generated.
    AlreadyBuilt,
    /// The bible was generated and `entries` rows were inserted.
    Built { entries: usize },
    /// Nothing was written this cycle; the build is retried next cycle.
    Skipped { reason: String },
}

pub struct SalesBibleBuilder<'a> {
    store: &'a dyn RecordStore,
    generator: &'a dyn TextGenerator,
    objection_count: usize,
}

impl<'a> SalesBibleBuilder<'a> {
    pub fn new(
        store: &'a dyn RecordStore,
        generator: &'a dyn TextGenerator,
        objection_count: usize,
    ) -> Self {
        Self {
            store,
            generator,
            objection_count,
        }
    }

    /// Build the sales bible for `campaign` unless it already exists.
    ///
    /// Bad targeting criteria and failed objection extraction are logged and
    /// reported as [`BuildOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] if the store fails, or if a rebuttal cannot be
    /// generated. In the latter case rows for earlier objections stay committed.
    pub async fn build(&self, campaign: &Campaign) -> Result<BuildOutcome, CycleError> {
        tracing::info!(campaign = %campaign.id, "checking sales bible");

        let existing = self
            .store
            .select(
                tables::SALES_BIBLE,
                &[Filter::eq(sales_bible::CAMPAIGN_ID, campaign.id.to_value())],
                Some(1),
            )
            .await?;
        if !existing.is_empty() {
            tracing::info!(campaign = %campaign.id, "sales bible already exists");
            return Ok(BuildOutcome::AlreadyBuilt);
        }

        let criteria = match campaign.targeting() {
            Ok(criteria) => criteria,
            Err(e) => {
                tracing::error!(campaign = %campaign.id, error = %e, "cannot build sales bible");
                return Ok(BuildOutcome::Skipped {
                    reason: e.to_string(),
                });
            }
        };

        tracing::info!(campaign = %campaign.id, "no sales bible yet, generating one");
        let objections =
            match extract_objections(self.generator, &criteria.product, self.objection_count).await
            {
                Ok(objections) => objections,
                Err(e) => {
                    tracing::error!(campaign = %campaign.id, error = %e, "objection extraction failed");
                    return Ok(BuildOutcome::Skipped {
                        reason: e.to_string(),
                    });
                }
            };
        tracing::info!(campaign = %campaign.id, count = objections.len(), "objections identified");

        let mut entries = 0;
        for objection in objections {
            tracing::info!(pain_key = %objection.pain_key, "writing rebuttal");
            let rebuttal =
                generate_rebuttal(self.generator, &criteria.product, &objection.pain_description)
                    .await?;

            let entry = SalesBibleEntry::new(campaign.id.clone(), objection, rebuttal);
            self.store
                .insert(tables::SALES_BIBLE, entry.to_record()?)
                .await?;
            entries += 1;
        }

        tracing::info!(campaign = %campaign.id, entries, "sales bible saved");
        Ok(BuildOutcome::Built { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{campaign, objections_json, record, sales_generator};
    use closer_llm::{GenerationError, ScriptedGenerator};
    use closer_store::{MemoryStore, StoreError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn builds_one_entry_per_objection() {
        let store = MemoryStore::new();
        let generator = sales_generator(5);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);

        let outcome = builder.build(&campaign(1, "analyzing")).await.unwrap();

        assert_eq!(outcome, BuildOutcome::Built { entries: 5 });
        assert_eq!(generator.calls(), 6);
        assert_eq!(store.calls(tables::SALES_BIBLE).inserts, 5);

        let rows = store.rows(tables::SALES_BIBLE);
        assert!(rows.iter().all(|r| r["campana_id"] == json!(1)));
        assert_eq!(rows[0]["dolor_clave"], json!("DOLOR_1"));
        assert_eq!(rows[0]["argumentario_solucion"], json!("Rebuttal for pain 1."));
    }

    #[tokio::test]
    async fn existing_entry_short_circuits() {
        let store = MemoryStore::new();
        store.seed(
            tables::SALES_BIBLE,
            [record(json!({"campana_id": 1, "dolor_clave": "X"}))],
        );
        let generator = sales_generator(5);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);

        let outcome = builder.build(&campaign(1, "analyzing")).await.unwrap();

        assert_eq!(outcome, BuildOutcome::AlreadyBuilt);
        assert_eq!(generator.calls(), 0);
        assert_eq!(store.calls(tables::SALES_BIBLE).inserts, 0);
    }

    #[tokio::test]
    async fn other_campaigns_entries_do_not_count() {
        let store = MemoryStore::new();
        store.seed(
            tables::SALES_BIBLE,
            [record(json!({"campana_id": 2, "dolor_clave": "X"}))],
        );
        let generator = sales_generator(3);
        let builder = SalesBibleBuilder::new(&store, &generator, 3);

        let outcome = builder.build(&campaign(1, "analyzing")).await.unwrap();
        assert_eq!(outcome, BuildOutcome::Built { entries: 3 });
    }

    #[tokio::test]
    async fn malformed_json_writes_nothing() {
        let store = MemoryStore::new();
        let generator = ScriptedGenerator::queued([Ok("not json at all".to_string())]);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);

        let outcome = builder.build(&campaign(1, "analyzing")).await.unwrap();

        assert!(matches!(outcome, BuildOutcome::Skipped { .. }));
        assert_eq!(generator.calls(), 1);
        assert_eq!(store.calls(tables::SALES_BIBLE).inserts, 0);
    }

    #[tokio::test]
    async fn extraction_generation_failure_writes_nothing() {
        let store = MemoryStore::new();
        let generator =
            ScriptedGenerator::queued([Err(GenerationError::RateLimited { retry_after_secs: 5 })]);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);

        let outcome = builder.build(&campaign(1, "analyzing")).await.unwrap();

        assert!(matches!(outcome, BuildOutcome::Skipped { .. }));
        assert!(store.rows(tables::SALES_BIBLE).is_empty());
    }

    #[tokio::test]
    async fn missing_product_skips_without_generation() {
        let store = MemoryStore::new();
        let generator = sales_generator(5);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);
        let mut campaign = campaign(1, "analyzing");
        campaign.criteria = json!({"ciudad": "Madrid"});

        let outcome = builder.build(&campaign).await.unwrap();

        let BuildOutcome::Skipped { reason } = outcome else {
            panic!("expected Skipped, got {outcome:?}");
        };
        assert!(reason.contains("que_vendes"));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn rebuttal_failure_keeps_committed_entries() {
        let store = MemoryStore::new();
        let generator = ScriptedGenerator::queued([
            Ok(objections_json(3)),
            Ok("first".to_string()),
            Ok("second".to_string()),
            Err(GenerationError::Empty("m".into())),
        ]);
        let builder = SalesBibleBuilder::new(&store, &generator, 3);

        let err = builder.build(&campaign(1, "analyzing")).await.unwrap_err();

        assert!(matches!(err, CycleError::Generation(_)));
        assert_eq!(store.rows(tables::SALES_BIBLE).len(), 2);

        // The partial bible now counts as built.
        let again = builder.build(&campaign(1, "analyzing")).await.unwrap();
        assert_eq!(again, BuildOutcome::AlreadyBuilt);
    }

    #[tokio::test]
    async fn insert_failure_propagates() {
        let store = MemoryStore::new();
        store.fail_inserts_after(1);
        let generator = sales_generator(5);
        let builder = SalesBibleBuilder::new(&store, &generator, 5);

        let err = builder.build(&campaign(1, "analyzing")).await.unwrap_err();

        assert!(matches!(err, CycleError::Store(StoreError::Api { .. })));
        assert_eq!(store.rows(tables::SALES_BIBLE).len(), 1);
    }
}
