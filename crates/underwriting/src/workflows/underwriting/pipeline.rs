use tracing::debug;

use super::domain::{Field, RiskTier, YellowReason};
use super::store::SlotStore;
use super::validation::{self, unmet_dependency, UnderwritingConfig, ValidationOutcome};

/// Dependency gating plus dispatch to the per-field validators.
///
/// The pipeline holds no numeric logic of its own. It checks that every field the
/// submitted one depends on is committed, runs the field's validator against a
/// read-only view of the store, and commits the normalized value only on acceptance.
#[derive(Debug, Clone, Default)]
pub struct ValidationPipeline {
    config: UnderwritingConfig,
}

impl ValidationPipeline {
    pub fn new(config: UnderwritingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnderwritingConfig {
        &self.config
    }

    /// Validate `raw` for `field` without touching the store.
    pub fn check(&self, field: Field, raw: Option<&str>, store: &SlotStore) -> ValidationOutcome {
        if let Some(missing) = field
            .dependencies()
            .iter()
            .copied()
            .find(|dependency| !store.is_set(*dependency))
        {
            return unmet_dependency(field, missing);
        }

        validation::validate(field, raw, store, &self.config)
    }

    /// Validate and, when accepted, commit the normalized value.
    pub fn submit(
        &self,
        field: Field,
        raw: Option<&str>,
        store: &mut SlotStore,
    ) -> ValidationOutcome {
        let outcome = self.check(field, raw, store);

        match &outcome {
            ValidationOutcome::Accepted(accepted) => {
                debug!(
                    field = %field,
                    tier = accepted.tier.map(RiskTier::label),
                    reason = accepted.tier.and_then(RiskTier::reason).map(YellowReason::label),
                    "slot committed"
                );
                store.commit(field, accepted.value.clone());
            }
            ValidationOutcome::Rejected(rejected) => {
                debug!(field = %field, error = rejected.error.kind(), "slot rejected");
            }
        }

        outcome
    }
}
