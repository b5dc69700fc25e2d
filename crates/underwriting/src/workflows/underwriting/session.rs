use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use super::domain::Field;
use super::pipeline::ValidationPipeline;
use super::report::SummaryReport;
use super::store::{SlotStore, SlotStoreView};
use super::validation::{UnderwritingConfig, ValidationOutcome};

pub const RESTART_MESSAGE: &str = "🔄 Starting fresh! Say \"Hi\" to begin a new calculation.";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl SessionId {
    pub fn next() -> Self {
        let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        SessionId(format!("uw-{id:06}"))
    }
}

/// One underwriting conversation: its slot store and the pipeline that writes to it.
#[derive(Debug, Clone)]
pub struct UnderwritingSession {
    id: SessionId,
    opened_at: DateTime<Utc>,
    store: SlotStore,
    pipeline: ValidationPipeline,
}

impl UnderwritingSession {
    pub fn new(id: SessionId, config: UnderwritingConfig) -> Self {
        info!(session = %id.0, bank_rate = config.bank_rate, "underwriting session opened");
        Self {
            id,
            opened_at: Utc::now(),
            store: SlotStore::new(),
            pipeline: ValidationPipeline::new(config),
        }
    }

    pub fn open(config: UnderwritingConfig) -> Self {
        Self::new(SessionId::next(), config)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Read-only view of the committed slots.
    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    pub fn submit(&mut self, field: Field, raw: Option<&str>) -> ValidationOutcome {
        self.pipeline.submit(field, raw, &mut self.store)
    }

    /// Question for the first slot still unset, in collection order.
    pub fn next_prompt(&self) -> Option<&'static str> {
        self.store.next_unset().map(Field::prompt)
    }

    pub fn summary(&self) -> SummaryReport {
        SummaryReport::from_store(&self.store)
    }

    /// Clears every slot in one step and tells the dialogue to start over.
    pub fn reset(&mut self) -> Restarted {
        let cleared = self.store.len();
        self.store.clear();
        self.opened_at = Utc::now();
        info!(session = %self.id.0, cleared, "underwriting session reset");
        Restarted {
            session_id: self.id.clone(),
            message: RESTART_MESSAGE,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id.clone(),
            opened_at: self.opened_at,
            slots: self.store.view(),
            next_prompt: self.next_prompt(),
        }
    }
}

/// Restart signal handed back to the dialogue after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restarted {
    pub session_id: SessionId,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub opened_at: DateTime<Utc>,
    pub slots: SlotStoreView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_prompt: Option<&'static str>,
}
