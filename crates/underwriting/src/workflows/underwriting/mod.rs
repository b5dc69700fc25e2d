//! Slot-filling underwriting: per-field validation, dependency gating, amortization,
//! and the plain-text summary shown at the end of a session.
//!
//! Data flows one way. A raw candidate value goes through the [`ValidationPipeline`],
//! which consults the committed [`SlotStore`] for dependencies and commits the
//! normalized value on acceptance. Once the financing slots are committed the
//! [`SummaryReport`] recomputes the [`LoanSummary`] from the store.

pub mod calculator;
pub mod domain;
mod format;
mod pipeline;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
mod session;
mod store;
pub mod transcript;
pub mod validation;

#[cfg(test)]
mod tests;

pub use calculator::{compute, CalculatorError, LoanSummary, LoanTerms, DEFAULT_LOAN_TERM_YEARS};
pub use domain::{Field, FieldKind, RiskTier, SlotValue, UnknownField, YellowReason};
pub use pipeline::ValidationPipeline;
pub use report::{SummaryReport, SummaryView, MISSING_INFORMATION};
pub use repository::{RepositoryError, SessionRepository};
pub use router::underwriting_router;
pub use service::{SessionServiceError, SubmissionView, UnderwritingService};
pub use session::{Restarted, SessionId, SessionView, UnderwritingSession, RESTART_MESSAGE};
pub use store::{SlotStore, SlotStoreView};
pub use transcript::{
    load_transcript, parse_transcript, replay, TranscriptError, TranscriptStep,
};
pub use validation::{
    validate, Acceptance, Rejection, UnderwritingConfig, ValidationError, ValidationOutcome,
};
