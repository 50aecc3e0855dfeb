//! Batch save-and-schedule phases and outcome reporting (PRD-35).
//!
//! The coordinator persists every item, then schedules the flagged ones.
//! Persist failures gate scheduling entirely; schedule failures are
//! non-fatal because the saves are already committed. This module holds
//! the pure pieces: the phase state machine and the aggregate report.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Phase state machine
// ---------------------------------------------------------------------------

/// Phase of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPhase {
    Idle,
    Saving,
    Scheduling,
    Done,
    PartialFailure,
}

/// Returns the set of phases reachable from `from`.
///
/// `Saving -> Scheduling` is only taken when every save succeeded and at
/// least one item is flagged; `Saving -> Done` covers the all-saved,
/// nothing-flagged case. `Scheduling -> Done` is unconditional because
/// schedule failures do not undo committed saves. `PartialFailure -> Saving`
/// is the manual retry; there is no automatic retry.
pub fn valid_transitions(from: BatchPhase) -> &'static [BatchPhase] {
    match from {
        BatchPhase::Idle => &[BatchPhase::Saving],
        BatchPhase::Saving => &[
            BatchPhase::Scheduling,
            BatchPhase::Done,
            BatchPhase::PartialFailure,
        ],
        BatchPhase::Scheduling => &[BatchPhase::Done],
        BatchPhase::PartialFailure => &[BatchPhase::Saving],
        // Terminal.
        BatchPhase::Done => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: BatchPhase, to: BatchPhase) -> bool {
    valid_transitions(from).contains(&to)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A single per-item failure, identified by the item's client id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Client-generated id of the failing item.
    pub item_id: Uuid,
    /// Backend content id, when one was assigned before the failure.
    pub content_id: Option<i64>,
    /// Human-readable cause (network errors and non-2xx responses are
    /// reported identically).
    pub message: String,
}

/// Aggregate result of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Content ids persisted successfully.
    pub saved: Vec<i64>,
    /// Items whose persist call failed.
    pub save_failures: Vec<BatchFailure>,
    /// Content ids scheduled successfully.
    pub scheduled: Vec<i64>,
    /// Flagged items whose schedule call failed (saves already committed).
    pub schedule_failures: Vec<BatchFailure>,
}

/// Terminal classification of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Everything saved and everything flagged was scheduled.
    Success,
    /// Everything saved; one or more schedule calls failed.
    SavedWithScheduleFailures,
    /// One or more saves failed; scheduling was not attempted.
    SaveFailed,
}

impl BatchReport {
    /// Classify this report into its terminal outcome.
    pub fn outcome(&self) -> BatchOutcome {
        if !self.save_failures.is_empty() {
            BatchOutcome::SaveFailed
        } else if !self.schedule_failures.is_empty() {
            BatchOutcome::SavedWithScheduleFailures
        } else {
            BatchOutcome::Success
        }
    }

    /// The terminal phase this report puts the wizard in.
    pub fn terminal_phase(&self) -> BatchPhase {
        match self.outcome() {
            BatchOutcome::SaveFailed => BatchPhase::PartialFailure,
            _ => BatchPhase::Done,
        }
    }
}
