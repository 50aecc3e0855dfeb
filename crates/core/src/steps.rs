//! Wizard step definitions and navigation (PRD-31).
//!
//! The wizard is a linear sequence of four stops. `advance` clamps at the
//! last step and `back` floors at the first; navigating backward never
//! migrates or clears data captured by later steps. Step changes are the
//! only trigger for step-entry side effects (data fetching happens in the
//! step-entry handlers, not here).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four steps in the content wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    IdeaEntry,
    OutlineReview,
    ProjectProfile,
    SaveSchedule,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::IdeaEntry),
            2 => Ok(Self::OutlineReview),
            3 => Ok(Self::ProjectProfile),
            4 => Ok(Self::SaveSchedule),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::IdeaEntry => 1,
            Self::OutlineReview => 2,
            Self::ProjectProfile => 3,
            Self::SaveSchedule => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::IdeaEntry => "Content Idea",
            Self::OutlineReview => "Review & Edit Outlines",
            Self::ProjectProfile => "Project & Profile",
            Self::SaveSchedule => "Save & Schedule",
        }
    }

    /// The next step, clamped at the last one.
    pub fn advance(self) -> Self {
        Self::from_number((self.to_number() + 1).min(MAX_STEP))
            .expect("clamped step number is in range")
    }

    /// The previous step, floored at the first one.
    pub fn back(self) -> Self {
        Self::from_number(self.to_number().saturating_sub(1).max(MIN_STEP))
            .expect("clamped step number is in range")
    }
}
