//! Content-idea configuration and validation (PRD-31).
//!
//! The first wizard step collects a topic, one or more target mediums, an
//! optional audience, and how many pieces to generate per medium. This
//! module owns that configuration and the invariants the generator relies
//! on before any network call is made.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Minimum number of content pieces requested per medium.
pub const MIN_CONTENT_PIECES: u8 = 1;

/// Maximum number of content pieces requested per medium.
pub const MAX_CONTENT_PIECES: u8 = 5;

/// Clamp a requested piece count into the supported range.
pub fn clamp_piece_count(requested: u8) -> u8 {
    requested.clamp(MIN_CONTENT_PIECES, MAX_CONTENT_PIECES)
}

// ---------------------------------------------------------------------------
// ContentIdeaConfig
// ---------------------------------------------------------------------------

/// User input from the first wizard step.
///
/// `num_content_pieces` is clamped to `[1, 5]` on every write path, so a
/// stored config is always in range regardless of what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdeaConfig {
    /// The topic the user wants content about.
    pub content_idea: String,
    /// Selected mediums, insertion-ordered, no duplicates.
    pub content_types: Vec<String>,
    /// Optional audience description (empty string = unspecified).
    #[serde(default)]
    pub target_audience: String,
    /// Pieces to generate per medium, always within `[1, 5]`.
    pub num_content_pieces: u8,
}

impl Default for ContentIdeaConfig {
    fn default() -> Self {
        Self {
            content_idea: String::new(),
            content_types: Vec::new(),
            target_audience: String::new(),
            num_content_pieces: MIN_CONTENT_PIECES,
        }
    }
}

impl ContentIdeaConfig {
    /// Build a config, clamping the piece count into range.
    pub fn new(content_idea: String, content_types: Vec<String>, num_content_pieces: u8) -> Self {
        Self {
            content_idea,
            content_types,
            target_audience: String::new(),
            num_content_pieces: clamp_piece_count(num_content_pieces),
        }
    }

    /// Set the piece count, clamping into `[1, 5]`.
    pub fn set_num_content_pieces(&mut self, requested: u8) {
        self.num_content_pieces = clamp_piece_count(requested);
    }

    /// Add a medium if not already selected. Selection order is preserved.
    pub fn add_content_type(&mut self, medium: &str) {
        if !self.content_types.iter().any(|t| t == medium) {
            self.content_types.push(medium.to_string());
        }
    }

    /// Remove a medium by name. Remaining selection order is unchanged.
    pub fn remove_content_type(&mut self, medium: &str) {
        self.content_types.retain(|t| t != medium);
    }

    /// Validate the config before submitting it to the strategy service.
    ///
    /// A blank idea or an empty medium selection is a validation error and
    /// must abort the request before any network call.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content_idea.trim().is_empty() {
            return Err(CoreError::Validation(
                "Content idea must not be blank".to_string(),
            ));
        }
        if self.content_types.is_empty() {
            return Err(CoreError::Validation(
                "At least one content type must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

/// Optional publication window sent alongside the idea config so the
/// strategy service can spread suggested pieces across it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Validate that `from` does not come after `to` when both are set.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(CoreError::Validation(format!(
                    "Date range start {from} is after end {to}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ContentIdeaConfig {
        ContentIdeaConfig::new(
            "benefits of product X".to_string(),
            vec!["blog post".to_string()],
            1,
        )
    }

    // -- clamping --

    #[test]
    fn clamp_below_minimum() {
        assert_eq!(clamp_piece_count(0), MIN_CONTENT_PIECES);
    }

    #[test]
    fn clamp_above_maximum() {
        assert_eq!(clamp_piece_count(6), MAX_CONTENT_PIECES);
        assert_eq!(clamp_piece_count(255), MAX_CONTENT_PIECES);
    }

    #[test]
    fn clamp_in_range_is_identity() {
        for n in MIN_CONTENT_PIECES..=MAX_CONTENT_PIECES {
            assert_eq!(clamp_piece_count(n), n);
        }
    }

    #[test]
    fn constructor_clamps() {
        let config = ContentIdeaConfig::new("topic".into(), vec!["tweet".into()], 0);
        assert_eq!(config.num_content_pieces, 1);
        let config = ContentIdeaConfig::new("topic".into(), vec!["tweet".into()], 9);
        assert_eq!(config.num_content_pieces, 5);
    }

    #[test]
    fn setter_clamps() {
        let mut config = valid_config();
        config.set_num_content_pieces(0);
        assert_eq!(config.num_content_pieces, 1);
        config.set_num_content_pieces(200);
        assert_eq!(config.num_content_pieces, 5);
        config.set_num_content_pieces(3);
        assert_eq!(config.num_content_pieces, 3);
    }

    // -- content type selection --

    #[test]
    fn add_content_type_preserves_order() {
        let mut config = ContentIdeaConfig::default();
        config.add_content_type("blog post");
        config.add_content_type("tweet");
        config.add_content_type("newsletter");
        assert_eq!(config.content_types, vec!["blog post", "tweet", "newsletter"]);
    }

    #[test]
    fn add_content_type_rejects_duplicates() {
        let mut config = ContentIdeaConfig::default();
        config.add_content_type("tweet");
        config.add_content_type("tweet");
        assert_eq!(config.content_types.len(), 1);
    }

    #[test]
    fn remove_content_type_keeps_remaining_order() {
        let mut config = ContentIdeaConfig::default();
        config.add_content_type("blog post");
        config.add_content_type("tweet");
        config.add_content_type("newsletter");
        config.remove_content_type("tweet");
        assert_eq!(config.content_types, vec!["blog post", "newsletter"]);
    }

    // -- validation --

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn blank_idea_is_invalid() {
        let mut config = valid_config();
        config.content_idea = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_content_types_is_invalid() {
        let mut config = valid_config();
        config.content_types.clear();
        assert!(config.validate().is_err());
    }

    // -- date range --

    #[test]
    fn open_ended_range_is_valid() {
        assert!(DateRange::default().validate().is_ok());
        let from_only = DateRange {
            from: NaiveDate::from_ymd_opt(2026, 1, 1),
            to: None,
        };
        assert!(from_only.validate().is_ok());
    }

    #[test]
    fn inverted_range_is_invalid() {
        let range = DateRange {
            from: NaiveDate::from_ymd_opt(2026, 2, 1),
            to: NaiveDate::from_ymd_opt(2026, 1, 1),
        };
        assert!(range.validate().is_err());
    }
}
