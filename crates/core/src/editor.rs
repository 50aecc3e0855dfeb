//! Finalized-content editor state and publish-date composition (PRD-35).
//!
//! One [`EditorState`] exists per finalized content result in the preview
//! and scheduling step. Records are keyed by a client-generated [`Uuid`]
//! until save time, when the backend-assigned `content_id` becomes
//! authoritative.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// One finalized content result awaiting save/schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    /// Client-generated key, unique within the wizard session.
    pub id: Uuid,
    /// Rendered HTML content.
    pub content: String,
    /// Backend-assigned content id (authoritative after save).
    pub content_id: i64,
    /// The topic this piece was generated from.
    pub topic: String,
    /// Medium label, normalized to Title Case for display.
    pub medium: String,
    /// Resolved project the piece belongs to.
    pub project_id: String,
    /// Whether the user flagged this piece for scheduling.
    pub scheduled: bool,
    /// Publication timestamp; set whenever `scheduled` is true.
    pub publish_date: Option<DateTime<Utc>>,
}

impl EditorState {
    pub fn new(
        content: String,
        content_id: i64,
        topic: String,
        medium: String,
        project_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            content_id,
            topic,
            medium,
            project_id,
            scheduled: false,
            publish_date: None,
        }
    }

    /// Flag this piece for scheduling at the given timestamp.
    pub fn set_schedule(&mut self, publish_at: DateTime<Utc>) {
        self.scheduled = true;
        self.publish_date = Some(publish_at);
    }

    /// Unflag this piece; the publish date is cleared with it.
    pub fn clear_schedule(&mut self) {
        self.scheduled = false;
        self.publish_date = None;
    }

    /// The publish timestamp for a scheduled item.
    ///
    /// A scheduled item with no publish date is a validation error; the
    /// batch coordinator calls this before building schedule requests.
    pub fn publish_at(&self) -> Result<DateTime<Utc>, CoreError> {
        self.publish_date.ok_or_else(|| {
            CoreError::Validation(format!(
                "Item '{}' is flagged for scheduling but has no publish date",
                self.id
            ))
        })
    }
}

/// Compose a publish timestamp from the calendar date and time-of-day the
/// scheduling UI collects separately. Serialized as RFC 3339 on the wire.
pub fn compose_publish_at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> EditorState {
        EditorState::new(
            "<p>body</p>".to_string(),
            42,
            "benefits of product X".to_string(),
            "Blog Post".to_string(),
            "proj-1".to_string(),
        )
    }

    #[test]
    fn new_items_are_unscheduled() {
        let item = item();
        assert!(!item.scheduled);
        assert!(item.publish_date.is_none());
    }

    #[test]
    fn client_ids_are_unique() {
        assert_ne!(item().id, item().id);
    }

    #[test]
    fn set_and_clear_schedule_stay_consistent() {
        let mut item = item();
        let at = compose_publish_at(
            NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        );
        item.set_schedule(at);
        assert!(item.scheduled);
        assert_eq!(item.publish_at().unwrap(), at);

        item.clear_schedule();
        assert!(!item.scheduled);
        assert!(item.publish_date.is_none());
    }

    #[test]
    fn scheduled_without_date_is_invalid() {
        let mut item = item();
        item.scheduled = true;
        assert!(item.publish_at().is_err());
    }

    #[test]
    fn compose_publish_at_is_utc_rfc3339() {
        let at = compose_publish_at(
            NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        );
        assert_eq!(at.to_rfc3339(), "2026-09-15T14:00:00+00:00");
    }
}
