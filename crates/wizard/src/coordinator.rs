//! Batch save-and-schedule coordinator (PRD-35).
//!
//! Persists every finalized item, then schedules the flagged ones:
//!
//! 1. One persist request per item, fanned out concurrently and jointly
//!    awaited (no ordering dependency between items).
//! 2. If **any** persist failed, the aggregate failure is reported with
//!    the failing item ids and scheduling is not attempted. This is an
//!    explicit gate, not a partial-continue.
//! 3. Otherwise, one schedule request per `scheduled` item, fanned out
//!    concurrently, each referencing the persisted content id.
//! 4. Schedule failures are reported by id but are non-fatal: the saves
//!    are already committed.
//!
//! There is no automatic retry and no cancellation; a retry re-runs the
//! whole batch. Network errors and non-2xx responses are treated
//! identically as per-item failures.

use futures::future::join_all;

use copyforge_core::batch::{BatchFailure, BatchPhase, BatchReport};
use copyforge_core::editor::EditorState;
use copyforge_services::content_store::SaveContentRequest;
use copyforge_services::schedule::ScheduleRequest;
use copyforge_services::{ContentStore, ScheduleService};

use crate::error::WizardError;
use crate::session::WizardSession;

/// Run one save-and-schedule batch over the session's finalized items.
///
/// The session's batch phase moves through the state machine as the run
/// progresses; the returned [`BatchReport`] is also what the API hands to
/// the user. A validation problem (no items, or a flagged item without a
/// publish date) aborts before any network call.
pub async fn run_batch(
    session: &mut WizardSession,
    store: &dyn ContentStore,
    scheduler: &dyn ScheduleService,
) -> Result<BatchReport, WizardError> {
    if session.items().is_empty() {
        return Err(copyforge_core::CoreError::Validation(
            "No content items to save".to_string(),
        )
        .into());
    }
    // Pre-flight: every flagged item must carry a publish date before a
    // single request goes out.
    for item in session.items() {
        if item.scheduled {
            item.publish_at()?;
        }
    }

    session.set_phase(BatchPhase::Saving)?;
    let user_id = session.user_id.clone();
    // Snapshot the working set: items are consumed, not mutated, once the
    // batch begins.
    let items = session.items().to_vec();

    let mut report = BatchReport::default();

    // --- Phase 1: persist everything, concurrently ---

    let saves = items.iter().map(|item| {
        let user_id = user_id.clone();
        async move {
            let request = SaveContentRequest {
                name: item.topic.clone(),
                content: item.content.clone(),
                project_id: item.project_id.clone(),
            };
            let result = store.save_content(item.content_id, &user_id, &request).await;
            (item, result)
        }
    });

    for (item, result) in join_all(saves).await {
        match result {
            Ok(()) => report.saved.push(item.content_id),
            Err(e) => report.save_failures.push(BatchFailure {
                item_id: item.id,
                content_id: Some(item.content_id),
                message: e.to_string(),
            }),
        }
    }

    if !report.save_failures.is_empty() {
        let failed: Vec<_> = report.save_failures.iter().map(|f| f.item_id).collect();
        tracing::error!(
            session_id = %session.id,
            failed = ?failed,
            saved = report.saved.len(),
            "Batch save failed; scheduling skipped"
        );
        session.set_phase(BatchPhase::PartialFailure)?;
        return Ok(report);
    }

    // --- Phase 2: schedule the flagged items, concurrently ---

    let flagged: Vec<&EditorState> = items.iter().filter(|i| i.scheduled).collect();

    if flagged.is_empty() {
        tracing::info!(session_id = %session.id, saved = report.saved.len(), "Batch saved; nothing flagged for scheduling");
        session.set_phase(BatchPhase::Done)?;
        return Ok(report);
    }

    session.set_phase(BatchPhase::Scheduling)?;

    // Pre-flight above guarantees every flagged item carries a date.
    let schedules = flagged
        .into_iter()
        .filter_map(|item| item.publish_date.map(|publish_at| (item, publish_at)))
        .map(|(item, publish_at)| {
            let user_id = user_id.clone();
            async move {
                let request = ScheduleRequest::pending(item.content_id, publish_at, &user_id);
                let result = scheduler.create_schedule(&request).await;
                (item, result)
            }
        });

    for (item, result) in join_all(schedules).await {
        match result {
            Ok(_event) => report.scheduled.push(item.content_id),
            Err(e) => report.schedule_failures.push(BatchFailure {
                item_id: item.id,
                content_id: Some(item.content_id),
                message: e.to_string(),
            }),
        }
    }

    if report.schedule_failures.is_empty() {
        tracing::info!(
            session_id = %session.id,
            saved = report.saved.len(),
            scheduled = report.scheduled.len(),
            "Batch saved and scheduled"
        );
    } else {
        // Non-fatal: the saves above are already committed.
        let failed: Vec<_> = report.schedule_failures.iter().map(|f| f.item_id).collect();
        tracing::warn!(
            session_id = %session.id,
            failed = ?failed,
            "Batch saved; some schedule requests failed"
        );
    }
    session.set_phase(BatchPhase::Done)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use chrono::{DateTime, Utc};

    use copyforge_core::batch::BatchOutcome;
    use copyforge_services::schedule::ScheduledEvent;
    use copyforge_services::ServiceError;

    /// Content-store fake: records saved ids, fails for a chosen set.
    struct FakeStore {
        calls: Mutex<Vec<i64>>,
        fail_ids: HashSet<i64>,
    }

    impl FakeStore {
        fn new(fail_ids: impl IntoIterator<Item = i64>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_ids: fail_ids.into_iter().collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl ContentStore for FakeStore {
        async fn save_content(
            &self,
            content_id: i64,
            _user_id: &str,
            _request: &SaveContentRequest,
        ) -> Result<(), ServiceError> {
            self.calls.lock().unwrap().push(content_id);
            if self.fail_ids.contains(&content_id) {
                return Err(ServiceError::Api { status: 500, body: "persist failed".into() });
            }
            Ok(())
        }
    }

    /// Scheduler fake: records requests, fails for a chosen set.
    struct FakeScheduler {
        requests: Mutex<Vec<ScheduleRequest>>,
        fail_ids: HashSet<i64>,
    }

    impl FakeScheduler {
        fn new(fail_ids: impl IntoIterator<Item = i64>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_ids: fail_ids.into_iter().collect(),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl ScheduleService for FakeScheduler {
        async fn create_schedule(
            &self,
            request: &ScheduleRequest,
        ) -> Result<ScheduledEvent, ServiceError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail_ids.contains(&request.content_id) {
                return Err(ServiceError::Api { status: 500, body: "schedule failed".into() });
            }
            Ok(ScheduledEvent {
                id: request.content_id * 10,
                content_id: request.content_id,
                publish_at: request.publish_at,
                status: request.status.clone(),
            })
        }

        async fn list_schedules(&self, _user_id: &str) -> Result<Vec<ScheduledEvent>, ServiceError> {
            Ok(Vec::new())
        }

        async fn update_schedule(
            &self,
            _id: i64,
            _publish_at: DateTime<Utc>,
        ) -> Result<ScheduledEvent, ServiceError> {
            unimplemented!("not exercised")
        }

        async fn delete_schedule(&self, _id: i64) -> Result<(), ServiceError> {
            unimplemented!("not exercised")
        }
    }

    fn publish_at() -> DateTime<Utc> {
        "2026-09-15T09:00:00Z".parse().unwrap()
    }

    /// A session on the final step with `n` saved-ready items; the first
    /// `flagged` of them are flagged for scheduling.
    fn session_with_items(n: usize, flagged: usize) -> WizardSession {
        let mut session = WizardSession::new("user-1".to_string());
        let items = (0..n)
            .map(|i| {
                let mut item = copyforge_core::editor::EditorState::new(
                    format!("<p>{i}</p>"),
                    i as i64 + 1,
                    format!("topic {i}"),
                    "Blog Post".to_string(),
                    "proj-1".to_string(),
                );
                if i < flagged {
                    item.set_schedule(publish_at());
                }
                item
            })
            .collect();
        session.replace_items(items);
        session
    }

    #[tokio::test]
    async fn all_saved_flagged_subset_scheduled() {
        // 3 saved, 2 flagged -> exactly 2 schedule POSTs.
        let mut session = session_with_items(3, 2);
        let store = FakeStore::new([]);
        let scheduler = FakeScheduler::new([]);

        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();

        assert_eq!(report.saved.len(), 3);
        assert_eq!(report.scheduled, vec![1, 2]);
        assert_eq!(scheduler.request_count(), 2);
        assert_eq!(report.outcome(), BatchOutcome::Success);
        assert_eq!(session.phase(), BatchPhase::Done);

        // Each schedule request references the persisted content id and is
        // created pending.
        let requests = scheduler.requests.lock().unwrap();
        assert!(requests.iter().all(|r| r.status == "pending"));
        let ids: HashSet<i64> = requests.iter().map(|r| r.content_id).collect();
        assert_eq!(ids, HashSet::from([1, 2]));
    }

    #[tokio::test]
    async fn save_failure_gates_scheduling() {
        let mut session = session_with_items(3, 3);
        let store = FakeStore::new([2]);
        let scheduler = FakeScheduler::new([]);

        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();

        // No schedule call was issued at all.
        assert_eq!(scheduler.request_count(), 0);
        assert_eq!(report.outcome(), BatchOutcome::SaveFailed);
        assert_eq!(session.phase(), BatchPhase::PartialFailure);

        // Exactly the failing id is reported, not a generic message.
        assert_eq!(report.save_failures.len(), 1);
        assert_eq!(report.save_failures[0].content_id, Some(2));
        assert!(report.save_failures[0].message.contains("500"));
        assert_eq!(report.saved, vec![1, 3]);
    }

    #[tokio::test]
    async fn all_saves_attempted_even_when_one_fails() {
        // Fan-out, not a pipeline: a failing item does not stop the others.
        let mut session = session_with_items(4, 0);
        let store = FakeStore::new([1]);
        let scheduler = FakeScheduler::new([]);

        let _ = run_batch(&mut session, &store, &scheduler).await.unwrap();

        assert_eq!(store.calls.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn schedule_failure_is_nonfatal_and_reported_by_id() {
        // 3 saved, 2 flagged, 1 of those 2 fails to schedule.
        let mut session = session_with_items(3, 2);
        let store = FakeStore::new([]);
        let scheduler = FakeScheduler::new([2]);

        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();

        assert_eq!(report.outcome(), BatchOutcome::SavedWithScheduleFailures);
        assert_eq!(session.phase(), BatchPhase::Done);
        assert_eq!(report.saved.len(), 3);
        assert_eq!(report.scheduled, vec![1]);
        assert_eq!(report.schedule_failures.len(), 1);
        assert_eq!(report.schedule_failures[0].content_id, Some(2));
    }

    #[tokio::test]
    async fn nothing_flagged_skips_scheduling_phase() {
        let mut session = session_with_items(2, 0);
        let store = FakeStore::new([]);
        let scheduler = FakeScheduler::new([]);

        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();

        assert_eq!(scheduler.request_count(), 0);
        assert_eq!(report.outcome(), BatchOutcome::Success);
        assert_eq!(session.phase(), BatchPhase::Done);
    }

    #[tokio::test]
    async fn empty_batch_is_a_validation_error() {
        let mut session = WizardSession::new("user-1".to_string());
        let store = FakeStore::new([]);
        let scheduler = FakeScheduler::new([]);

        let err = run_batch(&mut session, &store, &scheduler).await.unwrap_err();
        assert_matches!(err, WizardError::Core(_));
        assert_eq!(session.phase(), BatchPhase::Idle);
    }

    #[tokio::test]
    async fn flagged_item_without_date_aborts_before_any_call() {
        let mut session = session_with_items(2, 0);
        let id = session.items()[0].id;
        session.item_mut(id).unwrap().scheduled = true;

        let store = FakeStore::new([]);
        let scheduler = FakeScheduler::new([]);

        assert!(run_batch(&mut session, &store, &scheduler).await.is_err());
        assert!(store.calls.lock().unwrap().is_empty());
        assert_eq!(session.phase(), BatchPhase::Idle);
    }

    #[tokio::test]
    async fn manual_retry_after_partial_failure() {
        let mut session = session_with_items(2, 1);
        let scheduler = FakeScheduler::new([]);

        // First run: one save fails.
        let store = FakeStore::new([1]);
        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();
        assert_eq!(report.outcome(), BatchOutcome::SaveFailed);

        // User re-triggers the whole batch; this time everything succeeds.
        let store = FakeStore::new([]);
        let report = run_batch(&mut session, &store, &scheduler).await.unwrap();
        assert_eq!(report.outcome(), BatchOutcome::Success);
        assert_eq!(store.calls.lock().unwrap().len(), 2);
        assert_eq!(session.phase(), BatchPhase::Done);
    }
}
