//! In-memory integration tests for the task store lifecycle.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskId, TaskPatch},
    services::{TaskStoreError, TaskStoreService},
};

type TestService = TaskStoreService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, day, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn completion_patch(flag: bool) -> TaskPatch {
    TaskPatch {
        is_completed: Some(flag),
        ..TaskPatch::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_complete_delete(service: TestService) {
    let created = service
        .create(
            TaskDraft::new("Ship the release")
                .with_desc("Tag, build, announce")
                .with_category("Work")
                .with_schedule(Some(date(20)), Some(date(22))),
        )
        .await
        .expect("task creation should succeed");
    assert_eq!(created.task_id(), TaskId::new(1));
    assert!(!created.is_completed());

    let renamed = service
        .update(
            created.task_id(),
            TaskPatch {
                title: Some("Ship the hotfix".to_owned()),
                ..TaskPatch::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(renamed.title(), "Ship the hotfix");
    assert_eq!(renamed.desc(), "Tag, build, announce");

    let completed = service
        .update(created.task_id(), completion_patch(true))
        .await
        .expect("completion should succeed");
    assert!(completed.is_completed());
    assert!(completed.completed_at().is_some());

    let deleted = service
        .delete(created.task_id())
        .await
        .expect("deletion should succeed");
    assert_eq!(deleted.task_id(), created.task_id());

    let listing = service.list().await.expect("listing should succeed");
    assert!(listing.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_stamp_is_idempotent_across_updates(service: TestService) {
    let created = service
        .create(TaskDraft::new("Idempotent completion"))
        .await
        .expect("task creation should succeed");

    let first = service
        .update(created.task_id(), completion_patch(true))
        .await
        .expect("first completion should succeed");
    let second = service
        .update(created.task_id(), completion_patch(true))
        .await
        .expect("second completion should succeed");

    assert_eq!(first.completed_at(), second.completed_at());
    assert!(second.updated_at() >= first.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_round_trip_clears_and_restamps(service: TestService) {
    let created = service
        .create(TaskDraft::new("Round trip"))
        .await
        .expect("task creation should succeed");

    let completed = service
        .update(created.task_id(), completion_patch(true))
        .await
        .expect("completion should succeed");
    let reopened = service
        .update(created.task_id(), completion_patch(false))
        .await
        .expect("reopening should succeed");
    assert!(reopened.completed_at().is_none());

    let recompleted = service
        .update(created.task_id(), completion_patch(true))
        .await
        .expect("second completion should succeed");
    assert!(recompleted.completed_at().is_some());
    assert!(recompleted.completed_at() >= completed.completed_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn merged_dates_validated_through_the_service(service: TestService) {
    let created = service
        .create(TaskDraft::new("Scheduled").with_schedule(Some(date(20)), Some(date(22))))
        .await
        .expect("task creation should succeed");

    let result = service
        .update(
            created.task_id(),
            TaskPatch {
                start_date: Some(Some(date(23))),
                ..TaskPatch::default()
            },
        )
        .await;
    assert!(matches!(result, Err(TaskStoreError::Validation(_))));

    let stored = service
        .get(created.task_id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.start_date(), Some(date(20)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_missing_ids_fail_not_found_regardless_of_contents(service: TestService) {
    service
        .create(TaskDraft::new("Occupied"))
        .await
        .expect("task creation should succeed");

    let missing = TaskId::new(99_999);
    assert!(matches!(
        service.get(missing).await,
        Err(TaskStoreError::NotFound(_))
    ));
    assert!(matches!(
        service.update(missing, TaskPatch::default()).await,
        Err(TaskStoreError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(missing).await,
        Err(TaskStoreError::NotFound(_))
    ));
}
