//! Service orchestration tests for the task store.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskId, TaskPatch},
    services::{TaskStoreError, TaskStoreService},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

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

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let created = service
        .create(TaskDraft::new("Buy nasi tomato").with_category("Groceries"))
        .await
        .expect("task creation should succeed");

    let fetched = service
        .get(created.task_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_sequential_from_one(service: TestService) {
    for expected in 1..=3_u64 {
        let task = service
            .create(TaskDraft::new("Sequential"))
            .await
            .expect("task creation should succeed");
        assert_eq!(task.task_id(), TaskId::new(expected));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_deletion(service: TestService) {
    let first = service
        .create(TaskDraft::new("First"))
        .await
        .expect("task creation should succeed");
    service
        .delete(first.task_id())
        .await
        .expect("deletion should succeed");

    let second = service
        .create(TaskDraft::new("Second"))
        .await
        .expect("task creation should succeed");

    assert_eq!(second.task_id(), TaskId::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_drafts_do_not_consume_identifiers(service: TestService) {
    let rejected = service.create(TaskDraft::default()).await;
    assert!(matches!(rejected, Err(TaskStoreError::Validation(_))));

    let task = service
        .create(TaskDraft::new("Valid"))
        .await
        .expect("task creation should succeed");
    assert_eq!(task.task_id(), TaskId::new(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_insertion_order(service: TestService) {
    for title in ["Alpha", "Beta", "Gamma"] {
        service
            .create(TaskDraft::new(title))
            .await
            .expect("task creation should succeed");
    }

    let titles: Vec<String> = service
        .list()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|task| task.title().to_owned())
        .collect();

    assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_id_fails_not_found(service: TestService) {
    let result = service.get(TaskId::new(99_999)).await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_id_fails_not_found(service: TestService) {
    let result = service
        .update(TaskId::new(99_999), TaskPatch::default())
        .await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_id_fails_not_found(service: TestService) {
    let result = service.delete(TaskId::new(99_999)).await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record(service: TestService) {
    let kept = service
        .create(TaskDraft::new("Keep me"))
        .await
        .expect("task creation should succeed");
    let doomed = service
        .create(TaskDraft::new("Delete me"))
        .await
        .expect("task creation should succeed");

    let removed = service
        .delete(doomed.task_id())
        .await
        .expect("deletion should succeed");
    assert_eq!(removed, doomed);

    let result = service.get(doomed.task_id()).await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));

    let remaining = service.list().await.expect("listing should succeed");
    assert_eq!(remaining, vec![kept]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_failure_leaves_record_unchanged(service: TestService) {
    let created = service
        .create(TaskDraft::new("Scheduled").with_schedule(Some(date(20)), Some(date(22))))
        .await
        .expect("task creation should succeed");

    let patch = TaskPatch {
        start_date: Some(Some(date(23))),
        ..TaskPatch::default()
    };
    let result = service.update(created.task_id(), patch).await;
    assert!(matches!(result, Err(TaskStoreError::Validation(_))));

    let stored = service
        .get(created.task_id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_the_overlay(service: TestService) {
    let created = service
        .create(TaskDraft::new("Update me").with_desc("original"))
        .await
        .expect("task creation should succeed");

    let patch = TaskPatch {
        title: Some("Updated title".to_owned()),
        ..TaskPatch::default()
    };
    let updated = service
        .update(created.task_id(), patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Updated title");
    assert_eq!(updated.desc(), "original");
    assert!(updated.updated_at() >= created.updated_at());

    let stored = service
        .get(created.task_id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, updated);
}
