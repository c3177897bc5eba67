//! In-memory integration tests for the user roster.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskDraft, services::TaskStoreService,
};
use taskboard::user::{
    adapters::memory::InMemoryUserRepository,
    domain::UserId,
    services::{UserRosterError, UserRosterService},
};

type TestRoster = UserRosterService<InMemoryUserRepository>;

#[fixture]
fn roster() -> TestRoster {
    UserRosterService::new(Arc::new(InMemoryUserRepository::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_list_delete_round_trip(roster: TestRoster) {
    let mirza = roster
        .create("Mirza".to_owned())
        .await
        .expect("user creation should succeed");
    let noah = roster
        .create("Noah".to_owned())
        .await
        .expect("user creation should succeed");

    let listing = roster.list().await.expect("listing should succeed");
    assert_eq!(listing, vec![mirza.clone(), noah.clone()]);

    roster
        .delete(mirza.id())
        .await
        .expect("deletion should succeed");

    let remaining = roster.list().await.expect("listing should succeed");
    assert_eq!(remaining, vec![noah]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_id_fails_not_found(roster: TestRoster) {
    let result = roster.delete(UserId::new(99_999)).await;
    assert!(matches!(result, Err(UserRosterError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_and_task_store_counters_are_independent(roster: TestRoster) {
    let tasks = TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );

    for name in ["Mirza", "Noah", "Wilma"] {
        roster
            .create(name.to_owned())
            .await
            .expect("user creation should succeed");
    }

    let task = tasks
        .create(TaskDraft::new("First task"))
        .await
        .expect("task creation should succeed");

    assert_eq!(task.task_id().value(), 1);
}
