//! End-to-end behaviour of the facade: rewards, cascades, chat and events.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use devfocus_client_lib::events::{
    EVENT_MILESTONE_UNLOCKED, EVENT_POINTS_AWARDED, EVENT_TASK_COMPLETED,
};
use devfocus_client_lib::{DataFacade, StoreEvent};
use devfocus_shared::{
    EntityKind, ManualClock, MilestoneKind, OwnerId, Priority, TaskStatus, ValidationError,
};
use devfocus_store::{NewProject, NewSession, NewTask, StoreError, Task};
use tokio::sync::broadcast;
use uuid::Uuid;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap()
}

fn facade() -> (DataFacade, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start()));
    (DataFacade::with_clock(clock.clone(), 64), clock)
}

fn project(facade: &mut DataFacade, owner: &OwnerId) -> Uuid {
    facade
        .create_project(
            owner,
            NewProject {
                name: "Portfolio Website".into(),
                description: "showcase".into(),
            },
        )
        .unwrap()
        .id
}

fn task(facade: &mut DataFacade, owner: &OwnerId, project_id: Uuid, title: &str) -> Task {
    facade
        .create_task(
            owner,
            NewTask {
                title: title.into(),
                project_id,
                due_date: start() + Duration::days(3),
                priority: Priority::Medium,
                status: TaskStatus::NotStarted,
                github_issue_id: None,
            },
        )
        .unwrap()
}

fn session(facade: &mut DataFacade, owner: &OwnerId, minutes: u32) -> Uuid {
    facade
        .create_session(
            owner,
            NewSession {
                title: "Focus block".into(),
                start_time: start() + Duration::hours(1),
                duration_minutes: minutes,
                meeting_url: None,
                calendar_event_id: None,
            },
        )
        .unwrap()
        .id
}

fn milestone_count(facade: &DataFacade, owner: &OwnerId, kind: MilestoneKind) -> usize {
    facade
        .store()
        .milestones_for(owner)
        .iter()
        .filter(|m| m.kind == kind)
        .count()
}

fn drain(rx: &mut broadcast::Receiver<StoreEvent>) -> Vec<&'static str> {
    let mut names = Vec::new();
    while let Ok(event) = rx.try_recv() {
        names.push(event.name());
    }
    names
}

#[test]
fn completing_a_task_awards_five_points_once() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);
    let t = task(&mut facade, &owner, project_id, "Design homepage");

    let done = facade.complete_task(&owner, t.id).unwrap();
    assert_eq!(done.status, TaskStatus::Completed);
    assert_eq!(facade.total_points(&owner), 5);

    let again = facade.complete_task(&owner, t.id).unwrap();
    assert_eq!(again, done);
    assert_eq!(facade.total_points(&owner), 5);
    assert_eq!(facade.store().points().len(), 1);
}

#[test]
fn completing_a_session_always_awards_ten() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let id = session(&mut facade, &owner, 30);

    facade.complete_session(&owner, id).unwrap();
    assert_eq!(facade.total_points(&owner), 10);

    // no status gate for sessions
    facade.complete_session(&owner, id).unwrap();
    assert_eq!(facade.total_points(&owner), 20);
}

#[test]
fn five_completions_unlock_a_single_streak() {
    let (mut facade, clock) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);
    let tasks: Vec<Task> = (0..6)
        .map(|i| task(&mut facade, &owner, project_id, &format!("task {i}")))
        .collect();

    for t in &tasks[..5] {
        clock.advance(Duration::seconds(5));
        facade.complete_task(&owner, t.id).unwrap();
    }
    assert_eq!(facade.total_points(&owner), 25);
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::TaskStreak), 1);

    facade.complete_task(&owner, tasks[5].id).unwrap();
    assert_eq!(facade.total_points(&owner), 30);
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::TaskStreak), 1);
}

#[test]
fn streak_ignores_completions_older_than_a_week() {
    let (mut facade, clock) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);
    let tasks: Vec<Task> = (0..5)
        .map(|i| task(&mut facade, &owner, project_id, &format!("task {i}")))
        .collect();

    facade.complete_task(&owner, tasks[0].id).unwrap();
    clock.advance(Duration::days(8));
    for t in &tasks[1..] {
        facade.complete_task(&owner, t.id).unwrap();
    }

    assert_eq!(facade.total_points(&owner), 25);
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::TaskStreak), 0);
}

#[test]
fn tasks_completed_by_update_count_toward_streak_but_earn_nothing() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);

    for i in 0..4 {
        let mut t = task(&mut facade, &owner, project_id, &format!("manual {i}"));
        t.status = TaskStatus::Completed;
        facade.update_task(&owner, t).unwrap();
    }
    assert_eq!(facade.total_points(&owner), 0);
    assert!(facade.store().milestones().is_empty());

    let last = task(&mut facade, &owner, project_id, "the fifth");
    facade.complete_task(&owner, last.id).unwrap();
    assert_eq!(facade.total_points(&owner), 5);
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::TaskStreak), 1);
}

#[test]
fn long_sessions_unlock_study_focus_once() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let first = session(&mut facade, &owner, 400);
    let second = session(&mut facade, &owner, 300);

    facade.complete_session(&owner, first).unwrap();
    facade.complete_session(&owner, second).unwrap();

    assert_eq!(facade.total_points(&owner), 20);
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::StudyFocus), 1);

    facade.complete_session(&owner, second).unwrap();
    assert_eq!(milestone_count(&facade, &owner, MilestoneKind::StudyFocus), 1);
}

#[test]
fn rewards_are_scoped_per_owner() {
    let (mut facade, _) = facade();
    let alice = OwnerId::from("alice");
    let bob = OwnerId::from("bob");

    let a = session(&mut facade, &alice, 600);
    session(&mut facade, &bob, 599);
    let b = session(&mut facade, &bob, 30);

    facade.complete_session(&alice, a).unwrap();
    facade.complete_session(&bob, b).unwrap();

    assert_eq!(facade.total_points(&alice), 10);
    assert_eq!(facade.total_points(&bob), 10);
    assert_eq!(milestone_count(&facade, &alice, MilestoneKind::StudyFocus), 1);
    assert_eq!(milestone_count(&facade, &bob, MilestoneKind::StudyFocus), 1);

    // bob cannot complete alice's session
    let err = facade.complete_session(&bob, a).unwrap_err();
    assert_eq!(err, StoreError::not_found(EntityKind::Session, a));
}

#[test]
fn deleting_a_project_cascades_and_is_forgiving() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let doomed = project(&mut facade, &owner);
    let kept = project(&mut facade, &owner);
    task(&mut facade, &owner, doomed, "a");
    task(&mut facade, &owner, doomed, "b");
    let survivor = task(&mut facade, &owner, kept, "c");

    facade.delete_project(&owner, doomed);
    assert_eq!(facade.list_projects(&owner).len(), 1);
    assert_eq!(facade.list_tasks(&owner), vec![survivor]);

    facade.delete_project(&owner, Uuid::new_v4());
    facade.delete_project(&owner, doomed);
    assert_eq!(facade.list_projects(&owner).len(), 1);
}

#[test]
fn unknown_ids_are_not_found() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let missing = Uuid::new_v4();

    assert_eq!(
        facade.complete_task(&owner, missing).unwrap_err(),
        StoreError::not_found(EntityKind::Task, missing)
    );
    assert_eq!(
        facade.complete_session(&owner, missing).unwrap_err(),
        StoreError::not_found(EntityKind::Session, missing)
    );
    assert_eq!(facade.total_points(&owner), 0);
}

#[test]
fn chat_is_filtered_and_length_checked() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");

    let msg = facade
        .post_chat_message(&owner, "dev@example.com", "you are stupid")
        .unwrap();
    assert_eq!(msg.content, "you are ***");
    assert_eq!(msg.owner_display, "dev@example.com");

    let err = facade
        .post_chat_message(&owner, "dev@example.com", &"y".repeat(501))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::ContentTooLong { len: 501, max: 500 })
    );
    assert_eq!(facade.chat_feed().len(), 1);
}

#[test]
fn completion_events_follow_mutation_order() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);
    let tasks: Vec<Task> = (0..5)
        .map(|i| task(&mut facade, &owner, project_id, &format!("task {i}")))
        .collect();
    for t in &tasks[..4] {
        facade.complete_task(&owner, t.id).unwrap();
    }

    let mut rx = facade.subscribe();
    facade.complete_task(&owner, tasks[4].id).unwrap();
    assert_eq!(
        drain(&mut rx),
        vec![
            EVENT_TASK_COMPLETED,
            EVENT_POINTS_AWARDED,
            EVENT_MILESTONE_UNLOCKED
        ]
    );

    // idempotent re-completion publishes nothing
    facade.complete_task(&owner, tasks[4].id).unwrap();
    assert!(drain(&mut rx).is_empty());

    // neither does a forgiving delete
    facade.delete_task(&owner, Uuid::new_v4());
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn export_covers_tasks_and_sessions() {
    let (mut facade, _) = facade();
    let owner = OwnerId::from("dev");
    let project_id = project(&mut facade, &owner);
    task(&mut facade, &owner, project_id, "Design homepage");
    session(&mut facade, &owner, 45);

    let csv = facade.export_csv(&owner);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("\"Task\",\"Design homepage\""));
    assert!(lines[2].starts_with("\"Session\",\"Focus block\""));
}
