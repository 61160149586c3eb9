//! Demo content for a fresh store.

use chrono::Duration;
use devfocus_shared::{OwnerId, Priority, TaskStatus};
use devfocus_store::{NewProject, NewSession, NewTask, Result};

use crate::facade::DataFacade;

/// Populate the facade with a small, realistic workspace for `owner`.
///
/// Goes through the public operations, so events fire and completions earn
/// points like any other caller's would.
pub fn seed_demo_data(facade: &mut DataFacade, owner: &OwnerId, owner_display: &str) -> Result<()> {
    let now = facade.store().now();

    let portfolio = facade.create_project(
        owner,
        NewProject {
            name: "Portfolio Website".into(),
            description: "Personal portfolio website to showcase projects".into(),
        },
    )?;
    let shop = facade.create_project(
        owner,
        NewProject {
            name: "E-commerce App".into(),
            description: "Online store application with a web frontend and an API".into(),
        },
    )?;

    let tasks = [
        (portfolio.id, "Design homepage", Priority::High, 2, true),
        (portfolio.id, "Implement responsive layout", Priority::Medium, 5, false),
        (shop.id, "Set up product catalog", Priority::High, 3, false),
        (shop.id, "Integrate payment gateway", Priority::Low, 10, false),
    ];
    for (project_id, title, priority, due_in_days, done) in tasks {
        let task = facade.create_task(
            owner,
            NewTask {
                title: title.into(),
                project_id,
                due_date: now + Duration::days(due_in_days),
                priority,
                status: TaskStatus::NotStarted,
                github_issue_id: None,
            },
        )?;
        if done {
            facade.complete_task(owner, task.id)?;
        }
    }

    facade.create_session(
        owner,
        NewSession {
            title: "Morning deep work".into(),
            start_time: now + Duration::hours(16),
            duration_minutes: 90,
            meeting_url: None,
            calendar_event_id: None,
        },
    )?;
    facade.create_session(
        owner,
        NewSession {
            title: "Pair programming".into(),
            start_time: now + Duration::days(2),
            duration_minutes: 60,
            meeting_url: Some("https://meet.example.com/pairing".into()),
            calendar_event_id: None,
        },
    )?;

    facade.post_chat_message(owner, owner_display, "Hello everyone, back to focus mode!")?;

    tracing::info!(%owner, "demo data seeded");
    Ok(())
}
