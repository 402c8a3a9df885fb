//! Testing utilities for the Hooomz Ops workspace
//!
//! Shared test fixtures: canned users, intake sessions, and a populated
//! store for tests that need an existing project to work against.

#![allow(missing_docs)]

use chrono::NaiveDate;
use hooomz_auth::{Role, User};
use hooomz_catalog::{BuildTier, RoomKind};
use hooomz_core::IntakeSession;
use hooomz_domain::{Contact, Loop, Project, Task};
use hooomz_store::{MemoryStore, OpsStore};

pub fn owner() -> User {
    User::new("Pat", Role::Owner)
}

pub fn project_manager() -> User {
    User::new("Jo", Role::ProjectManager)
}

pub fn crew_member() -> User {
    User::new("Sam", Role::Crew)
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

/// A complete intake session ready to submit
pub fn complete_intake_session() -> IntakeSession {
    IntakeSession::new()
        .with_customer("Dana Miller")
        .with_email("dana@example.com")
        .with_phone("555-0100")
        .with_address("12 Oak St")
        .with_room(RoomKind::Kitchen, BuildTier::Better)
        .with_room(RoomKind::FullBath, BuildTier::Good)
}

/// A store seeded with one project, one loop, and one open task
///
/// Returns the store plus the seeded records so tests can reference their
/// ids directly.
pub async fn seeded_store() -> (MemoryStore, Project, Loop, Task) {
    let store = MemoryStore::new();

    let contact = Contact::new("Dana Miller")
        .with_email("dana@example.com")
        .with_role("customer");
    store.insert_contact(contact.clone()).await.unwrap();

    let project = Project::new("Miller Kitchen Remodel", "12 Oak St").with_contact(contact.id);
    store.insert_project(project.clone()).await.unwrap();

    let lp = Loop::new(project.id, "Tile & Finish");
    store.insert_loop(lp.clone()).await.unwrap();

    let task = Task::new(lp.id, "Install Floor Tile");
    store.insert_task(task.clone()).await.unwrap();

    (store, project, lp, task)
}
