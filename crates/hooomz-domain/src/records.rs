//! Primary operational records
//!
//! Projects own loops, loops own tasks, and every mutation of any of them
//! lands in the project's activity feed as an [`ActivityEvent`].

use crate::codes::{CategoryCode, StageCode};
use crate::ids::{ContactId, EventId, LoopId, ProjectId, TaskId};
use crate::status::{LoopStatus, ProjectStatus, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A customer project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier
    pub id: ProjectId,
    /// Display name ("Miller Kitchen Remodel")
    pub name: String,
    /// Job site address
    pub address: String,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Associated contacts (customer, subs, inspectors)
    pub contact_ids: Vec<ContactId>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project in Intake status
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name: name.into(),
            address: address.into(),
            status: ProjectStatus::Intake,
            contact_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// With an associated contact
    #[inline]
    #[must_use]
    pub fn with_contact(mut self, contact_id: ContactId) -> Self {
        self.contact_ids.push(contact_id);
        self
    }

    /// With an explicit status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Stamp the record as just mutated
    #[inline]
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A loop: a grouping of related tasks within a project (a construction phase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loop {
    /// Loop identifier
    pub id: LoopId,
    /// Owning project
    pub project_id: ProjectId,
    /// Display name ("Rough-in", "Tile & Finish")
    pub name: String,
    /// Stage this loop belongs to
    pub stage_code: Option<StageCode>,
    /// Loop status
    pub status: LoopStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Loop {
    /// Create a new open loop
    #[must_use]
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id: LoopId::new(),
            project_id,
            name: name.into(),
            stage_code: None,
            status: LoopStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// With a stage code
    #[inline]
    #[must_use]
    pub fn with_stage(mut self, stage: StageCode) -> Self {
        self.stage_code = Some(stage);
        self
    }
}

/// A unit of work with status, assignee, and optional scheduling metadata
///
/// A task belongs to exactly one loop. Classification codes come from the
/// task matcher at creation time; `needs_review` flags tasks the matcher
/// could not classify so the UI can prompt manual selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier
    pub id: TaskId,
    /// Owning loop
    pub loop_id: LoopId,
    /// Free-text task name as entered
    pub name: String,
    /// Work-type category
    pub category_code: CategoryCode,
    /// Construction stage, when classified
    pub stage_code: Option<StageCode>,
    /// Finer-grained bucket within the category ("tile", "panel")
    pub subcategory: Option<String>,
    /// Task status
    pub status: TaskStatus,
    /// Assigned contact
    pub assignee: Option<ContactId>,
    /// Scheduled work date
    pub scheduled: Option<NaiveDate>,
    /// True when the matcher could not classify the name
    pub needs_review: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new unclassified task
    #[must_use]
    pub fn new(loop_id: LoopId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            loop_id,
            name: name.into(),
            category_code: CategoryCode::unclassified(),
            stage_code: None,
            subcategory: None,
            status: TaskStatus::Todo,
            assignee: None,
            scheduled: None,
            needs_review: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// With classification codes (clears `needs_review`)
    #[inline]
    #[must_use]
    pub fn with_classification(mut self, category: CategoryCode, stage: Option<StageCode>) -> Self {
        self.category_code = category;
        self.stage_code = stage;
        self.needs_review = false;
        self
    }

    /// With a subcategory
    #[inline]
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// With an assignee
    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, contact_id: ContactId) -> Self {
        self.assignee = Some(contact_id);
        self
    }

    /// With a scheduled date
    #[inline]
    #[must_use]
    pub fn with_scheduled(mut self, date: NaiveDate) -> Self {
        self.scheduled = Some(date);
        self
    }

    /// Stamp the record as just mutated
    #[inline]
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// What an activity event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Intake wizard submitted
    IntakeReceived,
    /// Project created or status changed
    ProjectUpdated,
    /// Loop created or closed
    LoopUpdated,
    /// Task created
    TaskCreated,
    /// Task status changed
    TaskUpdated,
    /// Crew clocked in
    ClockIn,
    /// Crew clocked out
    ClockOut,
    /// Daily log filed
    DailyLogged,
    /// Expense recorded
    ExpenseRecorded,
    /// Estimate produced
    EstimateProduced,
}

/// An entry in a project's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Event identifier (ULID, so feed order follows id order)
    pub id: EventId,
    /// Project the event belongs to
    pub project_id: ProjectId,
    /// Event kind
    pub kind: ActivityKind,
    /// Category the event relates to, when applicable
    pub category_code: Option<CategoryCode>,
    /// Acting contact, when known
    pub actor: Option<ContactId>,
    /// Human-readable detail line
    pub detail: String,
    /// Event timestamp
    pub at: DateTime<Utc>,
}

impl ActivityEvent {
    /// Create a new event stamped now
    #[must_use]
    pub fn new(project_id: ProjectId, kind: ActivityKind, detail: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            project_id,
            kind,
            category_code: None,
            actor: None,
            detail: detail.into(),
            at: Utc::now(),
        }
    }

    /// With a related category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: CategoryCode) -> Self {
        self.category_code = Some(category);
        self
    }

    /// With the acting contact
    #[inline]
    #[must_use]
    pub fn with_actor(mut self, actor: ContactId) -> Self {
        self.actor = Some(actor);
        self
    }
}

/// A person or company the business works with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Trade, for subs ("electrician", "tile setter")
    pub trade: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Relationship roles ("customer", "sub", "inspector")
    pub roles: Vec<String>,
}

impl Contact {
    /// Create a new contact
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            trade: None,
            email: None,
            phone: None,
            roles: Vec::new(),
        }
    }

    /// With a trade
    #[inline]
    #[must_use]
    pub fn with_trade(mut self, trade: impl Into<String>) -> Self {
        self.trade = Some(trade.into());
        self
    }

    /// With an email address
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// With a phone number
    #[inline]
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// With a relationship role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn project_builder() {
        let contact = ContactId::new();
        let project = Project::new("Miller Kitchen", "12 Oak St").with_contact(contact);

        assert_eq!(project.status, ProjectStatus::Intake);
        assert_eq!(project.contact_ids, vec![contact]);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn task_starts_unclassified() {
        let task = Task::new(LoopId::new(), "Mystery work");
        assert!(task.needs_review);
        assert!(task.category_code.is_unclassified());
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn task_classification_clears_review_flag() {
        let task = Task::new(LoopId::new(), "Install Floor Tile").with_classification(
            CategoryCode::from_str("TL").unwrap(),
            Some(StageCode::from_str("ST-FN").unwrap()),
        );
        assert!(!task.needs_review);
        assert_eq!(task.category_code.as_str(), "TL");
    }

    #[test]
    fn activity_event_builder() {
        let project_id = ProjectId::new();
        let actor = ContactId::new();
        let event = ActivityEvent::new(project_id, ActivityKind::TaskCreated, "created a task")
            .with_category(CategoryCode::from_str("EL").unwrap())
            .with_actor(actor);

        assert_eq!(event.project_id, project_id);
        assert_eq!(event.actor, Some(actor));
        assert_eq!(event.kind, ActivityKind::TaskCreated);
    }

    #[test]
    fn records_roundtrip_json() {
        let task = Task::new(LoopId::new(), "Hang drywall");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
