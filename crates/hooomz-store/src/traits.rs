//! The `OpsStore` trait
//!
//! One async trait covering every record type plus free-form named
//! collections. List operations return owned vectors sorted the way the UI
//! consumes them (feeds newest-first, everything else oldest-first by ULID).

use crate::StoreError;
use async_trait::async_trait;
use hooomz_domain::{
    ActivityEvent, Contact, ContactId, DailyLog, EntryId, EventId, Expense, ExpenseId, Loop,
    LoopId, Project, ProjectId, Task, TaskId, TimeEntry,
};

/// Storage operations the service layer is written against
#[async_trait]
pub trait OpsStore: Send + Sync {
    // Projects

    /// Insert a project; errors on duplicate id
    async fn insert_project(&self, project: Project) -> Result<(), StoreError>;
    /// Fetch a project by id
    async fn get_project(&self, id: ProjectId) -> Result<Project, StoreError>;
    /// Replace an existing project
    async fn update_project(&self, project: Project) -> Result<(), StoreError>;
    /// Delete a project (compensation path)
    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError>;
    /// All projects, oldest first
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    // Loops

    /// Insert a loop; errors on duplicate id
    async fn insert_loop(&self, lp: Loop) -> Result<(), StoreError>;
    /// Fetch a loop by id
    async fn get_loop(&self, id: LoopId) -> Result<Loop, StoreError>;
    /// Replace an existing loop
    async fn update_loop(&self, lp: Loop) -> Result<(), StoreError>;
    /// Delete a loop (compensation path)
    async fn delete_loop(&self, id: LoopId) -> Result<(), StoreError>;
    /// Loops of a project, oldest first
    async fn loops_by_project(&self, project_id: ProjectId) -> Result<Vec<Loop>, StoreError>;

    // Tasks

    /// Insert a task; errors on duplicate id
    async fn insert_task(&self, task: Task) -> Result<(), StoreError>;
    /// Fetch a task by id
    async fn get_task(&self, id: TaskId) -> Result<Task, StoreError>;
    /// Replace an existing task
    async fn update_task(&self, task: Task) -> Result<(), StoreError>;
    /// Delete a task (compensation path)
    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError>;
    /// Tasks of a loop, oldest first
    async fn tasks_by_loop(&self, loop_id: LoopId) -> Result<Vec<Task>, StoreError>;

    // Contacts

    /// Insert a contact; errors on duplicate id
    async fn insert_contact(&self, contact: Contact) -> Result<(), StoreError>;
    /// Fetch a contact by id
    async fn get_contact(&self, id: ContactId) -> Result<Contact, StoreError>;
    /// Delete a contact (compensation path)
    async fn delete_contact(&self, id: ContactId) -> Result<(), StoreError>;
    /// All contacts, oldest first
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;

    // Activity feed

    /// Append an activity event
    async fn append_event(&self, event: ActivityEvent) -> Result<(), StoreError>;
    /// Remove an event (compensation path)
    async fn delete_event(&self, id: EventId) -> Result<(), StoreError>;
    /// A project's feed, NEWEST first, at most `limit` entries
    async fn events_by_project(
        &self,
        project_id: ProjectId,
        limit: usize,
    ) -> Result<Vec<ActivityEvent>, StoreError>;

    // Time tracking

    /// Insert a time entry; errors on duplicate id
    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError>;
    /// Replace an existing time entry
    async fn update_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError>;
    /// Delete a time entry (compensation path)
    async fn delete_time_entry(&self, id: EntryId) -> Result<(), StoreError>;
    /// The contact's currently running entry, if any
    async fn open_entry_for(&self, contact_id: ContactId) -> Result<Option<TimeEntry>, StoreError>;
    /// A contact's entries, oldest first
    async fn entries_by_contact(&self, contact_id: ContactId)
        -> Result<Vec<TimeEntry>, StoreError>;

    // Daily logs and expenses

    /// Insert a daily log
    async fn insert_daily_log(&self, log: DailyLog) -> Result<(), StoreError>;
    /// Delete a daily log (compensation path)
    async fn delete_daily_log(&self, id: EntryId) -> Result<(), StoreError>;
    /// A project's daily logs, oldest first
    async fn daily_logs_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<DailyLog>, StoreError>;
    /// Insert an expense
    async fn insert_expense(&self, expense: Expense) -> Result<(), StoreError>;
    /// Delete an expense (compensation path)
    async fn delete_expense(&self, id: ExpenseId) -> Result<(), StoreError>;
    /// A project's expenses, oldest first
    async fn expenses_by_project(&self, project_id: ProjectId)
        -> Result<Vec<Expense>, StoreError>;

    // Named collections (free-form JSON arrays, localStorage style)

    /// Read a named collection; missing collections read as an empty array
    async fn read_collection(&self, key: &str) -> Result<serde_json::Value, StoreError>;
    /// Replace a named collection
    async fn write_collection(&self, key: &str, value: serde_json::Value)
        -> Result<(), StoreError>;
}
