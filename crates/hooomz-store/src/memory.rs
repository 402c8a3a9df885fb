//! In-memory store
//!
//! DashMap-backed, cheap to clone (maps are shared via Arc). Doubles as the
//! mock-data fallback and as the state the JSON store persists.

use crate::error::{EntityKind, StoreError};
use crate::traits::OpsStore;
use async_trait::async_trait;
use dashmap::DashMap;
use hooomz_domain::{
    ActivityEvent, Contact, ContactId, DailyLog, EventId, Expense, Loop, LoopId, Project,
    ProjectId, Task, TaskId, TimeEntry,
};
use std::sync::Arc;

/// DashMap-backed store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    projects: Arc<DashMap<ProjectId, Project>>,
    loops: Arc<DashMap<LoopId, Loop>>,
    tasks: Arc<DashMap<TaskId, Task>>,
    contacts: Arc<DashMap<ContactId, Contact>>,
    events: Arc<DashMap<EventId, ActivityEvent>>,
    time_entries: Arc<DashMap<hooomz_domain::EntryId, TimeEntry>>,
    daily_logs: Arc<DashMap<hooomz_domain::EntryId, DailyLog>>,
    expenses: Arc<DashMap<hooomz_domain::ExpenseId, Expense>>,
    named: Arc<DashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every projects row (used by the JSON store's persister)
    pub(crate) fn all_projects(&self) -> Vec<Project> {
        let mut rows: Vec<_> = self.projects.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|p| p.id);
        rows
    }

    pub(crate) fn all_loops(&self) -> Vec<Loop> {
        let mut rows: Vec<_> = self.loops.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|l| l.id);
        rows
    }

    pub(crate) fn all_tasks(&self) -> Vec<Task> {
        let mut rows: Vec<_> = self.tasks.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|t| t.id);
        rows
    }

    pub(crate) fn all_contacts(&self) -> Vec<Contact> {
        let mut rows: Vec<_> = self.contacts.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|c| c.id);
        rows
    }

    pub(crate) fn all_events(&self) -> Vec<ActivityEvent> {
        let mut rows: Vec<_> = self.events.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|e| e.id);
        rows
    }

    pub(crate) fn all_time_entries(&self) -> Vec<TimeEntry> {
        let mut rows: Vec<_> = self.time_entries.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|e| e.id);
        rows
    }

    pub(crate) fn all_daily_logs(&self) -> Vec<DailyLog> {
        let mut rows: Vec<_> = self.daily_logs.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|l| l.id);
        rows
    }

    pub(crate) fn all_expenses(&self) -> Vec<Expense> {
        let mut rows: Vec<_> = self.expenses.iter().map(|e| e.value().clone()).collect();
        rows.sort_by_key(|x| x.id);
        rows
    }

    // Lookups for records the trait has no getter for; the JSON store needs
    // the previous value to undo a mutation whose file write failed.

    pub(crate) fn event(&self, id: EventId) -> Option<ActivityEvent> {
        self.events.get(&id).map(|e| e.value().clone())
    }

    pub(crate) fn time_entry(&self, id: hooomz_domain::EntryId) -> Option<TimeEntry> {
        self.time_entries.get(&id).map(|e| e.value().clone())
    }

    pub(crate) fn daily_log(&self, id: hooomz_domain::EntryId) -> Option<DailyLog> {
        self.daily_logs.get(&id).map(|e| e.value().clone())
    }

    pub(crate) fn expense(&self, id: hooomz_domain::ExpenseId) -> Option<Expense> {
        self.expenses.get(&id).map(|e| e.value().clone())
    }
}

macro_rules! insert_unique {
    ($map:expr, $id:expr, $value:expr, $kind:expr) => {{
        if $map.contains_key(&$id) {
            return Err(StoreError::duplicate($kind, $id));
        }
        $map.insert($id, $value);
        Ok(())
    }};
}

macro_rules! update_existing {
    ($map:expr, $id:expr, $value:expr, $kind:expr) => {{
        if !$map.contains_key(&$id) {
            return Err(StoreError::not_found($kind, $id));
        }
        $map.insert($id, $value);
        Ok(())
    }};
}

#[async_trait]
impl OpsStore for MemoryStore {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        insert_unique!(self.projects, project.id, project, EntityKind::Project)
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.projects
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or_else(|| StoreError::not_found(EntityKind::Project, id))
    }

    async fn update_project(&self, project: Project) -> Result<(), StoreError> {
        update_existing!(self.projects, project.id, project, EntityKind::Project)
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        self.projects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Project, id))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.all_projects())
    }

    async fn insert_loop(&self, lp: Loop) -> Result<(), StoreError> {
        insert_unique!(self.loops, lp.id, lp, EntityKind::Loop)
    }

    async fn get_loop(&self, id: LoopId) -> Result<Loop, StoreError> {
        self.loops
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or_else(|| StoreError::not_found(EntityKind::Loop, id))
    }

    async fn update_loop(&self, lp: Loop) -> Result<(), StoreError> {
        update_existing!(self.loops, lp.id, lp, EntityKind::Loop)
    }

    async fn delete_loop(&self, id: LoopId) -> Result<(), StoreError> {
        self.loops
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Loop, id))
    }

    async fn loops_by_project(&self, project_id: ProjectId) -> Result<Vec<Loop>, StoreError> {
        let mut rows: Vec<_> = self
            .loops
            .iter()
            .filter(|e| e.value().project_id == project_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|l| l.id);
        Ok(rows)
    }

    async fn insert_task(&self, task: Task) -> Result<(), StoreError> {
        insert_unique!(self.tasks, task.id, task, EntityKind::Task)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, StoreError> {
        self.tasks
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or_else(|| StoreError::not_found(EntityKind::Task, id))
    }

    async fn update_task(&self, task: Task) -> Result<(), StoreError> {
        update_existing!(self.tasks, task.id, task, EntityKind::Task)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Task, id))
    }

    async fn tasks_by_loop(&self, loop_id: LoopId) -> Result<Vec<Task>, StoreError> {
        let mut rows: Vec<_> = self
            .tasks
            .iter()
            .filter(|e| e.value().loop_id == loop_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|t| t.id);
        Ok(rows)
    }

    async fn insert_contact(&self, contact: Contact) -> Result<(), StoreError> {
        insert_unique!(self.contacts, contact.id, contact, EntityKind::Contact)
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.contacts
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or_else(|| StoreError::not_found(EntityKind::Contact, id))
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), StoreError> {
        self.contacts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Contact, id))
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.all_contacts())
    }

    async fn append_event(&self, event: ActivityEvent) -> Result<(), StoreError> {
        insert_unique!(self.events, event.id, event, EntityKind::Event)
    }

    async fn delete_event(&self, id: EventId) -> Result<(), StoreError> {
        self.events
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Event, id))
    }

    async fn events_by_project(
        &self,
        project_id: ProjectId,
        limit: usize,
    ) -> Result<Vec<ActivityEvent>, StoreError> {
        let mut rows: Vec<_> = self
            .events
            .iter()
            .filter(|e| e.value().project_id == project_id)
            .map(|e| e.value().clone())
            .collect();
        // ULIDs sort by creation time; newest first for the feed.
        rows.sort_by_key(|e| std::cmp::Reverse(e.id));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError> {
        insert_unique!(self.time_entries, entry.id, entry, EntityKind::TimeEntry)
    }

    async fn update_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError> {
        update_existing!(self.time_entries, entry.id, entry, EntityKind::TimeEntry)
    }

    async fn delete_time_entry(&self, id: hooomz_domain::EntryId) -> Result<(), StoreError> {
        self.time_entries
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::TimeEntry, id))
    }

    async fn open_entry_for(
        &self,
        contact_id: ContactId,
    ) -> Result<Option<TimeEntry>, StoreError> {
        Ok(self
            .time_entries
            .iter()
            .find(|e| e.value().contact_id == contact_id && e.value().is_open())
            .map(|e| e.value().clone()))
    }

    async fn entries_by_contact(
        &self,
        contact_id: ContactId,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let mut rows: Vec<_> = self
            .time_entries
            .iter()
            .filter(|e| e.value().contact_id == contact_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn insert_daily_log(&self, log: DailyLog) -> Result<(), StoreError> {
        insert_unique!(self.daily_logs, log.id, log, EntityKind::DailyLog)
    }

    async fn delete_daily_log(&self, id: hooomz_domain::EntryId) -> Result<(), StoreError> {
        self.daily_logs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::DailyLog, id))
    }

    async fn daily_logs_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<DailyLog>, StoreError> {
        let mut rows: Vec<_> = self
            .daily_logs
            .iter()
            .filter(|e| e.value().project_id == project_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|l| l.id);
        Ok(rows)
    }

    async fn insert_expense(&self, expense: Expense) -> Result<(), StoreError> {
        insert_unique!(self.expenses, expense.id, expense, EntityKind::Expense)
    }

    async fn delete_expense(&self, id: hooomz_domain::ExpenseId) -> Result<(), StoreError> {
        self.expenses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(EntityKind::Expense, id))
    }

    async fn expenses_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Expense>, StoreError> {
        let mut rows: Vec<_> = self
            .expenses
            .iter()
            .filter(|e| e.value().project_id == project_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|x| x.id);
        Ok(rows)
    }

    async fn read_collection(&self, key: &str) -> Result<serde_json::Value, StoreError> {
        Ok(self
            .named
            .get(key)
            .map(|e| e.value().clone())
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new())))
    }

    async fn write_collection(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.named.insert(key.to_string(), value);
        Ok(())
    }
}
