//! JSON-file store
//!
//! The localStorage model, on disk: every collection is one file holding a
//! JSON array, named after its collection key (`hooomz-daily-logs.json`,
//! `hooomz_framing_cut_list.json`, ...). Record collections load into memory
//! at open and each mutation rewrites the affected file through a temp file
//! plus rename; a mutation whose file write fails is undone in memory so the
//! error branch never leaves memory and disk disagreeing. Free-form named
//! collections read through a moka cache.

use crate::collections;
use crate::error::{EntityKind, StoreError};
use crate::memory::MemoryStore;
use crate::traits::OpsStore;
use async_trait::async_trait;
use hooomz_domain::{
    ActivityEvent, Contact, ContactId, DailyLog, EntryId, EventId, Expense, ExpenseId, Loop,
    LoopId, Project, ProjectId, Task, TaskId, TimeEntry,
};
use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// How many named-collection values the read cache keeps
const CACHE_CAPACITY: u64 = 64;

/// File-backed store with in-memory state
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
    state: MemoryStore,
    /// Serializes file rewrites so concurrent mutations cannot interleave a
    /// temp file rename.
    write_lock: Arc<Mutex<()>>,
    /// Read cache for free-form named collections
    cache: Cache<String, Arc<serde_json::Value>>,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory and loading any
    /// existing record collection files
    ///
    /// # Errors
    /// Fails on unreadable directory or malformed collection files.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;

        let store = Self {
            dir,
            state: MemoryStore::new(),
            write_lock: Arc::new(Mutex::new(())),
            cache: Cache::new(CACHE_CAPACITY),
        };

        store.load_records().await?;
        Ok(store)
    }

    /// Directory the store writes into
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn load_records(&self) -> Result<(), StoreError> {
        let projects: Vec<Project> = self.load_rows(collections::PROJECTS).await?;
        for row in projects {
            self.state.insert_project(row).await?;
        }
        let loops: Vec<Loop> = self.load_rows(collections::LOOPS).await?;
        for row in loops {
            self.state.insert_loop(row).await?;
        }
        let tasks: Vec<Task> = self.load_rows(collections::TASKS).await?;
        for row in tasks {
            self.state.insert_task(row).await?;
        }
        let contacts: Vec<Contact> = self.load_rows(collections::CONTACTS).await?;
        for row in contacts {
            self.state.insert_contact(row).await?;
        }
        let events: Vec<ActivityEvent> = self.load_rows(collections::ACTIVITY).await?;
        for row in events {
            self.state.append_event(row).await?;
        }
        let entries: Vec<TimeEntry> = self.load_rows(collections::TIME_ENTRIES).await?;
        for row in entries {
            self.state.insert_time_entry(row).await?;
        }
        let logs: Vec<DailyLog> = self.load_rows(collections::DAILY_LOGS).await?;
        for row in logs {
            self.state.insert_daily_log(row).await?;
        }
        let expenses: Vec<Expense> = self.load_rows(collections::EXPENSES).await?;
        for row in expenses {
            self.state.insert_expense(row).await?;
        }
        tracing::debug!(dir = %self.dir.display(), "json store loaded");
        Ok(())
    }

    async fn load_rows<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let path = self.file_path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Rewrite one collection file atomically (temp file + rename)
    async fn persist<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let bytes = serde_json::to_vec_pretty(rows)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let path = self.file_path(key);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        tracing::trace!(collection = key, rows = rows.len(), "persisted");
        Ok(())
    }

    async fn persist_value(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let bytes = serde_json::to_vec_pretty(value)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let path = self.file_path(key);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl OpsStore for JsonStore {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        let id = project.id;
        self.state.insert_project(project).await?;
        if let Err(err) = self
            .persist(collections::PROJECTS, &self.state.all_projects())
            .await
        {
            let _ = self.state.delete_project(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.state.get_project(id).await
    }

    async fn update_project(&self, project: Project) -> Result<(), StoreError> {
        let previous = self.state.get_project(project.id).await?;
        self.state.update_project(project).await?;
        if let Err(err) = self
            .persist(collections::PROJECTS, &self.state.all_projects())
            .await
        {
            let _ = self.state.update_project(previous).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        let removed = self.state.get_project(id).await?;
        self.state.delete_project(id).await?;
        if let Err(err) = self
            .persist(collections::PROJECTS, &self.state.all_projects())
            .await
        {
            let _ = self.state.insert_project(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.state.list_projects().await
    }

    async fn insert_loop(&self, lp: Loop) -> Result<(), StoreError> {
        let id = lp.id;
        self.state.insert_loop(lp).await?;
        if let Err(err) = self.persist(collections::LOOPS, &self.state.all_loops()).await {
            let _ = self.state.delete_loop(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn get_loop(&self, id: LoopId) -> Result<Loop, StoreError> {
        self.state.get_loop(id).await
    }

    async fn update_loop(&self, lp: Loop) -> Result<(), StoreError> {
        let previous = self.state.get_loop(lp.id).await?;
        self.state.update_loop(lp).await?;
        if let Err(err) = self.persist(collections::LOOPS, &self.state.all_loops()).await {
            let _ = self.state.update_loop(previous).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_loop(&self, id: LoopId) -> Result<(), StoreError> {
        let removed = self.state.get_loop(id).await?;
        self.state.delete_loop(id).await?;
        if let Err(err) = self.persist(collections::LOOPS, &self.state.all_loops()).await {
            let _ = self.state.insert_loop(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn loops_by_project(&self, project_id: ProjectId) -> Result<Vec<Loop>, StoreError> {
        self.state.loops_by_project(project_id).await
    }

    async fn insert_task(&self, task: Task) -> Result<(), StoreError> {
        let id = task.id;
        self.state.insert_task(task).await?;
        if let Err(err) = self.persist(collections::TASKS, &self.state.all_tasks()).await {
            let _ = self.state.delete_task(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, StoreError> {
        self.state.get_task(id).await
    }

    async fn update_task(&self, task: Task) -> Result<(), StoreError> {
        let previous = self.state.get_task(task.id).await?;
        self.state.update_task(task).await?;
        if let Err(err) = self.persist(collections::TASKS, &self.state.all_tasks()).await {
            let _ = self.state.update_task(previous).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        let removed = self.state.get_task(id).await?;
        self.state.delete_task(id).await?;
        if let Err(err) = self.persist(collections::TASKS, &self.state.all_tasks()).await {
            let _ = self.state.insert_task(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn tasks_by_loop(&self, loop_id: LoopId) -> Result<Vec<Task>, StoreError> {
        self.state.tasks_by_loop(loop_id).await
    }

    async fn insert_contact(&self, contact: Contact) -> Result<(), StoreError> {
        let id = contact.id;
        self.state.insert_contact(contact).await?;
        if let Err(err) = self
            .persist(collections::CONTACTS, &self.state.all_contacts())
            .await
        {
            let _ = self.state.delete_contact(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.state.get_contact(id).await
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), StoreError> {
        let removed = self.state.get_contact(id).await?;
        self.state.delete_contact(id).await?;
        if let Err(err) = self
            .persist(collections::CONTACTS, &self.state.all_contacts())
            .await
        {
            let _ = self.state.insert_contact(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        self.state.list_contacts().await
    }

    async fn append_event(&self, event: ActivityEvent) -> Result<(), StoreError> {
        let id = event.id;
        self.state.append_event(event).await?;
        if let Err(err) = self
            .persist(collections::ACTIVITY, &self.state.all_events())
            .await
        {
            let _ = self.state.delete_event(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), StoreError> {
        let removed = self
            .state
            .event(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Event, id))?;
        self.state.delete_event(id).await?;
        if let Err(err) = self
            .persist(collections::ACTIVITY, &self.state.all_events())
            .await
        {
            let _ = self.state.append_event(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn events_by_project(
        &self,
        project_id: ProjectId,
        limit: usize,
    ) -> Result<Vec<ActivityEvent>, StoreError> {
        self.state.events_by_project(project_id, limit).await
    }

    async fn insert_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError> {
        let id = entry.id;
        self.state.insert_time_entry(entry).await?;
        if let Err(err) = self
            .persist(collections::TIME_ENTRIES, &self.state.all_time_entries())
            .await
        {
            let _ = self.state.delete_time_entry(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn update_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError> {
        let previous = self
            .state
            .time_entry(entry.id)
            .ok_or_else(|| StoreError::not_found(EntityKind::TimeEntry, entry.id))?;
        self.state.update_time_entry(entry).await?;
        if let Err(err) = self
            .persist(collections::TIME_ENTRIES, &self.state.all_time_entries())
            .await
        {
            let _ = self.state.update_time_entry(previous).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_time_entry(&self, id: EntryId) -> Result<(), StoreError> {
        let removed = self
            .state
            .time_entry(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::TimeEntry, id))?;
        self.state.delete_time_entry(id).await?;
        if let Err(err) = self
            .persist(collections::TIME_ENTRIES, &self.state.all_time_entries())
            .await
        {
            let _ = self.state.insert_time_entry(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn open_entry_for(
        &self,
        contact_id: ContactId,
    ) -> Result<Option<TimeEntry>, StoreError> {
        self.state.open_entry_for(contact_id).await
    }

    async fn entries_by_contact(
        &self,
        contact_id: ContactId,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.state.entries_by_contact(contact_id).await
    }

    async fn insert_daily_log(&self, log: DailyLog) -> Result<(), StoreError> {
        let id = log.id;
        self.state.insert_daily_log(log).await?;
        if let Err(err) = self
            .persist(collections::DAILY_LOGS, &self.state.all_daily_logs())
            .await
        {
            let _ = self.state.delete_daily_log(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_daily_log(&self, id: EntryId) -> Result<(), StoreError> {
        let removed = self
            .state
            .daily_log(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::DailyLog, id))?;
        self.state.delete_daily_log(id).await?;
        if let Err(err) = self
            .persist(collections::DAILY_LOGS, &self.state.all_daily_logs())
            .await
        {
            let _ = self.state.insert_daily_log(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn daily_logs_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<DailyLog>, StoreError> {
        self.state.daily_logs_by_project(project_id).await
    }

    async fn insert_expense(&self, expense: Expense) -> Result<(), StoreError> {
        let id = expense.id;
        self.state.insert_expense(expense).await?;
        if let Err(err) = self
            .persist(collections::EXPENSES, &self.state.all_expenses())
            .await
        {
            let _ = self.state.delete_expense(id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<(), StoreError> {
        let removed = self
            .state
            .expense(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Expense, id))?;
        self.state.delete_expense(id).await?;
        if let Err(err) = self
            .persist(collections::EXPENSES, &self.state.all_expenses())
            .await
        {
            let _ = self.state.insert_expense(removed).await;
            return Err(err);
        }
        Ok(())
    }

    async fn expenses_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Expense>, StoreError> {
        self.state.expenses_by_project(project_id).await
    }

    async fn read_collection(&self, key: &str) -> Result<serde_json::Value, StoreError> {
        if let Some(cached) = self.cache.get(key).await {
            return Ok((*cached).clone());
        }

        let path = self.file_path(key);
        let value = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                serde_json::Value::Array(Vec::new())
            }
            Err(err) => return Err(err.into()),
        };

        self.cache
            .insert(key.to_string(), Arc::new(value.clone()))
            .await;
        Ok(value)
    }

    async fn write_collection(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.persist_value(key, &value).await?;
        self.cache.insert(key.to_string(), Arc::new(value)).await;
        Ok(())
    }
}
