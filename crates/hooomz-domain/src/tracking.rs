//! Time, daily log, and expense records
//!
//! Money is integer cents throughout. An open [`TimeEntry`] (no `ended_at`)
//! is a running clock; duration is only defined once closed.

use crate::error::DomainError;
use crate::ids::{ContactId, EntryId, ExpenseId, ProjectId, TaskId};
use crate::CategoryCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A clock-in/clock-out record for one contact on one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Entry identifier
    pub id: EntryId,
    /// Project worked on
    pub project_id: ProjectId,
    /// Who clocked in
    pub contact_id: ContactId,
    /// Task worked, when tracked at task granularity
    pub task_id: Option<TaskId>,
    /// Clock-in time
    pub started_at: DateTime<Utc>,
    /// Clock-out time; `None` while the clock is running
    pub ended_at: Option<DateTime<Utc>>,
    /// Free-text note
    pub note: Option<String>,
}

impl TimeEntry {
    /// Open a new running entry starting now
    #[must_use]
    pub fn start(project_id: ProjectId, contact_id: ContactId) -> Self {
        Self {
            id: EntryId::new(),
            project_id,
            contact_id,
            task_id: None,
            started_at: Utc::now(),
            ended_at: None,
            note: None,
        }
    }

    /// With a task
    #[inline]
    #[must_use]
    pub fn with_task(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// With a note
    #[inline]
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the clock is still running
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Close the entry at `ended_at`
    ///
    /// # Errors
    /// Returns `DomainError::EndsBeforeStart` if `ended_at` precedes
    /// `started_at`.
    pub fn close(&mut self, ended_at: DateTime<Utc>) -> Result<(), DomainError> {
        if ended_at < self.started_at {
            return Err(DomainError::EndsBeforeStart);
        }
        self.ended_at = Some(ended_at);
        Ok(())
    }

    /// Duration of a closed entry; `None` while running
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.ended_at.map(|end| end - self.started_at)
    }
}

/// End-of-day crew log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Entry identifier
    pub id: EntryId,
    /// Project logged against
    pub project_id: ProjectId,
    /// Work date
    pub date: NaiveDate,
    /// Author
    pub author: ContactId,
    /// What happened on site
    pub summary: String,
    /// Crew hours, quarter-hour resolution kept as hundredths
    pub hours_hundredths: u32,
}

impl DailyLog {
    /// Create a new daily log
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        date: NaiveDate,
        author: ContactId,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            project_id,
            date,
            author,
            summary: summary.into(),
            hours_hundredths: 0,
        }
    }

    /// With logged hours (hundredths of an hour)
    #[inline]
    #[must_use]
    pub fn with_hours_hundredths(mut self, hours: u32) -> Self {
        self.hours_hundredths = hours;
        self
    }
}

/// A job-cost expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier
    pub id: ExpenseId,
    /// Project charged
    pub project_id: ProjectId,
    /// Purchase date
    pub date: NaiveDate,
    /// Vendor name
    pub vendor: String,
    /// Amount in cents
    pub amount_cents: i64,
    /// Category the cost belongs to, when known
    pub category_code: Option<CategoryCode>,
    /// Free-text note
    pub note: Option<String>,
}

impl Expense {
    /// Create a new expense line
    ///
    /// # Errors
    /// Returns `DomainError::NegativeAmount` for negative cents.
    pub fn new(
        project_id: ProjectId,
        date: NaiveDate,
        vendor: impl Into<String>,
        amount_cents: i64,
    ) -> Result<Self, DomainError> {
        if amount_cents < 0 {
            return Err(DomainError::NegativeAmount(amount_cents));
        }
        Ok(Self {
            id: ExpenseId::new(),
            project_id,
            date,
            vendor: vendor.into(),
            amount_cents,
            category_code: None,
            note: None,
        })
    }

    /// With a category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: CategoryCode) -> Self {
        self.category_code = Some(category);
        self
    }

    /// With a note
    #[inline]
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_entry_open_then_closed() {
        let mut entry = TimeEntry::start(ProjectId::new(), ContactId::new());
        assert!(entry.is_open());
        assert!(entry.duration().is_none());

        let end = entry.started_at + Duration::hours(8);
        entry.close(end).unwrap();
        assert!(!entry.is_open());
        assert_eq!(entry.duration(), Some(Duration::hours(8)));
    }

    #[test]
    fn time_entry_rejects_backwards_close() {
        let mut entry = TimeEntry::start(ProjectId::new(), ContactId::new());
        let before = entry.started_at - Duration::minutes(1);
        assert_eq!(entry.close(before), Err(DomainError::EndsBeforeStart));
    }

    #[test]
    fn expense_rejects_negative_amount() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let result = Expense::new(ProjectId::new(), date, "Supply House", -500);
        assert_eq!(result.unwrap_err(), DomainError::NegativeAmount(-500));
    }

    #[test]
    fn expense_builder() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let expense = Expense::new(ProjectId::new(), date, "Supply House", 12_550)
            .unwrap()
            .with_note("tile thinset");
        assert_eq!(expense.amount_cents, 12_550);
        assert_eq!(expense.note.as_deref(), Some("tile thinset"));
    }
}
