//! Storage error taxonomy

/// Which entity a not-found or conflict refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Loop,
    Task,
    Contact,
    Event,
    TimeEntry,
    DailyLog,
    Expense,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Project => "project",
            EntityKind::Loop => "loop",
            EntityKind::Task => "task",
            EntityKind::Contact => "contact",
            EntityKind::Event => "event",
            EntityKind::TimeEntry => "time entry",
            EntityKind::DailyLog => "daily log",
            EntityKind::Expense => "expense",
        };
        f.write_str(name)
    }
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record not found
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Insert collided with an existing record
    #[error("{kind} already exists: {id}")]
    Duplicate { kind: EntityKind, id: String },

    /// (De)serialization failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem IO failed
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Not-found constructor
    #[inline]
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Duplicate constructor
    #[inline]
    #[must_use]
    pub fn duplicate(kind: EntityKind, id: impl ToString) -> Self {
        Self::Duplicate {
            kind,
            id: id.to_string(),
        }
    }

    /// Whether this is a not-found error
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
