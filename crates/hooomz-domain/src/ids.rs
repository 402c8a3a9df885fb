//! Typed record identifiers
//!
//! Every entity gets its own ULID newtype so a `TaskId` can never be handed
//! to an API expecting a `ProjectId`. ULIDs sort by creation time, which the
//! activity feed and list views rely on.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use ulid::{Generator, Ulid};

/// A plain `Ulid::new()` is random within a millisecond, so ids minted
/// back to back would not sort in mint order. One shared monotonic
/// generator keeps id order equal to creation order process-wide.
static ULIDS: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

fn next_ulid() -> Ulid {
    let mut ulids = ULIDS.lock().unwrap_or_else(PoisonError::into_inner);
    // generate() only fails when the random component overflows within a
    // single millisecond.
    ulids.generate().unwrap_or_else(|_| Ulid::new())
}

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Ulid);

        impl $name {
            /// Generate a new identifier
            #[inline]
            #[must_use]
            pub fn new() -> Self {
                Self(next_ulid())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ulid::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Ulid::from_string(s)?))
            }
        }
    };
}

define_id!(
    /// Unique project identifier
    ProjectId
);
define_id!(
    /// Unique loop identifier
    LoopId
);
define_id!(
    /// Unique task identifier
    TaskId
);
define_id!(
    /// Unique contact identifier
    ContactId
);
define_id!(
    /// Unique activity event identifier
    EventId
);
define_id!(
    /// Unique time entry identifier
    EntryId
);
define_id!(
    /// Unique expense identifier
    ExpenseId
);
