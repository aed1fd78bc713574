//! Miscellaneous utils
use ulid::Ulid;
use uuid::Uuid;

pub(crate) mod pass;

/// Generate a new time-ordered row id.
pub(crate) fn new_id() -> Uuid {
    Uuid::from(Ulid::new())
}
