//! Response models
//!
//! Entities live in the `entity` crate; these are the shapes handed back to callers.

pub(crate) mod cart;
pub(crate) mod user;

use serde::Serialize;

pub(crate) use cart::*;
pub(crate) use user::*;

/// Informational envelope carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Message {
    pub(crate) message: String,
}

impl Message {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}
