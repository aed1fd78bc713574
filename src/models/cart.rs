use entity::product;
use serde::{Serialize, Serializer};

use super::Message;
use crate::constants::{LONELY_CART_MESSAGE, REMINDER_SCHEDULED_MESSAGE, REMINDER_STOPPED_MESSAGE};

/// What `GET /users/id/:id/cart` hands back.
///
/// An empty cart serializes as a message envelope, a filled one as a bare array.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CartContents {
    Empty,
    Products(Vec<product::Model>),
}

impl Serialize for CartContents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CartContents::Empty => Message::new(LONELY_CART_MESSAGE).serialize(serializer),
            CartContents::Products(products) => products.serialize(serializer),
        }
    }
}

/// Result of toggling cart reminders for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReminderOutcome {
    /// Nothing in the cart, so nothing was scheduled or cancelled.
    CartEmpty,
    Scheduled,
    Stopped,
}

impl ReminderOutcome {
    pub(crate) fn message(self) -> &'static str {
        match self {
            ReminderOutcome::CartEmpty => LONELY_CART_MESSAGE,
            ReminderOutcome::Scheduled => REMINDER_SCHEDULED_MESSAGE,
            ReminderOutcome::Stopped => REMINDER_STOPPED_MESSAGE,
        }
    }
}

impl Serialize for ReminderOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Message::new(self.message()).serialize(serializer)
    }
}
