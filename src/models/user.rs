use chrono::{DateTime, Utc};
use entity::user_account::{self, Cart};
use serde::Serialize;
use uuid::Uuid;

/// A user with the password stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PublicUser {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) cart: Option<Cart>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<user_account::Model> for PublicUser {
    fn from(user: user_account::Model) -> Self {
        PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            cart: user.cart,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// The response output for `POST /users`
#[derive(Debug, Serialize)]
pub(crate) struct UserCreated {
    pub(crate) status: u16,
    pub(crate) message: String,
    pub(crate) user: PublicUser,
}

/// The response output for `PATCH /users/:username`
#[derive(Debug, Serialize)]
pub(crate) struct UserUpdated {
    pub(crate) message: String,
    pub(crate) user: PublicUser,
}

/// The response output for `DELETE /users/:username`
#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct UserDeleted {
    pub(crate) status: bool,
    pub(crate) message: String,
}
