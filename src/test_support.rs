//! Fixtures and fakes shared by unit tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use entity::product::{self, Attribute, Attributes, Images, Rating, Review, Reviews};
use entity::user_account;
use serde_json::json;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::ServerError;
use crate::ports::UserStore;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
}

/// A user called `name` with an `{name}@example.com` address and an empty cart.
pub(crate) fn user_named(name: &str) -> user_account::Model {
    user_account::Model {
        id: Uuid::new_v4(),
        username: name.to_owned(),
        email: format!("{}@example.com", name),
        password: "$argon2id$not-a-real-hash".to_owned(),
        cart: None,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub(crate) fn product_named(name: &str) -> product::Model {
    product::Model {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: format!("A very fine {}", name),
        price: 19.5,
        category: "home".to_owned(),
        quantity: 3,
        images: Some(Images(vec![format!("{}.png", name)])),
        attributes: Some(Attributes(vec![Attribute {
            name: "colour".to_owned(),
            value: "teal".to_owned(),
        }])),
        specifications: Some(json!({ "weight": "1kg" })),
        ratings: Some(Rating {
            average: 4.5,
            count: 2,
        }),
        reviews: Some(Reviews(vec![Review {
            user: "alice".to_owned(),
            rating: 4.5,
            comment: "nice".to_owned(),
        }])),
        user_id: None,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// In-memory user store that keeps insertion order.
#[derive(Default)]
pub(crate) struct FakeUserStore {
    users: Mutex<Vec<user_account::Model>>,
}

impl FakeUserStore {
    pub(crate) fn with_users(users: Vec<user_account::Model>) -> Self {
        FakeUserStore {
            users: Mutex::new(users),
        }
    }

    pub(crate) async fn snapshot(&self, id: Uuid) -> Option<user_account::Model> {
        self.users.lock().await.iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_all(&self) -> Result<Vec<user_account::Model>, ServerError> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<user_account::Model>, ServerError> {
        Ok(self.snapshot(id).await)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_account::Model>, ServerError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user_account::Model>, ServerError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: user_account::Model) -> Result<user_account::Model, ServerError> {
        self.users.lock().await.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: user_account::Model) -> Result<user_account::Model, ServerError> {
        let mut users = self.users.lock().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(ServerError::DbError(sea_orm::DbErr::RecordNotUpdated)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServerError> {
        self.users.lock().await.retain(|u| u.id != id);
        Ok(())
    }
}
