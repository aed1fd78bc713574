use async_trait::async_trait;
use chrono::Utc;
use entity::notification::ActiveModel;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::error::ServerError;
use crate::ports::NotificationSender;
use crate::utils::new_id;

/// Records notifications in the `notification` table for a delivery worker to pick up.
#[derive(Clone)]
pub(crate) struct SeaOrmNotificationSender {
    db: DatabaseConnection,
}

impl SeaOrmNotificationSender {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        SeaOrmNotificationSender { db }
    }
}

#[async_trait]
impl NotificationSender for SeaOrmNotificationSender {
    async fn create_notification(&self, message: &str) -> Result<(), ServerError> {
        ActiveModel {
            id: Set(new_id()),
            message: Set(message.to_owned()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }
}
