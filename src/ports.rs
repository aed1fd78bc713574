//! Seams between the user service and the things it drives.
//!
//! Production wiring uses the sea-orm adapters in [`crate::persistence`] and the
//! [`crate::scheduler::CronRegistry`]; tests swap in fakes and mocks.

use async_trait::async_trait;
use entity::{product, user_account};
use uuid::Uuid;

use crate::error::ServerError;
use crate::scheduler::{DailyTrigger, ReminderJob, ReminderKey};

/// Relational storage for user accounts.
#[async_trait]
pub(crate) trait UserStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<user_account::Model>, ServerError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<user_account::Model>, ServerError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_account::Model>, ServerError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<user_account::Model>, ServerError>;

    /// Persist a new record and hand back what was stored.
    async fn insert(&self, user: user_account::Model) -> Result<user_account::Model, ServerError>;

    /// Overwrite every column of an existing record.
    async fn save(&self, user: user_account::Model) -> Result<user_account::Model, ServerError>;

    async fn delete(&self, id: Uuid) -> Result<(), ServerError>;
}

/// Read access to the product catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait ProductCatalog: Send + Sync {
    /// Resolve a product id, failing with [`ServerError::NotFound`] if it does not exist.
    async fn get_product(&self, id: Uuid) -> Result<product::Model, ServerError>;
}

/// Outbound notifications. Delivery is somebody else's problem.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait NotificationSender: Send + Sync {
    async fn create_notification(&self, message: &str) -> Result<(), ServerError>;
}

/// Registry of recurring per-user reminder jobs.
#[async_trait]
pub(crate) trait ReminderScheduler: Send + Sync {
    /// Register `job` under `key` and start it, replacing whatever was there.
    async fn schedule(
        &self,
        key: ReminderKey,
        trigger: DailyTrigger,
        job: ReminderJob,
    ) -> Result<(), ServerError>;

    async fn is_scheduled(&self, key: &ReminderKey) -> bool;

    /// Stop and forget the job under `key`. Returns whether there was one.
    async fn cancel(&self, key: &ReminderKey) -> bool;
}
