//! Account lifecycle, cart mutation and cart reminder scheduling.

use std::sync::Arc;

use chrono::Utc;
use entity::user_account::{self, Cart};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::actions::{NewUser, UserUpdate};
use crate::constants::{
    ADDED_TO_CART_MESSAGE, CART_REMINDER_MESSAGE, EMAIL_EXISTS_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
use crate::error::ServerError;
use crate::models::{CartContents, Message, PublicUser, ReminderOutcome};
use crate::ports::{NotificationSender, ProductCatalog, ReminderScheduler, UserStore};
use crate::scheduler::{DailyTrigger, JobFuture, ReminderJob, ReminderKey};
use crate::utils::{new_id, pass::hash_password};

#[derive(Clone)]
pub(crate) struct UserService {
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductCatalog>,
    reminders: Arc<dyn ReminderScheduler>,
    notifier: Arc<dyn NotificationSender>,
    reminder_trigger: DailyTrigger,
}

fn user_not_found() -> ServerError {
    ServerError::NotFound(USER_NOT_FOUND_MESSAGE.into())
}

impl UserService {
    pub(crate) fn new(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductCatalog>,
        reminders: Arc<dyn ReminderScheduler>,
        notifier: Arc<dyn NotificationSender>,
        reminder_trigger: DailyTrigger,
    ) -> Self {
        UserService {
            users,
            products,
            reminders,
            notifier,
            reminder_trigger,
        }
    }

    /// Register a new user. Emails are unique; usernames are left to the store's constraint.
    pub(crate) async fn create(&self, input: NewUser) -> Result<user_account::Model, ServerError> {
        if self.find_user_by_email(&input.email).await?.is_some() {
            return Err(ServerError::Conflict(EMAIL_EXISTS_MESSAGE.into()));
        }

        let now = Utc::now();
        let user = user_account::Model {
            id: new_id(),
            username: input.username,
            email: input.email,
            password: hash_password(&input.password)?,
            cart: None,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.insert(user).await?;
        info!("Created user {}", user.id);
        Ok(user)
    }

    pub(crate) async fn find_all(&self) -> Result<Vec<PublicUser>, ServerError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    /// Look a user up by username, password hash included.
    pub(crate) async fn find_one(&self, username: &str) -> Result<user_account::Model, ServerError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(user_not_found)
    }

    pub(crate) async fn get_user_by_id(&self, id: Uuid) -> Result<user_account::Model, ServerError> {
        self.users.find_by_id(id).await?.ok_or_else(user_not_found)
    }

    pub(crate) async fn get_current_user(&self, username: &str) -> Result<PublicUser, ServerError> {
        self.find_one(username).await.map(PublicUser::from)
    }

    pub(crate) async fn update(
        &self,
        username: &str,
        update: UserUpdate,
    ) -> Result<PublicUser, ServerError> {
        let mut user = self.find_one(username).await?;

        match update {
            UserUpdate::Password(change) => {
                user.password = hash_password(&change.password)?;
            }
            UserUpdate::Profile(profile) => {
                if let Some(username) = profile.username {
                    user.username = username;
                }
                if let Some(email) = profile.email {
                    user.email = email;
                }
            }
        }
        user.updated_at = Utc::now();

        let user = self.users.save(user).await?;
        Ok(PublicUser::from(user))
    }

    /// Delete a user, along with any cart reminder still scheduled for them.
    pub(crate) async fn remove(&self, username: &str) -> Result<(), ServerError> {
        let user = self.find_one(username).await?;

        self.users.delete(user.id).await?;
        if self.reminders.cancel(&ReminderKey::for_user(user.id)).await {
            debug!("Cancelled cart reminder for deleted user {}", user.id);
        }
        Ok(())
    }

    pub(crate) async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<user_account::Model>, ServerError> {
        self.users.find_by_email(email).await
    }

    pub(crate) async fn add_to_cart(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Message, ServerError> {
        let mut user = self.get_user_by_id(user_id).await?;

        user.cart.get_or_insert_with(Cart::default).push(product_id);
        user.updated_at = Utc::now();
        self.users.save(user).await?;

        Ok(Message::new(ADDED_TO_CART_MESSAGE))
    }

    /// Resolve every product in the cart, in cart order. The first lookup failure wins.
    pub(crate) async fn get_products_in_cart(
        &self,
        user_id: Uuid,
    ) -> Result<CartContents, ServerError> {
        let user = self.get_user_by_id(user_id).await?;

        let cart = match user.cart {
            Some(cart) if !cart.is_empty() => cart,
            _ => return Ok(CartContents::Empty),
        };

        let mut products = Vec::with_capacity(cart.0.len());
        for product_id in cart.iter() {
            products.push(self.products.get_product(*product_id).await?);
        }
        Ok(CartContents::Products(products))
    }

    /// Turn the daily cart reminder on or off for a user.
    pub(crate) async fn notify_user(
        &self,
        user_id: Uuid,
        should_notify: bool,
    ) -> Result<ReminderOutcome, ServerError> {
        let user = self.get_user_by_id(user_id).await?;
        let key = ReminderKey::for_user(user.id);

        if user.cart_is_empty() {
            return Ok(ReminderOutcome::CartEmpty);
        }

        if should_notify {
            self.reminders
                .schedule(key, self.reminder_trigger, self.cart_reminder(user.id))
                .await?;
            info!("Scheduled cart reminder {}", key);
            Ok(ReminderOutcome::Scheduled)
        } else {
            if !self.reminders.cancel(&key).await {
                debug!("No cron job found with the name: {}", key);
            }
            Ok(ReminderOutcome::Stopped)
        }
    }

    fn cart_reminder(&self, user_id: Uuid) -> ReminderJob {
        let users = Arc::clone(&self.users);
        let notifier = Arc::clone(&self.notifier);
        Arc::new(move || {
            let users = Arc::clone(&users);
            let notifier = Arc::clone(&notifier);
            let fut: JobFuture = Box::pin(async move {
                send_cart_reminder(users.as_ref(), notifier.as_ref(), user_id).await;
            });
            fut
        })
    }
}

/// One firing of a cart reminder. Skips quietly if the cart has since been emptied.
async fn send_cart_reminder(users: &dyn UserStore, notifier: &dyn NotificationSender, user_id: Uuid) {
    match users.find_by_id(user_id).await {
        Ok(Some(user)) if !user.cart_is_empty() => {
            info!("Sending notification to user: {}", user_id);
            if let Err(e) = notifier.create_notification(CART_REMINDER_MESSAGE).await {
                warn!("Cart reminder for {} was not sent: {}", user_id, e);
            }
        }
        Ok(_) => debug!("Skipping cart reminder for {}: nothing to remind about", user_id),
        Err(e) => warn!("Cart reminder lookup for {} failed: {}", user_id, e),
    }
}
