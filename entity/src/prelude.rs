pub use super::notification::Entity as Notification;
pub use super::product::Entity as Product;
pub use super::user_account::Entity as UserAccount;
