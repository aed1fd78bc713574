//! sea-orm adapters for the service ports.

pub(crate) mod notifications;
pub(crate) mod products;
pub(crate) mod users;

pub(crate) use notifications::SeaOrmNotificationSender;
pub(crate) use products::SeaOrmProductCatalog;
pub(crate) use users::SeaOrmUserStore;
