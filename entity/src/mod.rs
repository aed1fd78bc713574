//! Database entities shared by the storefront server.

pub mod prelude;

pub mod notification;
pub mod product;
pub mod user_account;
