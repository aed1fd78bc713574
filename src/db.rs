//! Database connection and schema setup.

use entity::prelude::{Notification, Product, UserAccount};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

/// Connect to the database at `url` and make sure every table exists.
pub(crate) async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    if url.contains(":memory:") {
        // every pooled connection would otherwise get its own empty database
        options.max_connections(1);
    }

    let db = Database::connect(options).await?;
    sync_schema(&db).await?;
    Ok(db)
}

/// Create any missing tables from the entity definitions.
pub(crate) async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // user_account first, product references it
    let statements = [
        schema.create_table_from_entity(UserAccount),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(Notification),
    ];
    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    info!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_db() -> DatabaseConnection {
    connect("sqlite::memory:").await.unwrap()
}
