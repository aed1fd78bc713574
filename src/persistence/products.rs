use async_trait::async_trait;
use entity::product::{self, Entity as Product};
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::constants::PRODUCT_NOT_FOUND_MESSAGE;
use crate::error::ServerError;
use crate::ports::ProductCatalog;

#[derive(Clone)]
pub(crate) struct SeaOrmProductCatalog {
    db: DatabaseConnection,
}

impl SeaOrmProductCatalog {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        SeaOrmProductCatalog { db }
    }
}

#[async_trait]
impl ProductCatalog for SeaOrmProductCatalog {
    async fn get_product(&self, id: Uuid) -> Result<product::Model, ServerError> {
        Product::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServerError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.into()))
    }
}
