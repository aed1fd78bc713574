use async_trait::async_trait;
use entity::user_account::{self, ActiveModel, Column, Entity as UserAccount};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::error::ServerError;
use crate::ports::UserStore;

#[derive(Clone)]
pub(crate) struct SeaOrmUserStore {
    db: DatabaseConnection,
}

impl SeaOrmUserStore {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        SeaOrmUserStore { db }
    }
}

fn to_active(user: user_account::Model) -> ActiveModel {
    ActiveModel {
        id: Set(user.id),
        username: Set(user.username),
        email: Set(user.email),
        password: Set(user.password),
        cart: Set(user.cart),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn find_all(&self) -> Result<Vec<user_account::Model>, ServerError> {
        Ok(UserAccount::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<user_account::Model>, ServerError> {
        Ok(UserAccount::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_account::Model>, ServerError> {
        Ok(UserAccount::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user_account::Model>, ServerError> {
        Ok(UserAccount::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, user: user_account::Model) -> Result<user_account::Model, ServerError> {
        Ok(to_active(user).insert(&self.db).await?)
    }

    async fn save(&self, user: user_account::Model) -> Result<user_account::Model, ServerError> {
        Ok(to_active(user).update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServerError> {
        UserAccount::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
