use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::actions::{AddToCart, NewUser, Notify, UserUpdate};
use crate::constants::{USER_CREATED_MESSAGE, USER_DELETED_MESSAGE, USER_UPDATED_MESSAGE};
use crate::error::ServerError;
use crate::handlers::ValidatedJson;
use crate::models::{
    CartContents, Message, PublicUser, ReminderOutcome, UserCreated, UserDeleted, UserUpdated,
};
use crate::server::State;

/// Handler for `POST /users`
pub(crate) async fn create_user(
    state: Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<NewUser>,
) -> Result<Json<UserCreated>, ServerError> {
    let user = state.users.create(input).await?;

    Ok(Json(UserCreated {
        status: 200,
        message: USER_CREATED_MESSAGE.into(),
        user: user.into(),
    }))
}

/// Handler for `GET /users`
pub(crate) async fn list_users(
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<PublicUser>>, ServerError> {
    Ok(Json(state.users.find_all().await?))
}

/// Handler for `GET /users/:username`
pub(crate) async fn get_user(
    Path(username): Path<String>,
    state: Extension<Arc<State>>,
) -> Result<Json<PublicUser>, ServerError> {
    Ok(Json(state.users.get_current_user(&username).await?))
}

/// Handler for `PATCH /users/:username`
pub(crate) async fn update_user(
    Path(username): Path<String>,
    state: Extension<Arc<State>>,
    ValidatedJson(update): ValidatedJson<UserUpdate>,
) -> Result<Json<UserUpdated>, ServerError> {
    let user = state.users.update(&username, update).await?;

    Ok(Json(UserUpdated {
        message: USER_UPDATED_MESSAGE.into(),
        user,
    }))
}

/// Handler for `DELETE /users/:username`
pub(crate) async fn delete_user(
    Path(username): Path<String>,
    state: Extension<Arc<State>>,
) -> Result<Json<UserDeleted>, ServerError> {
    state.users.remove(&username).await?;

    Ok(Json(UserDeleted {
        status: true,
        message: USER_DELETED_MESSAGE.into(),
    }))
}

/// Handler for `POST /users/id/:id/cart`
pub(crate) async fn add_to_cart(
    Path(id): Path<Uuid>,
    state: Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<AddToCart>,
) -> Result<Json<Message>, ServerError> {
    Ok(Json(state.users.add_to_cart(id, input.product_id).await?))
}

/// Handler for `GET /users/id/:id/cart`
pub(crate) async fn get_cart(
    Path(id): Path<Uuid>,
    state: Extension<Arc<State>>,
) -> Result<Json<CartContents>, ServerError> {
    Ok(Json(state.users.get_products_in_cart(id).await?))
}

/// Handler for `PUT /users/id/:id/notify`
pub(crate) async fn notify_user(
    Path(id): Path<Uuid>,
    state: Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<Notify>,
) -> Result<Json<ReminderOutcome>, ServerError> {
    Ok(Json(state.users.notify_user(id, input.notify).await?))
}
