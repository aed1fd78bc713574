//! CRUD action-like resources
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::constants::{RE_PASSWORD, RE_USERNAME};

/// The action by which a user is registered.
#[derive(Debug, Clone, Validate, Deserialize)]
pub(crate) struct NewUser {
    /// The provided username.
    #[validate(
        length(
            min = 5,
            max = 32,
            message = "Minimum length is 5 characters, maximum is 32"
        ),
        regex(
            path = "RE_USERNAME",
            message = "Can only contain letters, numbers, dashes (-), periods (.), and underscores (_)"
        )
    )]
    pub(crate) username: String,
    /// The provided email.
    #[validate(email(message = "Must be a valid email address."))]
    pub(crate) email: String,
    /// The provided password, still in plaintext.
    #[validate(
        length(
            min = 8,
            max = 128,
            message = "Minimum length is 8 characters, maximum is 128"
        ),
        regex(
            path = "RE_PASSWORD",
            message = "Must be alphanumeric and contain at least one number."
        )
    )]
    pub(crate) password: String,
}

/// Profile fields to overwrite. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub(crate) struct UpdateProfile {
    #[validate(
        length(
            min = 5,
            max = 32,
            message = "Minimum length is 5 characters, maximum is 32"
        ),
        regex(
            path = "RE_USERNAME",
            message = "Can only contain letters, numbers, dashes (-), periods (.), and underscores (_)"
        )
    )]
    pub(crate) username: Option<String>,
    #[validate(email(message = "Must be a valid email address."))]
    pub(crate) email: Option<String>,
}

#[derive(Debug, Clone, Validate, Deserialize)]
pub(crate) struct UpdatePassword {
    #[validate(
        length(
            min = 8,
            max = 128,
            message = "Minimum length is 8 characters, maximum is 128"
        ),
        regex(
            path = "RE_PASSWORD",
            message = "Must be alphanumeric and contain at least one number."
        )
    )]
    pub(crate) password: String,
}

/// The action by which a user is updated, as sent to `PATCH /users/:username`.
///
/// A password change and a profile change never travel together; the `kind` tag picks one.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum UserUpdate {
    Profile(UpdateProfile),
    Password(UpdatePassword),
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            UserUpdate::Profile(profile) => profile.validate(),
            UserUpdate::Password(password) => password.validate(),
        }
    }
}

/// The form input for `POST /users/id/:id/cart`
#[derive(Debug, Clone, Copy, Validate, Deserialize)]
pub(crate) struct AddToCart {
    pub(crate) product_id: Uuid,
}

/// The form input for `PUT /users/id/:id/notify`
#[derive(Debug, Clone, Copy, Validate, Deserialize)]
pub(crate) struct Notify {
    pub(crate) notify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn update_dispatches_on_kind_tag() {
        let update: UserUpdate =
            serde_json::from_value(json!({ "kind": "password", "password": "secret123" })).unwrap();
        assert!(matches!(update, UserUpdate::Password(p) if p.password == "secret123"));

        let update: UserUpdate =
            serde_json::from_value(json!({ "kind": "profile", "email": "new@example.com" }))
                .unwrap();
        match update {
            UserUpdate::Profile(profile) => {
                assert_eq!(profile.email.as_deref(), Some("new@example.com"));
                assert!(profile.username.is_none());
            }
            other => panic!("expected profile update, got {:?}", other),
        }
    }

    #[test]
    fn update_without_kind_is_rejected() {
        let result = serde_json::from_value::<UserUpdate>(json!({ "password": "secret123" }));
        assert!(result.is_err());
    }

    #[rstest]
    #[case("alice", "alice@example.com", "password1", true)]
    #[case("al", "alice@example.com", "password1", false)]
    #[case("alice smith", "alice@example.com", "password1", false)]
    #[case("alice", "not-an-email", "password1", false)]
    #[case("alice", "alice@example.com", "password", false)]
    #[case("alice", "alice@example.com", "short1", false)]
    fn new_user_validation(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] valid: bool,
    ) {
        let input = NewUser {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        };
        assert_eq!(input.validate().is_ok(), valid);
    }

    #[test]
    fn password_update_is_validated() {
        let update = UserUpdate::Password(UpdatePassword {
            password: "nodigits".into(),
        });
        assert!(update.validate().is_err());
    }
}
