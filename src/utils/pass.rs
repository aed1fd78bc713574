//! Password-related utilities.

use lazy_static::lazy_static;
use libreauth::pass::{Algorithm, HashBuilder, Hasher};

use crate::error::ServerError;

pub(crate) const PWD_ALGORITHM: Algorithm = Algorithm::Argon2;
pub(crate) const PWD_SCHEME_VERSION: usize = 1;

// If the Hasher changes, make sure to increment PWD_SCHEME_VERSION
lazy_static! {
    pub(crate) static ref HASHER: Hasher = {
        HashBuilder::new()
            .algorithm(PWD_ALGORITHM)
            .version(PWD_SCHEME_VERSION)
            .finalize()
            .unwrap()
    };
}

/// Hash a plaintext password into PHC form for storage.
pub(crate) fn hash_password(plain: &str) -> Result<String, ServerError> {
    HASHER
        .hash(plain)
        .map_err(|e| ServerError::HashError(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies_against_plaintext() {
        let hashed = hash_password("hunter22").unwrap();

        assert_ne!(hashed, "hunter22");
        let checker = HashBuilder::from_phc(&hashed).unwrap();
        assert!(checker.is_valid("hunter22"));
        assert!(!checker.is_valid("hunter23"));
    }
}
