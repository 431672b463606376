//! User-related entity definitions.

use credentials::PasswordHash;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{validation, ValidationError, ValidationResult};

/// A registered user account.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier, assigned by the store.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Salted password verifier. Never serialized.
    #[serde(skip_serializing)]
    pub password: PasswordHash,
    /// How many users this account follows. Maintained externally.
    pub followed_users: i64,
    /// How many users follow this account. Maintained externally.
    pub users_following_me: i64,
}

impl User {
    /// Checks an email address against the accepted format.
    pub fn validate_email(candidate: &str) -> bool {
        validation::is_valid_email(candidate)
    }

    /// Replaces the email address after validating its format.
    ///
    /// The stored email is left untouched when validation fails.
    pub fn set_email(&mut self, email: impl Into<String>) -> ValidationResult<()> {
        let email = email.into();
        if !Self::validate_email(&email) {
            return Err(ValidationError::invalid_format("email", email));
        }
        self.email = email;
        Ok(())
    }

    /// Replaces the password, deriving a fresh salted hash.
    ///
    /// The salt rotates on every call, so setting the same password twice
    /// stores different bytes.
    pub fn set_password(&mut self, plaintext: &str) {
        self.password = PasswordHash::derive(plaintext);
    }

    /// Checks a candidate password against the stored hash.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }

    /// Returns the user as a flat mapping for the API layer.
    ///
    /// The password hash and salt are never included.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "followed_users": self.followed_users,
            "users_following_me": self.users_following_me,
        })
    }
}

/// A user account awaiting its first commit to the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Salted password verifier.
    pub password: PasswordHash,
}

impl NewUser {
    /// Creates a user draft, validating the email and hashing the password.
    ///
    /// A draft never holds an invalid email or a plaintext password.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: &str,
    ) -> ValidationResult<Self> {
        let email = email.into();
        if !validation::is_valid_email(&email) {
            return Err(ValidationError::invalid_format("email", email));
        }
        Ok(Self {
            username: username.into(),
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: PasswordHash::derive(password),
        })
    }

    /// Attaches a store-assigned identifier, producing the persisted record.
    ///
    /// Follower counters start at zero; they are maintained externally.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password: self.password,
            followed_users: 0,
            users_following_me: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        NewUser::new("ada", "ada@example.com", "Ada", "Lovelace", "hunter2")
            .unwrap()
            .into_user(1)
    }

    #[test]
    fn test_validate_email() {
        assert!(User::validate_email("a.b@c.org"));
        assert!(!User::validate_email("not-an-email"));
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let err = NewUser::new("ada", "not-an-email", "Ada", "Lovelace", "hunter2").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "email", .. }));
    }

    #[test]
    fn test_set_email() {
        let mut user = sample_user();

        user.set_email("ada@mail.org").unwrap();
        assert_eq!(user.email, "ada@mail.org");

        let err = user.set_email("broken").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(user.email, "ada@mail.org");
    }

    #[test]
    fn test_password_round_trip() {
        let user = sample_user();

        assert!(user.check_password("hunter2"));
        assert!(!user.check_password("wrong"));
    }

    #[test]
    fn test_set_password_rotates_salt() {
        let mut user = sample_user();
        let before = user.password.hash_bytes().to_vec();

        user.set_password("hunter2");
        assert_ne!(user.password.hash_bytes(), before.as_slice());
        assert!(user.check_password("hunter2"));
    }

    #[test]
    fn test_serialize_excludes_secrets() {
        let user = sample_user();
        let value = user.serialize();
        let map = value.as_object().unwrap();

        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "email",
                "first_name",
                "followed_users",
                "id",
                "last_name",
                "username",
                "users_following_me",
            ]
        );
        assert_eq!(map["id"], 1);
        assert_eq!(map["username"], "ada");

        // Repeated serialization of unchanged state is identical.
        assert_eq!(user.serialize(), value);
    }
}
