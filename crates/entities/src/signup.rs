//! Signup-related entity definitions.

use serde::Serialize;
use serde_json::{json, Value};

/// A signup linking a user to an event they registered for.
#[derive(Debug, Clone, Serialize)]
pub struct Signup {
    /// Unique identifier, assigned by the store.
    pub id: i64,
    /// Identifier of the registered user.
    pub user_id: i64,
    /// Identifier of the event signed up for.
    pub event_id: i64,
}

impl Signup {
    /// Returns the signup as a flat mapping for the API layer.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "user_id": self.user_id,
            "event_id": self.event_id,
        })
    }
}

/// A signup awaiting its first commit to the store.
#[derive(Debug, Clone)]
pub struct NewSignup {
    /// Identifier of the registered user.
    pub user_id: i64,
    /// Identifier of the event signed up for.
    pub event_id: i64,
}

impl NewSignup {
    /// Creates a signup draft.
    pub fn new(user_id: i64, event_id: i64) -> Self {
        Self { user_id, event_id }
    }

    /// Attaches a store-assigned identifier, producing the persisted record.
    pub fn into_signup(self, id: i64) -> Signup {
        Signup {
            id,
            user_id: self.user_id,
            event_id: self.event_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_fields() {
        let signup = NewSignup::new(3, 9).into_signup(21);
        let value = signup.serialize();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["id"], 21);
        assert_eq!(map["user_id"], 3);
        assert_eq!(map["event_id"], 9);
    }
}
