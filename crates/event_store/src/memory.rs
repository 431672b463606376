//! In-memory event store implementation for testing.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use entities::{Event, NewEvent, NewSignup, NewUser, Signup, User};
use tokio::sync::RwLock;

use crate::{EventFilter, EventStore, StoreError, StoreResult};

/// In-memory event store for testing purposes.
///
/// Lock acquisition follows the fixed order users, events, signups.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    users: Arc<RwLock<HashMap<i64, User>>>,
    events: Arc<RwLock<HashMap<i64, Event>>>,
    signups: Arc<RwLock<HashMap<i64, Signup>>>,
    next_id: AtomicI64,
}

impl MemoryEventStore {
    /// Creates a new in-memory event store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next identifier. Identifiers are unique across tables.
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::already_exists(
                "User",
                "username",
                &user.username,
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::already_exists("User", "email", &user.email));
        }
        let user = user.into_user(self.next_id());
        tracing::debug!(id = user.id, "created user");
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(StoreError::not_found("User", user.id));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(StoreError::already_exists(
                "User",
                "username",
                &user.username,
            ));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::already_exists("User", "email", &user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let mut events = self.events.write().await;
        let mut signups = self.signups.write().await;
        if users.remove(&id).is_none() {
            return Err(StoreError::not_found("User", id));
        }
        let owned: Vec<i64> = events
            .values()
            .filter(|e| e.owner == id)
            .map(|e| e.id)
            .collect();
        for event_id in &owned {
            events.remove(event_id);
        }
        signups.retain(|_, s| s.user_id != id && !owned.contains(&s.event_id));
        tracing::debug!(id, cascaded_events = owned.len(), "deleted user");
        Ok(())
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    async fn create_event(&self, event: NewEvent) -> StoreResult<Event> {
        // Range checks run before anything is written.
        event.validate()?;
        let users = self.users.read().await;
        if !users.contains_key(&event.owner) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "event owner {} does not exist",
                event.owner
            )));
        }
        let mut events = self.events.write().await;
        let event = event.into_event(self.next_id());
        tracing::debug!(id = event.id, owner = event.owner, "created event");
        events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn get_event(&self, id: i64) -> StoreResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_events(&self, filter: EventFilter) -> StoreResult<(Vec<Event>, u32)> {
        let events = self.events.read().await;
        let mut result: Vec<Event> = events
            .values()
            .filter(|e| {
                let mut matches = true;
                if let Some(owner) = filter.owner {
                    matches = matches && e.owner == owner;
                }
                if let Some(category) = filter.category {
                    matches = matches && e.category == category;
                }
                if let Some(pricing) = filter.pricing {
                    matches = matches && e.pricing == pricing;
                }
                matches
            })
            .cloned()
            .collect();
        result.sort_by_key(|e| e.id);

        let total = result.len() as u32;

        if let Some(offset) = filter.offset {
            result = result.into_iter().skip(offset as usize).collect();
        }
        if let Some(limit) = filter.limit {
            result = result.into_iter().take(limit as usize).collect();
        }

        Ok((result, total))
    }

    async fn update_event(&self, event: Event) -> StoreResult<Event> {
        // Range checks run before anything is written.
        event.validate()?;
        let users = self.users.read().await;
        if !users.contains_key(&event.owner) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "event owner {} does not exist",
                event.owner
            )));
        }
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(StoreError::not_found("Event", event.id));
        }
        events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn delete_event(&self, id: i64) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let mut signups = self.signups.write().await;
        if events.remove(&id).is_none() {
            return Err(StoreError::not_found("Event", id));
        }
        signups.retain(|_, s| s.event_id != id);
        tracing::debug!(id, "deleted event");
        Ok(())
    }

    // =========================================================================
    // Signup operations
    // =========================================================================

    async fn create_signup(&self, signup: NewSignup) -> StoreResult<Signup> {
        let users = self.users.read().await;
        if !users.contains_key(&signup.user_id) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "signup user {} does not exist",
                signup.user_id
            )));
        }
        let events = self.events.read().await;
        if !events.contains_key(&signup.event_id) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "signup event {} does not exist",
                signup.event_id
            )));
        }
        let mut signups = self.signups.write().await;
        if signups
            .values()
            .any(|s| s.user_id == signup.user_id && s.event_id == signup.event_id)
        {
            return Err(StoreError::already_exists(
                "Signup",
                "(user_id, event_id)",
                format!("({}, {})", signup.user_id, signup.event_id),
            ));
        }
        let signup = signup.into_signup(self.next_id());
        tracing::debug!(
            id = signup.id,
            user_id = signup.user_id,
            event_id = signup.event_id,
            "created signup"
        );
        signups.insert(signup.id, signup.clone());
        Ok(signup)
    }

    async fn get_signup(&self, id: i64) -> StoreResult<Option<Signup>> {
        let signups = self.signups.read().await;
        Ok(signups.get(&id).cloned())
    }

    async fn list_signups_for_event(&self, event_id: i64) -> StoreResult<Vec<Signup>> {
        let signups = self.signups.read().await;
        Ok(signups
            .values()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn list_signups_for_user(&self, user_id: i64) -> StoreResult<Vec<Signup>> {
        let signups = self.signups.read().await;
        Ok(signups
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_signup(&self, id: i64) -> StoreResult<()> {
        let mut signups = self.signups.write().await;
        if signups.remove(&id).is_none() {
            return Err(StoreError::not_found("Signup", id));
        }
        Ok(())
    }
}
