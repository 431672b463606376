//! Event store trait definitions.

use async_trait::async_trait;
use entities::{Event, EventCategory, NewEvent, NewSignup, NewUser, PricingType, Signup, User};

use crate::StoreResult;

/// Filter options for listing events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Filter by owning user ID.
    pub owner: Option<i64>,
    /// Filter by category.
    pub category: Option<EventCategory>,
    /// Filter by pricing type.
    pub pricing: Option<PricingType>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Trait for event-organizing storage operations.
///
/// Implementations own relational constraint enforcement: uniqueness of
/// username, email, and the (user, event) signup pair; validity of the
/// owner, user, and event references; and the range invariants, which are
/// checked immediately before any create or update. A record that fails
/// validation is never persisted.
#[async_trait]
pub trait EventStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user, assigning its identifier.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: i64) -> StoreResult<Option<User>>;

    /// Gets a user by username.
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Updates a user, re-checking username and email uniqueness.
    async fn update_user(&self, user: User) -> StoreResult<User>;

    /// Deletes a user together with their events and signups.
    async fn delete_user(&self, id: i64) -> StoreResult<()>;

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Validates and creates a new event, assigning its identifier.
    ///
    /// Range checks run first; nothing is persisted when they fail. The
    /// owning user must exist.
    async fn create_event(&self, event: NewEvent) -> StoreResult<Event>;

    /// Gets an event by ID.
    async fn get_event(&self, id: i64) -> StoreResult<Option<Event>>;

    /// Lists events with optional filters.
    async fn list_events(&self, filter: EventFilter) -> StoreResult<(Vec<Event>, u32)>;

    /// Validates and updates an event.
    ///
    /// Range checks run first; the stored record is untouched when they
    /// fail.
    async fn update_event(&self, event: Event) -> StoreResult<Event>;

    /// Deletes an event together with its signups.
    async fn delete_event(&self, id: i64) -> StoreResult<()>;

    // =========================================================================
    // Signup operations
    // =========================================================================

    /// Creates a signup, assigning its identifier.
    ///
    /// The user and event must exist, and the (user, event) pair must not
    /// already be signed up.
    async fn create_signup(&self, signup: NewSignup) -> StoreResult<Signup>;

    /// Gets a signup by ID.
    async fn get_signup(&self, id: i64) -> StoreResult<Option<Signup>>;

    /// Lists signups for an event.
    async fn list_signups_for_event(&self, event_id: i64) -> StoreResult<Vec<Signup>>;

    /// Lists signups for a user.
    async fn list_signups_for_user(&self, user_id: i64) -> StoreResult<Vec<Signup>>;

    /// Deletes a signup.
    async fn delete_signup(&self, id: i64) -> StoreResult<()>;
}
