//! Common ID Types
//!
//! Type-safe wrappers around the numeric ids the store assigns
//! (BIGSERIAL columns). The marker parameter keeps a `UserId` from
//! ever being passed where a `TodoId` is expected.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper over a store-assigned `i64`
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing store-assigned id
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying numeric value
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User ids
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct User;

    /// Marker for Session ids
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Session;

    /// Marker for Todo ids
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Todo;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type SessionId = Id<markers::Session>;
pub type TodoId = Id<markers::Todo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new(1);
        let todo_id: TodoId = Id::new(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.into();
        let _t: i64 = todo_id.into();
    }

    #[test]
    fn test_id_round_trip() {
        let id: SessionId = Id::new(99);
        assert_eq!(id.value(), 99);
        assert_eq!(SessionId::from(99), id);
    }

    #[test]
    fn test_id_display() {
        let id: UserId = Id::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:?}", id), "Id(7)");
    }
}
