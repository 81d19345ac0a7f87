//! Strongly-typed ID newtypes for domain entities.
//!
//! The server hands out identifiers either as plain strings or wrapped as
//! `{"$oid": "..."}`. Each newtype deserializes from both shapes, so the rest
//! of the client only ever sees the raw value and cannot mix up, say, a
//! `DormId` with a `RoomId` when building a path.
//!
//! # Example
//!
//! ```ignore
//! use dormhub_models::ids::{DormId, RoomId};
//!
//! let dorm: DormId = serde_json::from_str(r#"{"$oid":"d1"}"#).unwrap();
//! assert_eq!(dorm.as_str(), "d1");
//!
//! fn rooms_path(id: &DormId) -> String { format!("/dorms/{id}/rooms") }
//! // rooms_path(&RoomId::new("r1")); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from its raw string value.
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw string value.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID, returning the raw string value.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Check if this ID is blank and therefore unusable in a path.
            #[inline]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        // Accepts both the plain and the wrapped identifier shape
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                dormhub_core::serde::deserialize_object_id(deserializer).map(Self)
            }
        }
    };
}

/// Deserializes an optional id field of any id type. `null`, a missing
/// field (with `#[serde(default)]`) and an empty string all yield `None`.
pub fn deserialize_optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: From<String>,
{
    dormhub_core::serde::deserialize_optional_object_id(deserializer)
        .map(|id| id.map(T::from))
}

define_id!(
    /// Strongly-typed ID for School entities.
    SchoolId
);

define_id!(
    /// Strongly-typed ID for Dorm entities.
    DormId
);

define_id!(
    /// Strongly-typed ID for Room entities.
    RoomId
);

define_id!(
    /// Strongly-typed ID for User entities (students and occupants).
    UserId
);
