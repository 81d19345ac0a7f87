//! Room models and DTOs.
//!
//! A room's capacity check here is advisory. The client uses it to disable
//! the assign action, but two clients can still race for the last slot; only
//! the server can enforce `occupants <= capacity`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use dormhub_core::serde::{deserialize_null_default, deserialize_string_or_number};

use crate::ids::{DormId, RoomId, UserId, deserialize_optional_id};

/// A student currently assigned to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    pub name: String,
}

/// An assignable unit with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id", alias = "id")]
    pub id: RoomId,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub dorm_id: Option<DormId>,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub number: String,
    pub capacity: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub current_students: Vec<Occupant>,
}

impl Room {
    /// Number of students currently in the room.
    pub fn occupancy(&self) -> usize {
        self.current_students.len()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy() >= self.capacity as usize
    }

    pub fn has_capacity(&self) -> bool {
        !self.is_full()
    }

    pub fn occupant_names(&self) -> impl Iterator<Item = &str> {
        self.current_students.iter().map(|s| s.name.as_str())
    }
}

/// Body of `POST /admin/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct CreateRoomDto {
    pub dorm_id: DormId,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub number: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,
}
