//! User and student models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use dormhub_core::serde::{deserialize_null_default, deserialize_optional_string_or_number};

use crate::ids::{SchoolId, UserId, deserialize_optional_id};

/// The logged-in user as reported by `POST /login` and `GET /user`.
///
/// Only the fields the client displays are kept; anything else in the
/// payload (including credentials) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
    /// Room number the user currently occupies, if any.
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub assigned_room: Option<String>,
}

/// A student account as returned by `POST /admin/students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub school_id: Option<SchoolId>,
}

/// Body of `POST /admin/students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub school_id: SchoolId,
}
