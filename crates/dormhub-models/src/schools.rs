//! School summary returned by the admin login.

use serde::{Deserialize, Serialize};

use crate::ids::{SchoolId, deserialize_optional_id};

/// School summary embedded in the admin login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<SchoolId>,
    pub name: String,
}
