//! Dorm models and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{DormId, SchoolId, deserialize_optional_id};

/// A residential building containing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dorm {
    #[serde(rename = "_id", alias = "id")]
    pub id: DormId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub school_id: Option<SchoolId>,
}

/// Body of `POST /admin/dorms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct CreateDormDto {
    #[validate(length(min = 1, message = "Dorm name is required"))]
    pub name: String,
    pub school_id: SchoolId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dorm_from_wrapped_id() {
        let dorm: Dorm = serde_json::from_value(json!({
            "_id": { "$oid": "d1" },
            "name": "North Hall"
        }))
        .unwrap();

        assert_eq!(dorm.id, DormId::new("d1"));
        assert_eq!(dorm.name, "North Hall");
        assert!(dorm.school_id.is_none());
    }

    #[test]
    fn test_dorm_from_plain_id_and_school() {
        let dorm: Dorm = serde_json::from_value(json!({
            "_id": "d2",
            "name": "South Hall",
            "school_id": { "$oid": "s1" }
        }))
        .unwrap();

        assert_eq!(dorm.id.as_str(), "d2");
        assert_eq!(dorm.school_id, Some(SchoolId::new("s1")));
    }

    #[test]
    fn test_create_dorm_serializes_raw_school_id() {
        let dto = CreateDormDto {
            name: "East Hall".into(),
            school_id: SchoolId::new("s1"),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "name": "East Hall", "school_id": "s1" })
        );
    }

    #[test]
    fn test_create_dorm_requires_name() {
        let dto = CreateDormDto {
            name: String::new(),
            school_id: SchoolId::new("s1"),
        };
        assert!(dto.validate().is_err());
    }
}
