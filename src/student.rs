//! The student record.
//!
//! One record per student, stored as a single DynamoDB item whose attribute
//! names match the JSON wire format (`id`, `firstName`, `lastName`, `email`).

use crate::error;

use aws_sdk_dynamodb::types;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};
use std::collections;

/// Attribute name of the table's partition key.
pub const KEY_ATTRIBUTE: &str = "id";

/// A single student record.
///
/// `id` is caller-supplied and uniquely identifies the record; no other field
/// is validated beyond being a string.
///
/// ```rust
/// use students_api::student::Student;
///
/// let student = Student {
///     id: "s1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier and sole lookup key.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address; not checked to be a valid address.
    pub email: String,
}

/// The primary key map addressing the item stored under `id`.
pub fn key_for(id: &str) -> collections::HashMap<String, types::AttributeValue> {
    collections::HashMap::from([(
        KEY_ATTRIBUTE.to_string(),
        types::AttributeValue::S(id.to_string()),
    )])
}

impl TryFrom<&Student> for collections::HashMap<String, types::AttributeValue> {
    type Error = error::Error;

    fn try_from(student: &Student) -> error::Result<Self> {
        Ok(to_item(student)?)
    }
}

impl TryFrom<collections::HashMap<String, types::AttributeValue>> for Student {
    type Error = error::Error;

    fn try_from(item: collections::HashMap<String, types::AttributeValue>) -> error::Result<Self> {
        Ok(from_item(item)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::full_record(
        Student {
            id: "s1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        },
        collections::HashMap::from(
            [
                (
                    "id".to_string(),
                    types::AttributeValue::S(
                        "s1".to_string()
                    )
                ),
                (
                    "firstName".to_string(),
                    types::AttributeValue::S(
                        "Ada".to_string()
                    )
                ),
                (
                    "lastName".to_string(),
                    types::AttributeValue::S(
                        "Lovelace".to_string()
                    )
                ),
                (
                    "email".to_string(),
                    types::AttributeValue::S(
                        "ada@example.com".to_string()
                    )
                ),
            ]
        )
    )]
    #[case::empty_attributes(
        Student {
            id: "s2".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        },
        collections::HashMap::from(
            [
                (
                    "id".to_string(),
                    types::AttributeValue::S(
                        "s2".to_string()
                    )
                ),
                (
                    "firstName".to_string(),
                    types::AttributeValue::S(
                        String::new()
                    )
                ),
                (
                    "lastName".to_string(),
                    types::AttributeValue::S(
                        String::new()
                    )
                ),
                (
                    "email".to_string(),
                    types::AttributeValue::S(
                        String::new()
                    )
                ),
            ]
        )
    )]
    fn test_student_to_item(
        #[case] student: Student,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        let actual: collections::HashMap<String, types::AttributeValue> =
            (&student).try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_item_to_student() {
        let student = Student {
            id: "s1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let item: collections::HashMap<String, types::AttributeValue> =
            (&student).try_into().unwrap();
        let actual: Student = item.try_into().unwrap();
        assert_eq!(actual, student);
    }

    #[rstest]
    fn test_item_missing_attribute_is_rejected() {
        let item = key_for("s1");
        let actual: error::Result<Student> = item.try_into();
        assert!(actual.is_err());
    }

    #[rstest]
    fn test_key_for() {
        let expected = collections::HashMap::from([(
            "id".to_string(),
            types::AttributeValue::S("s1".to_string()),
        )]);
        assert_eq!(key_for("s1"), expected);
    }

    #[rstest]
    fn test_json_wire_field_names() {
        let student = Student {
            id: "s1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let expected = json!({
            "id": "s1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
        });
        assert_eq!(serde_json::to_value(&student).unwrap(), expected);
    }
}
