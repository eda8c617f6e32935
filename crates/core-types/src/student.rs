use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted, schema-conformant Student record.
///
/// The `id` is assigned by the database on insert and is immutable for the
/// lifetime of the record; clients never supply it. Serializing this struct
/// (or a `Vec` of it) is the canonical JSON projection used by every API
/// response: exactly these six fields, `start_date` rendered as `YYYY-MM-DD`
/// or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
    pub start_date: Option<NaiveDate>,
}

/// A validated, not-yet-persisted set of Student fields.
///
/// The only way to obtain one from client input is `StudentDraft::validate`,
/// which enforces the required-field rules. Repository insert/update
/// operations accept drafts, never raw JSON, so unvalidated data cannot reach
/// the database by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
    pub start_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_serializes_to_the_canonical_field_set() {
        let student = Student {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone_num: "555-0100".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
        };

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@x.com",
                "phone_num": "555-0100",
                "start_date": "2024-05-01",
            })
        );
    }

    #[test]
    fn missing_start_date_serializes_as_null() {
        let student = Student {
            id: 1,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@x.com".to_string(),
            phone_num: "555-0199".to_string(),
            start_date: None,
        };

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["start_date"], json!(null));
    }
}
