//! Core data types.

use serde::{Deserialize, Serialize};

/// A searchable entity in the record set.
///
/// `id` is assigned when the data set is built and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// Contact string, usually an email address.
    pub contact: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = Record::new(7, "Euclid", "euclid@math.com");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Euclid");
        assert_eq!(value["contact"], "euclid@math.com");
    }

    #[test]
    fn test_record_parses_from_json() {
        let record: Record =
            serde_json::from_str(r#"{"id": 3, "name": "Gauss", "contact": "g@math.com"}"#)
                .unwrap();
        assert_eq!(record, Record::new(3, "Gauss", "g@math.com"));
    }
}
