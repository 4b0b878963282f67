//! Persistence envelope for a solved triangle.
//!
//! The REST API stores a named, timestamped, author-tagged wrapper around a
//! `TriangleSpec`. This crate only defines the JSON shape; it never talks to
//! the API itself.

use serde::{Deserialize, Serialize};

use crate::triangle::TriangleSpec;

/// Body of a create request, and one element of a list-by-author response.
///
/// `id` is assigned by the server and absent on create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    /// Creation timestamp as sent by the client (opaque to this crate).
    pub date_created: String,
    pub author_id: u64,
    pub data: TriangleSpec,
}

impl TriangleRecord {
    pub fn new(
        name: impl Into<String>,
        author_id: u64,
        date_created: impl Into<String>,
        data: TriangleSpec,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            date_created: date_created.into(),
            author_id,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::{solve, Method};

    #[test]
    fn camel_case_envelope_round_trips() {
        let t = solve(Method::Aas, 40.0, 95.0, 7.5).unwrap();
        let rec = TriangleRecord::new("roof", 42, "2024-05-01T10:00:00Z", t);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"dateCreated\""));
        assert!(json.contains("\"authorId\":42"));
        assert!(!json.contains("\"id\""));
        let back: TriangleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.data.sides(), t.sides());
    }

    #[test]
    fn server_assigned_id_is_read() {
        let t = solve(Method::Sss, 2.0, 3.0, 4.0).unwrap();
        let mut v = serde_json::to_value(TriangleRecord::new("x", 1, "now", t)).unwrap();
        v["id"] = serde_json::json!(17);
        let back: TriangleRecord = serde_json::from_value(v).unwrap();
        assert_eq!(back.id, Some(17));
    }

    #[test]
    fn invalid_payload_is_rejected() {
        let t = solve(Method::Sss, 2.0, 3.0, 4.0).unwrap();
        let mut v = serde_json::to_value(TriangleRecord::new("x", 1, "now", t)).unwrap();
        v["data"]["sides"] = serde_json::json!([1.0, 1.0, 3.0]);
        assert!(serde_json::from_value::<TriangleRecord>(v).is_err());
    }
}
