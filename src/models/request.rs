// file: src/models/request.rs
// description: search request body sent to the endpoint

use crate::models::Department;
use serde::Serialize;

/// Fixed-shape JSON body: `{"query": ..., "department": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub department: Department,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, department: Department) -> Self {
        Self {
            query: query.into(),
            department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_wire_shape() {
        let request = SearchRequest::new("expense policy", Department::Finance);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "query": "expense policy",
                "department": "Finance",
            })
        );
    }

    #[test]
    fn test_request_all_departments() {
        let request = SearchRequest::new("onboarding", Department::All);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"department\":\"ALL\""));
    }
}
