// file: src/models/response.rs
// description: search response models with per-document metadata

use serde::{Deserialize, Serialize};

/// One search hit. The download URL points at the original file in blob
/// storage; `score` is the backend's similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHit {
    pub file_name: String,
    pub summary: String,
    pub file_download_url: String,
    pub score: f64,
}

/// Response body of the search endpoint.
///
/// `documents` may be empty or entirely absent; absent means the backend
/// had nothing relevant for the query. `error` carries a service-side
/// failure detail that the backend reports inside a 200 body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub documents: Option<Vec<DocumentHit>>,

    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Generated answer text, treating an empty string the same as absent.
    pub fn answer(&self) -> Option<&str> {
        self.response.as_deref().filter(|s| !s.is_empty())
    }

    pub fn document_count(&self) -> usize {
        self.documents.as_ref().map_or(0, |docs| docs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_full_response() {
        let body = r#"{
            "response": "Travel must be booked through the portal.",
            "documents": [
                {
                    "file_name": "travel-policy.pdf",
                    "summary": "Company travel booking and reimbursement rules.",
                    "file_download_url": "https://files.example.com/travel-policy.pdf",
                    "score": 0.8231
                },
                {
                    "file_name": "expenses.docx",
                    "summary": "Expense claim walkthrough.",
                    "file_download_url": "https://files.example.com/expenses.docx",
                    "score": 0.7614
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.document_count(), 2);
        assert_eq!(parsed.answer(), Some("Travel must be booked through the portal."));

        let docs = parsed.documents.unwrap();
        assert_eq!(docs[0].file_name, "travel-policy.pdf");
        assert_eq!(docs[1].score, 0.7614);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_deserialize_no_match_response() {
        // Shape the backend sends when nothing relevant was found.
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"response": null, "error": null}"#).unwrap();
        assert!(parsed.documents.is_none());
        assert_eq!(parsed.document_count(), 0);
        assert!(parsed.answer().is_none());
    }

    #[test]
    fn test_deserialize_service_error_response() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"response": null, "error": "index unavailable"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("index unavailable"));
        assert!(parsed.documents.is_none());
    }

    #[test]
    fn test_null_documents_same_as_absent() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"documents": null, "response": "x"}"#).unwrap();
        assert!(parsed.documents.is_none());
    }

    #[test]
    fn test_empty_documents_list() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"documents": [], "response": ""}"#).unwrap();
        assert_eq!(parsed.documents.as_deref().map(<[DocumentHit]>::len), Some(0));
        assert_eq!(parsed.document_count(), 0);
        // Empty answer string counts as no content.
        assert!(parsed.answer().is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"response": "ok", "status": "FAILED"}"#).unwrap();
        assert_eq!(parsed.answer(), Some("ok"));
    }
}
