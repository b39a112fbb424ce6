//! Errors returned by the registration backend

use serde::Deserialize;
use thiserror::Error;

/// A failed submission. `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The backend refused the request and explained why
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// The backend refused the request without a readable explanation
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Unable to reach the registration service: {0}")]
    Transport(String),
    #[error("Unexpected response from the registration service")]
    UnexpectedResponse,
}

impl SubmissionError {
    /// Map a non-success response body to an error.
    ///
    /// Understands the two shapes the API produces: `{"detail": "..."}`
    /// and the request-validation form `{"detail": [{"loc": [...], "msg": "..."}]}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: Detail::Message(detail),
            }) if !detail.trim().is_empty() => Self::Rejected { status, detail },
            Ok(ErrorBody {
                detail: Detail::Fields(issues),
            }) if !issues.is_empty() => Self::Rejected {
                status,
                detail: issues
                    .iter()
                    .map(FieldIssue::describe)
                    .collect::<Vec<_>>()
                    .join("; "),
            },
            _ => Self::Status(status),
        }
    }

    /// HTTP status of the response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status(status) => Some(*status),
            Self::Transport(_) | Self::UnexpectedResponse => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldIssue>),
}

#[derive(Debug, Deserialize)]
struct FieldIssue {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl FieldIssue {
    fn describe(&self) -> String {
        match self.loc.last() {
            Some(serde_json::Value::String(field)) => format!("{field}: {}", self.msg),
            Some(other) => format!("{other}: {}", self.msg),
            None => self.msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detail_string_is_passed_through() {
        let err = SubmissionError::from_response(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(
            err,
            SubmissionError::Rejected {
                status: 400,
                detail: "Email already registered".to_string()
            }
        );
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail": [
            {
                "loc": ["body", "email"],
                "msg": "value is not a valid email address",
                "type": "value_error"
            },
            {"loc": ["body", "password"], "msg": "ensure this value has at least 8 characters"}
        ]}"#;
        let err = SubmissionError::from_response(422, body);
        assert_eq!(
            err.to_string(),
            concat!(
                "email: value is not a valid email address; ",
                "password: ensure this value has at least 8 characters"
            )
        );
    }

    #[test]
    fn test_numeric_location_is_rendered() {
        let body = r#"{"detail": [{"loc": ["body", 0], "msg": "bad item"}]}"#;
        assert_eq!(
            SubmissionError::from_response(422, body).to_string(),
            "0: bad item"
        );
    }

    #[test]
    fn test_unreadable_body_falls_back_to_status() {
        let err = SubmissionError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err, SubmissionError::Status(502));
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_empty_detail_falls_back_to_status() {
        assert_eq!(
            SubmissionError::from_response(500, r#"{"detail": ""}"#),
            SubmissionError::Status(500)
        );
        assert_eq!(
            SubmissionError::from_response(422, r#"{"detail": []}"#),
            SubmissionError::Status(422)
        );
    }

    #[test]
    fn test_transport_message() {
        let err = SubmissionError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Unable to reach the registration service: connection refused"
        );
    }

    #[test]
    fn test_status_only_for_http_failures() {
        assert_eq!(SubmissionError::Status(503).status(), Some(503));
        assert_eq!(
            SubmissionError::from_response(400, r#"{"detail": "nope"}"#).status(),
            Some(400)
        );
        assert_eq!(SubmissionError::UnexpectedResponse.status(), None);
        assert_eq!(SubmissionError::Transport("refused".to_string()).status(), None);
    }
}
