use serde::Deserialize;

/// Everything that can go wrong talking to the storefront API.
///
/// `Display` is the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated endpoint was called with no stored token. Raised
    /// before any request is sent.
    #[error("Authentication token is missing. Please log in.")]
    MissingToken,
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// `message` came from the response body rather than the status line.
        from_server: bool,
    },
    /// The request never got a response.
    #[error("{0}")]
    Network(String),
    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Map a failed response to an error, preferring the `message` field of a
    /// JSON body over the generic status text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let server = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        match server {
            Some(message) => ApiError::Http {
                status,
                message,
                from_server: true,
            },
            None => ApiError::Http {
                status,
                message: format!("Request failed with status code {status}"),
                from_server: false,
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The caller should be sent to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::MissingToken) || self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The server-supplied message, if the error carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message,
                from_server: true,
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), "")
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::from_status(400, r#"{"message":"Product name already exists"}"#);
        assert_eq!(err.to_string(), "Product name already exists");
        assert_eq!(err.server_message(), Some("Product name already exists"));
        assert!(!err.requires_login());
    }

    #[test]
    fn test_generic_message_without_body() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(err.server_message(), None);

        let blank = ApiError::from_status(400, r#"{"message":"  "}"#);
        assert_eq!(blank.server_message(), None);
    }

    #[test]
    fn test_unauthorized_requires_login() {
        assert!(ApiError::from_status(401, "").requires_login());
        assert!(ApiError::MissingToken.requires_login());
        assert!(!ApiError::from_status(403, "").requires_login());
        assert!(!ApiError::Network("Network Error".into()).requires_login());
    }

    #[test]
    fn test_not_found() {
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::MissingToken.is_not_found());
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(
            ApiError::MissingToken.to_string(),
            "Authentication token is missing. Please log in."
        );
    }
}
