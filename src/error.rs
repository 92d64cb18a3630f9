use thiserror::Error;

/// Which form field an input error should be surfaced next to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Url,
    FromDate,
}

/// Local validation failure. The message text is specific to
/// (platform, mode, field) and is the primary UX signal; the variants are
/// deliberately not collapsed into one generic string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InputError {
    pub field: InputField,
    pub message: &'static str,
}

impl InputError {
    pub fn url(message: &'static str) -> Self {
        Self {
            field: InputField::Url,
            message,
        }
    }

    pub fn from_date(message: &'static str) -> Self {
        Self {
            field: InputField::FromDate,
            message,
        }
    }
}

/// Failures past validation: everything that can go wrong once a request
/// has left for the backend. Local input failures stay `InputError`.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network unreachable, timed out, or a body that is not the JSON envelope.
    #[error("Failed to analyze. Please try again.")]
    Transport(#[source] reqwest::Error),

    /// Backend-reported failure; message already composed with any
    /// solutions/suggestions lines.
    #[error("{0}")]
    Backend(String),

    /// A success:true payload missing a field every view depends on.
    #[error("malformed analysis payload: missing {0}")]
    MalformedPayload(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_displays_its_message() {
        let err = InputError::url("Please enter an Instagram URL");
        assert_eq!(format!("{}", err), "Please enter an Instagram URL");
        assert_eq!(err.field, InputField::Url);
    }

    #[test]
    fn backend_error_is_verbatim() {
        let err = ClientError::Backend("Post is private\n\nTry a public post".to_string());
        assert_eq!(format!("{}", err), "Post is private\n\nTry a public post");
    }

    #[test]
    fn malformed_payload_names_the_field() {
        let err = ClientError::MalformedPayload("sentiment_stats");
        assert!(format!("{}", err).contains("sentiment_stats"));
    }
}
