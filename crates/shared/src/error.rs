use thiserror::Error;

/// The only message ever shown for a failed lookup, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str =
    "Something went wrong trying to fetch data from the API. Please try again!";

/// Failure while fetching or decoding the births feed.
///
/// Variants exist for logs; callers surface [`FetchError::user_message`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("payload has no births field")]
    MissingBirths,
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}
