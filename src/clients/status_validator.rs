//! HTTP status classification.

use crate::clients::errors::ServerError;
use crate::clients::http_response::RawResponse;

/// Accepts or rejects a raw response based on its status code.
pub trait StatusCodeValidator: Send + Sync {
    /// Returns the response unchanged if it is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] carrying the response when it is rejected.
    fn validate(&self, response: RawResponse) -> Result<RawResponse, ServerError>;
}

/// Default [`StatusCodeValidator`]: accepts `200..300`, rejects everything else.
///
/// No status code is special-cased; a 401 and a 500 both become
/// [`ServerError::UnexpectedStatus`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStatusCodeValidator;

impl StatusCodeValidator for DefaultStatusCodeValidator {
    fn validate(&self, response: RawResponse) -> Result<RawResponse, ServerError> {
        match response.status_code {
            None => Err(ServerError::NonHttpResponse(response)),
            Some(200..=299) => Ok(response),
            Some(code) => {
                tracing::debug!("Rejecting response with status code {}", code);
                Err(ServerError::UnexpectedStatus(response))
            }
        }
    }
}
