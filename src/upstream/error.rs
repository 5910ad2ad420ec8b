use std::fmt;

/// Errors encountered while fetching trip records upstream.
///
/// The request handler collapses all of these into one generic server
/// error; the variants exist for logging.
#[derive(Debug)]
pub enum UpstreamError {
    /// Transport-level failure: connect, timeout, body read.
    Http(reqwest::Error),
    /// Upstream answered with a non-success status.
    Status(reqwest::StatusCode),
    /// Upstream body did not parse as a trip-record array.
    Body(reqwest::Error),
    /// The configured base URL is not a valid URL.
    BaseUrl(url::ParseError),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err)
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "upstream request failed: {err}"),
            Self::Status(status) => write!(f, "upstream returned status {status}"),
            Self::Body(err) => write!(f, "upstream body did not parse: {err}"),
            Self::BaseUrl(err) => write!(f, "invalid upstream base URL: {err}"),
        }
    }
}

impl std::error::Error for UpstreamError {}
