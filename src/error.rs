//! Error type shared by the library and both binaries.

use std::error::Error as StdError;
use std::fmt::Write as _;

use thiserror::Error;

/// Everything that can abort a registration or peer lookup.
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line parsing failed, or help/version output was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Consul request failed")]
    Http(#[from] reqwest::Error),
    /// The Consul agent answered with a non-success status code.
    #[error("Consul agent returned {status} for {url}: {body}")]
    Status {
        /// URL the request was sent to.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the agent.
        body: String,
    },
    /// The configured base URL cannot have API paths joined onto it.
    #[error("invalid Consul base URL {url}: {reason}")]
    InvalidUrl {
        /// Base URL as given.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The local machine address could not be determined.
    #[error("could not resolve local address: {0}")]
    AddressResolution(String),
    /// The async runtime failed to start.
    #[error("failed to start runtime")]
    Runtime(#[source] std::io::Error),
    /// Writing program output failed.
    #[error("failed to write output")]
    Output(#[source] std::io::Error),
    /// A payload could not be rendered or a response could not be decoded.
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Renders `err` followed by every cause in its source chain, `: `-separated.
#[must_use]
pub fn report(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = Error::Status {
            url: "http://consul:8500/v1/agent/service/register".into(),
            status: 500,
            body: "boom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/v1/agent/service/register"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn report_includes_every_cause() {
        let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused");
        let wrapped = io::Error::other(WrappedCause(refused));
        let err = Error::Runtime(wrapped);

        assert_eq!(report(&err), "failed to start runtime: tcp connect error: Connection refused");
    }

    #[test]
    fn report_without_source_is_display() {
        let err = Error::AddressResolution("no hostname".into());
        assert_eq!(report(&err), err.to_string());
    }

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct WrappedCause(#[source] io::Error);
}
