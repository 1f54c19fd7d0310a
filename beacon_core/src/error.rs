/**
 * Error taxonomy for the notification core.
 *
 * Four caller-facing families, surfaced synchronously and never retried:
 *
 * - `ValidationError` — the destination fails the transport's address
 *   grammar; raised by `Transport::validate` before any I/O.
 * - `TransportError` — a delivery attempt failed (I/O, resolution,
 *   protocol violations, redirect cap).
 * - `ProtocolError` — fatal pre-connection problems on the HTTP path
 *   (wrong scheme, bad proxy, redirect without a location).
 * - `SerializationError` — the payload formatter could not encode the
 *   job-state record.
 *
 * One deliberate exception to "nothing is swallowed": the HTTP transport
 * treats every non-307 response status, 4xx/5xx included, as a completed
 * delivery. The remote outcome is not reported to the caller.
 */
use std::fmt;
use std::io;

use thiserror::Error;

use crate::endpoint::ParseError;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/**
 * A destination string failed a transport's address grammar.
 *
 * The rendered message names the offending value when one was supplied:
 *
 * - `Invalid URL 'foo'. Use hostname:port for endpoint URL`
 * - `Use hostname:port for endpoint URL` (blank destination)
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    value: Option<String>,
    expected: &'static str,
}

impl ValidationError {
    pub(crate) fn new(value: &str, expected: &'static str) -> Self {
        let value = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        Self { value, expected }
    }

    /// The rejected destination, if one was supplied at all.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The address shape this transport expects, e.g. `hostname:port`.
    pub fn expected_format(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = &self.value {
            write!(f, "Invalid URL '{value}'. ")?;
        }
        write!(f, "Use {} for endpoint URL", self.expected)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ProtocolError
// ---------------------------------------------------------------------------

/**
 * Fatal HTTP-path failures detected before a connection is opened.
 */
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The destination URL's scheme is neither `http` nor `https`.
    #[error("not an http(s) url: {0}")]
    UnsupportedScheme(String),

    /// The proxy URL (explicit or from `http_proxy`) could not be used.
    #[error("invalid proxy url '{url}': {reason}")]
    InvalidProxy { url: String, reason: String },

    /// A 307 response arrived without a usable `Location` header.
    #[error("redirect response carries no Location header")]
    MissingRedirectLocation,
}

// ---------------------------------------------------------------------------
// TransportError
// ---------------------------------------------------------------------------

/**
 * A single delivery attempt failed. Single-shot semantics: nothing in the
 * core retries, so this is final from the caller's point of view.
 */
#[derive(Debug, Error)]
pub enum TransportError {
    /// The destination could not be read as `hostname:port` at send time.
    #[error(transparent)]
    Endpoint(#[from] ParseError),

    /// The destination could not be parsed as a URL by the HTTP transport.
    #[error("malformed url '{url}'")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Socket-level failure: resolution, connect, write, read or timeout.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure inside the HTTP client during the request/response exchange.
    #[error(transparent)]
    Http(#[from] Box<ureq::Error>),

    /// The 307 redirect chain exceeded the hop cap.
    #[error("redirect chain exceeded {limit} hops")]
    TooManyRedirects { limit: usize },
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

// ---------------------------------------------------------------------------
// SerializationError
// ---------------------------------------------------------------------------

/**
 * The payload formatter failed to encode a job-state record.
 */
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml serialization failed: {0}")]
    Xml(#[from] quick_xml::errors::serialize::SeError),
}

// ---------------------------------------------------------------------------
// NotifyError
// ---------------------------------------------------------------------------

/**
 * Umbrella for the combined serialize-then-send path exposed by the
 * facade crate. Either stage fails the whole notification.
 */
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
