/**
 * Transport layer — the closed set of delivery strategies.
 *
 * Everything related to *how* a formatted payload reaches its destination:
 * - `datagram` — single-shot UDP, fire-and-forget
 * - `stream` — one TCP connection per call, write + flush + close
 * - `http` — POST with proxying, Basic credentials and 307 following
 *
 * Selection is by the `Transport` tag; each variant owns its own
 * address-validation rule and its own interpretation of the destination
 * string. Every send is synchronous on the caller's thread and owns its
 * socket for exactly the duration of the call.
 */
pub mod datagram;
pub mod http;
pub mod stream;

pub use http::ProxyConfig;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::endpoint::Endpoint;
use crate::error::{TransportError, ValidationError};

/// Expected-format fragment shown by the socket transports' validation.
const HOST_PORT_FORMAT: &str = "hostname:port";

/// Expected-format fragment shown by the HTTP transport's validation.
const HTTP_URL_FORMAT: &str = "http://hostname:port/path";

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/**
 * The three wire transports a notification can travel over.
 *
 * A closed enum rather than a trait object: the set is fixed, callers pick
 * a variant by name, and dispatch is a `match`.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Udp,
    Tcp,
    Http,
}

impl Transport {
    /**
     * Checks a destination string against this transport's address grammar
     * without touching the network. Intended to run at configuration time,
     * before a notification is ever attempted.
     *
     * Rules:
     * - `Udp`/`Tcp`: the string must parse as `hostname:port`.
     * - `Http`: the string must parse as a URL — unless it contains `$`,
     *   which marks an unresolved template placeholder that the hosting
     *   environment expands later, in which case validation is skipped.
     */
    pub fn validate(&self, destination: &str) -> Result<(), ValidationError> {
        match self {
            Transport::Udp | Transport::Tcp => match Endpoint::parse(destination) {
                Ok(_) => Ok(()),
                Err(_) => Err(ValidationError::new(destination, HOST_PORT_FORMAT)),
            },
            Transport::Http => http::validate(destination),
        }
    }

    /**
     * Performs one delivery attempt. Single-shot: a failure here is final,
     * the core never retries.
     */
    pub fn send(&self, request: &SendRequest) -> Result<(), TransportError> {
        match self {
            Transport::Udp => datagram::send(request),
            Transport::Tcp => stream::send(request),
            Transport::Http => http::send(request),
        }
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Transport::Udp),
            "tcp" => Ok(Transport::Tcp),
            "http" => Ok(Transport::Http),
            other => Err(format!("unknown transport '{other}', expected udp, tcp or http")),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transport::Udp => "UDP",
            Transport::Tcp => "TCP",
            Transport::Http => "HTTP",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// SendRequest
// ---------------------------------------------------------------------------

/**
 * Everything one delivery attempt needs, assembled by the caller and
 * consumed by exactly one `Transport::send`.
 *
 * - `timeout` bounds connect and read on the stream and HTTP transports;
 *   the datagram transport ignores it. `Duration::ZERO` means unbounded.
 * - `is_json` only matters to the HTTP transport, where it picks the
 *   `Content-Type` header.
 * - `proxy` is threaded explicitly so the core holds no hidden global
 *   proxy state; when absent, the HTTP transport consults the
 *   `http_proxy` environment variable before going direct.
 */
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub destination: String,
    pub payload: Vec<u8>,
    pub timeout: Duration,
    pub is_json: bool,
    pub proxy: Option<ProxyConfig>,
}

impl SendRequest {
    pub fn new(
        destination: impl Into<String>,
        payload: Vec<u8>,
        timeout: Duration,
        is_json: bool,
    ) -> Self {
        Self {
            destination: destination.into(),
            payload,
            timeout,
            is_json,
            proxy: None,
        }
    }

    /// Routes the HTTP transport through an explicit proxy, overriding the
    /// `http_proxy` environment fallback.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// The `Content-Type` the HTTP transport will send for this payload.
    pub fn content_type(&self) -> &'static str {
        if self.is_json {
            http::JSON_CONTENT_TYPE
        } else {
            http::XML_CONTENT_TYPE
        }
    }
}
