/*!
 * Beacon Core — the notification delivery engine.
 *
 * This crate turns a formatted payload and a destination string into a
 * single delivery attempt over one of three wire transports. End users
 * should depend on the `beacon` facade crate instead, which re-exports
 * everything and adds the one-call serialize-and-send glue.
 *
 * # Module structure
 *
 * - `payload/` — what we send: the job-state record, XML/JSON encoding
 * - `transport/` — how we deliver: datagram, stream and HTTP strategies
 * - `endpoint` — `hostname:port` parsing shared by the socket transports
 * - `error` — the caller-facing error taxonomy
 *
 * # Delivery model
 *
 * Every send is synchronous, single-shot and stateless: the call opens
 * its own socket, delivers once, closes the socket on every exit path and
 * never retries. Callers wanting concurrency invoke sends from threads of
 * their own choosing.
 */

mod endpoint;
mod error;
mod payload;
mod transport;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use endpoint::{Endpoint, ParseError};
pub use error::{
    NotifyError, ProtocolError, SerializationError, TransportError, ValidationError,
};
pub use payload::{BuildParameter, BuildState, BuildStatus, Format, JobState, Phase};
pub use transport::{ProxyConfig, SendRequest, Transport};

// ---------------------------------------------------------------------------
// Public functions
// ---------------------------------------------------------------------------

/**
 * Performs one delivery attempt of an already formatted payload.
 *
 * Equivalent to `transport.send(&request)`; exists so call sites read as
 * `beacon_core::send(Transport::Http, &request)`.
 */
pub fn send(transport: Transport, request: &SendRequest) -> Result<(), TransportError> {
    transport.send(request)
}

/**
 * Checks a destination string against a transport's address grammar
 * without performing any I/O. Intended for configuration-time feedback,
 * before any notification is enqueued.
 */
pub fn validate(transport: Transport, destination: &str) -> Result<(), ValidationError> {
    transport.validate(destination)
}
