/*!
 * Beacon — build notification delivery over UDP, TCP and HTTP.
 *
 * This is the crate users should depend on. It re-exports the core engine
 * and adds the one obvious entry point: serialize a job-state record and
 * deliver it in a single call.
 *
 * # Quick start
 *
 * ```no_run
 * use std::time::Duration;
 * use beacon::{Format, JobState, Transport};
 *
 * fn main() -> Result<(), beacon::NotifyError> {
 *     let state = JobState {
 *         name: "nightly".into(),
 *         url: "job/nightly/".into(),
 *         ..Default::default()
 *     };
 *
 *     beacon::notify(
 *         Transport::Http,
 *         "http://ci-hooks.example.com:8080/notify",
 *         &state,
 *         Format::Json,
 *         Duration::from_secs(30),
 *     )
 * }
 * ```
 *
 * # Lower-level use
 *
 * When the payload is produced elsewhere, format and dispatch separately:
 *
 * ```no_run
 * use std::time::Duration;
 * use beacon::{SendRequest, Transport};
 *
 * # fn main() -> Result<(), beacon::TransportError> {
 * let request = SendRequest::new(
 *     "loghost:514",
 *     b"build finished".to_vec(),
 *     Duration::from_secs(5),
 *     false,
 * );
 * Transport::Tcp.send(&request)
 * # }
 * ```
 */

use std::time::Duration;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Re-exports from beacon_core — the public surface area
// ---------------------------------------------------------------------------

pub use beacon_core::{
    send, validate, BuildParameter, BuildState, BuildStatus, Endpoint, Format, JobState,
    NotifyError, ParseError, Phase, ProtocolError, ProxyConfig, SendRequest,
    SerializationError, Transport, TransportError, ValidationError,
};

// ---------------------------------------------------------------------------
// notify
// ---------------------------------------------------------------------------

/**
 * Serializes a job-state record and delivers it in one call.
 *
 * The format picks both the encoding and, for HTTP, the `Content-Type`
 * header. Delivery is synchronous and single-shot; either stage failing
 * fails the notification.
 */
pub fn notify(
    transport: Transport,
    destination: &str,
    state: &impl Serialize,
    format: Format,
    timeout: Duration,
) -> Result<(), NotifyError> {
    let payload = format.serialize(state)?;
    let request = SendRequest::new(destination, payload, timeout, format.is_json());
    transport.send(&request)?;
    Ok(())
}

/**
 * Same as [`notify`], but routed through an explicit HTTP proxy instead of
 * whatever the `http_proxy` environment variable says. Only meaningful for
 * the HTTP transport; the socket transports ignore the proxy.
 */
pub fn notify_via_proxy(
    transport: Transport,
    destination: &str,
    state: &impl Serialize,
    format: Format,
    timeout: Duration,
    proxy: ProxyConfig,
) -> Result<(), NotifyError> {
    let payload = format.serialize(state)?;
    let request =
        SendRequest::new(destination, payload, timeout, format.is_json()).with_proxy(proxy);
    transport.send(&request)?;
    Ok(())
}
