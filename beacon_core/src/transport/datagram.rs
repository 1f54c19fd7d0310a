/**
 * Datagram transport — fire-and-forget UDP delivery.
 *
 * One ephemeral socket per call, one packet carrying the whole payload,
 * no acknowledgment and no timeout: a UDP send either hands the packet to
 * the OS or fails immediately. Payloads that cannot fit a single datagram
 * are rejected before any I/O.
 */
use std::io;
use std::net::UdpSocket;

use tracing::debug;

use super::SendRequest;
use crate::endpoint::Endpoint;
use crate::error::TransportError;

/// Largest UDP payload deliverable in one packet (64 KiB minus IP and UDP
/// headers). Anything bigger is a fatal send error.
const MAX_DATAGRAM_BYTES: usize = 65_507;

pub fn send(request: &SendRequest) -> Result<(), TransportError> {
    if request.payload.len() > MAX_DATAGRAM_BYTES {
        return Err(io::Error::other(format!(
            "payload of {} bytes exceeds the {MAX_DATAGRAM_BYTES} byte datagram limit",
            request.payload.len()
        ))
        .into());
    }

    let endpoint = Endpoint::parse(&request.destination)?;
    let addr = endpoint.to_socket_addr()?;

    /* Bind an ephemeral port in the same address family as the target. */
    let bind_addr = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = UdpSocket::bind(bind_addr)?;
    let sent = socket.send_to(&request.payload, addr)?;

    debug!(%endpoint, bytes = sent, "datagram sent");
    Ok(())
}
