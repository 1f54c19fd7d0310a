/**
 * Stream transport — one TCP connection per notification.
 *
 * Connect, write the whole payload, flush, shut the write side down, done.
 * The request timeout bounds both the connect and any subsequent socket
 * operation; a zero timeout means unbounded. The socket is closed on every
 * exit path by RAII, error paths included.
 */
use std::io::Write;
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use tracing::debug;

use super::SendRequest;
use crate::endpoint::Endpoint;
use crate::error::TransportError;

pub fn send(request: &SendRequest) -> Result<(), TransportError> {
    let endpoint = Endpoint::parse(&request.destination)?;
    let addr = endpoint.to_socket_addr()?;

    let mut stream = if request.timeout.is_zero() {
        TcpStream::connect(addr)?
    } else {
        TcpStream::connect_timeout(&addr, request.timeout)?
    };
    stream.set_read_timeout(io_timeout(request.timeout))?;
    stream.set_write_timeout(io_timeout(request.timeout))?;

    stream.write_all(&request.payload)?;
    stream.flush()?;
    stream.shutdown(Shutdown::Write)?;

    debug!(%endpoint, bytes = request.payload.len(), "stream payload sent");
    Ok(())
}

/// `set_read_timeout`/`set_write_timeout` reject `Some(ZERO)`; a zero
/// request timeout means "no timeout" here.
fn io_timeout(timeout: Duration) -> Option<Duration> {
    if timeout.is_zero() {
        None
    } else {
        Some(timeout)
    }
}
