//! Single-shot plaintext file transfer over TCP.
//!
//! The wire format is the file's bytes and nothing else: no header, no
//! length prefix, no checksum.  The sender closing the connection marks
//! the end of the file.  Which side sends and which receives is agreed
//! out of band.
//!
//! Both halves block the calling thread until the transfer is over and
//! cannot be cancelled; there are no timeouts.  Run them on a dedicated
//! thread if the caller needs to stay responsive.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::net::{Ipv4Addr, SocketAddr, TcpListener, TcpStream};
use std::path::Path;

use crate::errors::{Result, SecureFilesError};

/// Size of each read/write chunk in bytes.
pub const CHUNK_SIZE: usize = 1024;

/// Listen on `port` (all interfaces), send `file` to the first peer that
/// connects, then close both the connection and the listener.
///
/// Returns the number of bytes sent.
pub fn serve(port: u16, file: &Path) -> Result<u64> {
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .map_err(|e| network("bind", &format!("port {port}"), e))?;
    serve_on(listener, file)
}

/// Like [`serve`], on a listener the caller already bound.
///
/// The listener is consumed and dropped after the one connection.
pub fn serve_on(listener: TcpListener, file: &Path) -> Result<u64> {
    let local = listener
        .local_addr()
        .map_err(|e| network("inspect", "listener", e))?;

    // Open the file before accepting so a bad path fails fast.
    let mut source = File::open(file)?;
    tracing::info!(addr = %local, file = %file.display(), "waiting for a peer");

    let (mut stream, peer) = listener
        .accept()
        .map_err(|e| network("accept on", &local.to_string(), e))?;
    tracing::info!(%peer, "peer connected");

    let sent = pump(&mut source, &mut stream, Side::Writer, &peer)?;
    stream
        .flush()
        .map_err(|e| network("flush to", &peer.to_string(), e))?;

    drop(stream);
    drop(listener);

    tracing::info!(%peer, bytes = sent, "file sent");
    Ok(sent)
}

/// Connect to `address:port` and save everything received to `dest`
/// until the peer closes the connection.
///
/// `dest` is created or truncated before the first byte arrives.
/// Returns the number of bytes received.
pub fn fetch(address: &str, port: u16, dest: &Path) -> Result<u64> {
    let target = format!("{address}:{port}");
    let mut stream =
        TcpStream::connect(target.as_str()).map_err(|e| network("connect to", &target, e))?;
    let peer = stream
        .peer_addr()
        .map_err(|e| network("inspect", &target, e))?;
    tracing::info!(%peer, "connected");

    let mut sink = File::create(dest)?;
    let received = pump(&mut stream, &mut sink, Side::Reader, &peer)?;
    sink.flush()?;

    tracing::info!(%peer, bytes = received, dest = %dest.display(), "file received");
    Ok(received)
}

/// Which end of the copy is the socket.
#[derive(Clone, Copy)]
enum Side {
    Reader,
    Writer,
}

/// Copy `from` into `to` in `CHUNK_SIZE` pieces until EOF.
///
/// Errors on the socket side become `Network`, errors on the file side
/// stay `Io`, so the caller can tell a dropped peer from a full disk.
fn pump<R: Read, W: Write>(
    from: &mut R,
    to: &mut W,
    socket: Side,
    peer: &SocketAddr,
) -> Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match from.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(match socket {
                    Side::Reader => network("read from", &peer.to_string(), e),
                    Side::Writer => e.into(),
                })
            }
        };

        to.write_all(&buf[..n]).map_err(|e| match socket {
            Side::Writer => network("write to", &peer.to_string(), e),
            Side::Reader => e.into(),
        })?;
        total += n as u64;
    }

    Ok(total)
}

fn network(action: &str, target: &str, e: std::io::Error) -> SecureFilesError {
    SecureFilesError::Network(format!("cannot {action} {target}: {e}"))
}
