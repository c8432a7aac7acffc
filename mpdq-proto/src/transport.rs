use log::{debug, trace};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::{
    address::MpdAddress,
    errors::{MpdError, MpdResult},
    version::Version,
};

const GREETING_PREFIX: &str = "OK MPD ";

/// Performs one request against MPD: sends the query and returns everything
/// the server wrote back before closing the connection.
pub trait Transport: Send + Sync {
    fn exchange(&self, query: &str) -> impl Future<Output = MpdResult<String>> + Send;
}

/// Opens a fresh TCP or unix socket connection for every exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketTransport {
    address: MpdAddress,
}

impl SocketTransport {
    pub fn new(address: MpdAddress) -> Self {
        Self { address }
    }

    pub fn address(&self) -> &MpdAddress {
        &self.address
    }
}

impl Transport for SocketTransport {
    async fn exchange(&self, query: &str) -> MpdResult<String> {
        let addr = &self.address;
        match addr {
            MpdAddress::IpAndPort(host) => {
                let stream = tokio::net::TcpStream::connect(host.as_str()).await?;
                debug!(addr:?; "Connected to MPD");
                exchange_over(stream, query).await
            }
            #[cfg(unix)]
            MpdAddress::SocketPath(path) => {
                let stream = tokio::net::UnixStream::connect(path.as_str()).await?;
                debug!(addr:?; "Connected to MPD");
                exchange_over(stream, query).await
            }
            #[cfg(not(unix))]
            MpdAddress::SocketPath(_) => {
                Err(MpdError::Generic("Unix sockets are only supported on unix".to_string()))
            }
        }
    }
}

/// Validates the greeting, writes `query`, closes the write half and reads
/// until the server closes the connection.
pub async fn exchange_over<S>(stream: S, query: &str) -> MpdResult<String>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut stream = BufReader::new(stream);

    let mut greeting = String::new();
    stream.read_line(&mut greeting).await?;
    let Some(version) = greeting.strip_prefix(GREETING_PREFIX) else {
        return Err(MpdError::Generic(format!("Handshake validation failed. '{}'", greeting.trim())));
    };
    let version: Version = version.parse().map_err(|_| {
        MpdError::Generic(format!(
            "Handshake validation failed. Cannot parse version from '{}'",
            greeting.trim()
        ))
    })?;
    debug!(version = version.to_string().as_str(), handshake = greeting.trim(); "MPD greeting received");

    trace!(query; "Sending query");
    stream.get_mut().write_all(query.as_bytes()).await?;
    stream.get_mut().shutdown().await?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    trace!(bytes = buf.len(); "Read MPD response");

    String::from_utf8(buf)
        .map_err(|err| MpdError::Parse(format!("Response is not valid UTF-8: {err}")))
}
