use std::{sync::Arc, time::Duration};

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    address::{self, MpdAddress},
    command::Executable,
    delimiters::DelimiterTable,
    errors::{MpdError, MpdResult},
    parser::ResponseParser,
    response::Response,
    transport::{SocketTransport, Transport},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub address: String,
    /// Limit for the whole exchange, waits indefinitely when unset.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { address: MpdAddress::default().to_string(), timeout_ms: None }
    }
}

impl ClientConfig {
    /// Config with the address taken from `MPD_HOST`/`MPD_PORT` when set.
    pub fn from_env() -> Self {
        let default = Self::default();
        let address = match address::resolve(None, &default.address) {
            MpdAddress::IpAndPort(addr) => addr,
            MpdAddress::SocketPath(path) => path,
        };
        Self { address, ..default }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug)]
pub struct Client<T = SocketTransport> {
    transport: T,
    delimiters: Arc<DelimiterTable>,
    timeout: Option<Duration>,
}

impl Client<SocketTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        let address = address::resolve(None, &config.address);
        debug!(addr:? = address, timeout:? = config.timeout(); "MPD client initialized");
        Self::with_transport(SocketTransport::new(address)).with_timeout(config.timeout())
    }

    /// Connects to `address` regardless of the environment.
    pub fn with_address(address: &str) -> Self {
        Self::with_transport(SocketTransport::new(address::resolve(Some(address), address)))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport, delimiters: Arc::new(DelimiterTable::default()), timeout: None }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Arc<DelimiterTable>) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `executable` over a new connection and parses whatever MPD
    /// answered. An `ACK` anywhere in the answer fails the whole call.
    pub async fn execute(&self, executable: impl Into<Executable>) -> MpdResult<Response> {
        let executable = executable.into();
        let query = executable.build_query();
        trace!(command = executable.describe().as_str(); "Executing");

        let raw = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.transport.exchange(query))
                .await
                .map_err(|_| {
                    MpdError::TimedOut(format!(
                        "No complete response within {}ms",
                        timeout.as_millis()
                    ))
                })??,
            None => self.transport.exchange(query).await?,
        };

        ResponseParser::new(&raw, &executable, &self.delimiters).parse()
    }
}
