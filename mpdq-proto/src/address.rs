use std::fmt::Display;

use mpdq_shared::{env::ENV, paths};

pub const DEFAULT_PORT: u16 = 6600;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MpdAddress {
    IpAndPort(String),
    SocketPath(String),
}

impl Default for MpdAddress {
    fn default() -> Self {
        Self::IpAndPort(format!("127.0.0.1:{DEFAULT_PORT}"))
    }
}

impl Display for MpdAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MpdAddress::IpAndPort(addr) => write!(f, "{addr}"),
            MpdAddress::SocketPath(path) => write!(f, "unix:{path}"),
        }
    }
}

impl MpdAddress {
    /// Anything that expands to an absolute path is a unix socket, everything
    /// else is expected to be `host:port`.
    pub fn parse(addr: &str) -> Self {
        let expanded = paths::expand(addr);
        if expanded.starts_with('/') {
            Self::SocketPath(expanded)
        } else {
            Self::IpAndPort(addr.to_owned())
        }
    }
}

/// Picks the address to connect to. An address given explicitly by the
/// caller wins over `MPD_HOST`/`MPD_PORT`, which in turn win over the
/// configured one.
pub fn resolve(addr_from_caller: Option<&str>, addr_from_config: &str) -> MpdAddress {
    if let Some(addr) = addr_from_caller {
        return MpdAddress::parse(addr);
    }

    if let Some(addr) = resolve_env() {
        return addr;
    }

    MpdAddress::parse(addr_from_config)
}

fn resolve_env() -> Option<MpdAddress> {
    let host = ENV.non_empty("MPD_HOST")?;

    let host = match host.split_once('@') {
        Some(("", _)) => {
            log::warn!(host = host.as_str(); "Abstract sockets are not supported, ignoring MPD_HOST");
            return None;
        }
        Some((_password, host)) => {
            log::warn!("Password in MPD_HOST is not supported and will not be used");
            host.to_owned()
        }
        None => host,
    };

    let expanded = paths::expand(&host);
    if expanded.starts_with('/') {
        return Some(MpdAddress::SocketPath(expanded));
    }

    let port = ENV.non_empty("MPD_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
    Some(MpdAddress::IpAndPort(format!("{host}:{port}")))
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use std::sync::{LazyLock, Mutex};

    use mpdq_shared::env::ENV;
    use test_case::test_case;

    use super::{MpdAddress, resolve};
    use crate::client::ClientConfig;

    static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    //             Caller                      Config          MPD_HOST                   MPD_PORT      Expected                                                  Description
    #[test_case(Some("127.0.0.1:6600"), "127.0.0.1:7600", Some("192.168.0.1"),     Some("6601"), MpdAddress::IpAndPort("127.0.0.1:6600".to_string())    ; "prefer caller over all")]
    #[test_case(None,                   "127.0.0.1:7600", Some("192.168.0.1"),     Some("6601"), MpdAddress::IpAndPort("192.168.0.1:6601".to_string())  ; "prefer env over config")]
    #[test_case(None,                   "127.0.0.1:7600", None,                    Some("6601"), MpdAddress::IpAndPort("127.0.0.1:7600".to_string())    ; "config when only MPD_PORT")]
    #[test_case(None,                   "127.0.0.1:7600", Some("192.168.0.1"),     None,         MpdAddress::IpAndPort("192.168.0.1:6600".to_string())  ; "default port with only MPD_HOST")]
    #[test_case(None,                   "127.0.0.1:7600", Some("/run/mpd/socket"), Some("6601"), MpdAddress::SocketPath("/run/mpd/socket".to_string())  ; "socket path in MPD_HOST")]
    #[test_case(None,                   "127.0.0.1:7600", Some("~/mpd/socket"),    None,         MpdAddress::SocketPath("/home/u123/mpd/socket".to_string()) ; "socket path in MPD_HOST with tilde")]
    #[test_case(None,                   "127.0.0.1:7600", Some("secret@10.0.0.2"), None,         MpdAddress::IpAndPort("10.0.0.2:6600".to_string())     ; "password in MPD_HOST is dropped")]
    #[test_case(None,                   "127.0.0.1:7600", Some("secret@/tmp/s"),   None,         MpdAddress::SocketPath("/tmp/s".to_string())           ; "password with socket path is dropped")]
    #[test_case(None,                   "127.0.0.1:7600", Some("@mpd"),            None,         MpdAddress::IpAndPort("127.0.0.1:7600".to_string())    ; "abstract socket falls back to config")]
    #[test_case(None,                   "127.0.0.1:7600", Some(""),                None,         MpdAddress::IpAndPort("127.0.0.1:7600".to_string())    ; "empty MPD_HOST is ignored")]
    #[test_case(None,                   "/tmp/cfg_sock",  None,                    None,         MpdAddress::SocketPath("/tmp/cfg_sock".to_string())    ; "socket path from config")]
    #[test_case(None,                   "$HOME/cfg_sock", None,                    None,         MpdAddress::SocketPath("/home/u123/cfg_sock".to_string()) ; "socket path from config with env var")]
    #[test_case(Some("~/cli_sock"),     "127.0.0.1:7600", Some("192.168.0.1"),     None,         MpdAddress::SocketPath("/home/u123/cli_sock".to_string()) ; "socket path from caller")]
    fn resolves(
        caller: Option<&str>,
        config: &str,
        host: Option<&str>,
        port: Option<&str>,
        expected: MpdAddress,
    ) {
        let _guard = TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        ENV.clear();
        ENV.set("HOME", "/home/u123");
        if let Some(host) = host {
            ENV.set("MPD_HOST", host);
        }
        if let Some(port) = port {
            ENV.set("MPD_PORT", port);
        }

        assert_eq!(resolve(caller, config), expected);
    }

    #[test]
    fn config_from_env() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        ENV.clear();
        ENV.set("MPD_HOST", "music.lan");
        ENV.set("MPD_PORT", "6601");
        assert_eq!(ClientConfig::from_env().address, "music.lan:6601");

        ENV.clear();
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }

    #[test]
    fn display() {
        assert_eq!(MpdAddress::default().to_string(), "127.0.0.1:6600");
        assert_eq!(MpdAddress::SocketPath("/run/mpd".to_owned()).to_string(), "unix:/run/mpd");
    }
}
