use std::{fmt::Display, str::FromStr};

use crate::errors::MpdError;

/// Protocol version announced by MPD in its `OK MPD x.y.z` greeting.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = MpdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let mut next = |name: &str| {
            parts
                .next()
                .ok_or_else(|| MpdError::Parse(format!("Cannot parse {name} version from '{s}'")))
                .and_then(|part| part.parse::<u8>().map_err(MpdError::from))
        };

        Ok(Self { major: next("major")?, minor: next("minor")?, patch: next("patch")? })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
