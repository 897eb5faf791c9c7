use std::fmt;
use std::str::FromStr;

/// Network identity of a class server. Two replicas are the same replica iff host and port match.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ReplicaAddress {
    host: String,
    port: u16,
}

impl ReplicaAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ReplicaAddress {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub(crate) fn http_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ReplicaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AddressParseError {
    #[error("address '{0}' is not in 'host:port' format")]
    MissingPort(String),
    #[error("address '{0}' has an empty host")]
    EmptyHost(String),
    #[error("address '{0}' has an invalid port")]
    InvalidPort(String),
}

impl FromStr for ReplicaAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // rsplit so that the port is always the last segment.
        let (host, port) = match s.rsplit_once(':') {
            Some(parts) => parts,
            None => return Err(AddressParseError::MissingPort(s.to_string())),
        };

        if host.is_empty() {
            return Err(AddressParseError::EmptyHost(s.to_string()));
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| AddressParseError::InvalidPort(s.to_string()))?;

        Ok(ReplicaAddress::new(host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let address: ReplicaAddress = "localhost:8080".parse().unwrap();
        assert_eq!(address.host(), "localhost");
        assert_eq!(address.port(), 8080);
        assert_eq!(address.to_string(), "localhost:8080");
        assert_eq!(address.http_url(), "http://localhost:8080");
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            "localhost".parse::<ReplicaAddress>(),
            Err(AddressParseError::MissingPort("localhost".into()))
        );
        assert_eq!(
            ":8080".parse::<ReplicaAddress>(),
            Err(AddressParseError::EmptyHost(":8080".into()))
        );
        assert_eq!(
            "localhost:http".parse::<ReplicaAddress>(),
            Err(AddressParseError::InvalidPort("localhost:http".into()))
        );
        assert_eq!(
            "localhost:70000".parse::<ReplicaAddress>(),
            Err(AddressParseError::InvalidPort("localhost:70000".into()))
        );
    }
}
