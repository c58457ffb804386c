use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::consts::{CANDIDATE_URL_HTTP, CANDIDATE_URL_SOCKS};

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProxyKind {
    #[default]
    Http,
    Socks,
}

impl ProxyKind {
    pub fn candidate_url(self) -> &'static str {
        use ProxyKind::*;
        match self {
            Http => CANDIDATE_URL_HTTP,
            Socks => CANDIDATE_URL_SOCKS,
        }
    }

    // url scheme understood by the http client when
    // this kind is dialed as an upstream proxy
    pub fn scheme(self) -> &'static str {
        use ProxyKind::*;
        match self {
            Http => "http",
            Socks => "socks5",
        }
    }
}

impl FromStr for ProxyKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ProxyKind::*;
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Http),
            "socks" => Ok(Socks),
            _ => Err("unknown proxy type"),
        }
    }
}

impl Display for ProxyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use ProxyKind::*;
        let s = match self {
            Http => "http",
            Socks => "socks",
        };
        write!(f, "{}", s)
    }
}

// never mutated once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyCandidate {
    pub host: String,
    pub port: u16,
}

impl FromStr for ProxyCandidate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut iter = s.split(':');

        let host = iter.next().unwrap_or("");
        let port = iter.next().ok_or("missing port separator")?;
        if iter.next().is_some() {
            return Err("too many separators");
        }

        if host.is_empty() {
            return Err("empty host");
        }

        let port = port.parse::<u16>().map_err(|_| "invalid port")?;

        Ok(ProxyCandidate {
            host: String::from(host),
            port,
        })
    }
}

impl Display for ProxyCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
