use std::fmt::{Formatter, Display};
use serde::{Serialize, Deserialize};
use super::Config;
use crate::consts::DEFAULT_PORT;
use crate::utils::ProxyKind;

#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct RelayConf {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<ProxyKind>,
}

impl Config for RelayConf {
    type Output = (u16, ProxyKind);

    fn build(self) -> Self::Output {
        let RelayConf { port, proxy_type } = self;

        (port.unwrap_or(DEFAULT_PORT), proxy_type.unwrap_or_default())
    }

    fn rst_field(&mut self, other: &Self) -> &mut Self {
        use crate::rst;
        let other = other.clone();

        rst!(self, port, other);
        rst!(self, proxy_type, other);
        self
    }

    fn from_cmd_args(matches: &clap::ArgMatches) -> Self {
        let port = matches
            .get_one::<String>("port")
            .map(|x| x.parse::<u16>().unwrap_or_else(|_| panic!("invalid port: {}", x)));

        let proxy_type = matches
            .get_one::<String>("proxy_type")
            .map(|x| x.parse::<ProxyKind>().unwrap_or_else(|_| panic!("invalid type: {}", x)));

        Self { port, proxy_type }
    }
}

impl Display for RelayConf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let RelayConf { port, proxy_type } = self.clone();
        let port = port.unwrap_or(DEFAULT_PORT);
        let proxy_type = proxy_type.unwrap_or_default();

        write!(f, "port={}, proxy_type={}", port, proxy_type)
    }
}
