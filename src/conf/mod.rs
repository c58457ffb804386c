use std::fs;

use serde::{Serialize, Deserialize};

mod log;
pub use self::log::{LogLevel, LogConf};

mod relay;
pub use relay::RelayConf;

pub trait Config {
    type Output;

    fn build(self) -> Self::Output;

    fn rst_field(&mut self, other: &Self) -> &mut Self;

    fn from_cmd_args(matches: &clap::ArgMatches) -> Self;
}

// override fields that the other side provides
#[macro_export]
macro_rules! rst {
    ($this: ident, $field: ident, $other: ident) => {
        if $other.$field.is_some() {
            $this.$field = $other.$field;
        }
    };
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FullConf {
    #[serde(default)]
    pub log: LogConf,

    #[serde(default)]
    pub relay: RelayConf,
}

impl FullConf {
    pub fn from_conf_str(conf: &str) -> Result<Self, String> {
        let json_err = match serde_json::from_str(conf) {
            Ok(x) => return Ok(x),
            Err(e) => e,
        };
        let toml_err = match toml::from_str(conf) {
            Ok(x) => return Ok(x),
            Err(e) => e,
        };

        Err(format!("as json: {}; as toml: {}", json_err, toml_err))
    }

    pub fn from_conf_file(file: &str) -> Self {
        let conf = fs::read_to_string(file)
            .unwrap_or_else(|e| panic!("unable to open {}: {}", file, &e));
        Self::from_conf_str(&conf)
            .unwrap_or_else(|e| panic!("unable to parse {}: {}", file, &e))
    }

    pub fn apply_cmd_opts(&mut self, matches: &clap::ArgMatches) -> &mut Self {
        self.log.rst_field(&LogConf::from_cmd_args(matches));
        self.relay.rst_field(&RelayConf::from_cmd_args(matches));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ProxyKind;

    #[test]
    fn parse_toml() {
        let conf = r#"
            [log]
            level = "info"
            output = "stdout"

            [relay]
            port = 8388
            proxy_type = "socks"
        "#;

        let conf = FullConf::from_conf_str(conf).unwrap();
        let (port, kind) = conf.relay.build();
        assert_eq!(port, 8388);
        assert_eq!(kind, ProxyKind::Socks);
    }

    #[test]
    fn parse_json() {
        let conf = r#"
            {
                "log": { "level": "warn" },
                "relay": { "port": 9000 }
            }
        "#;

        let conf = FullConf::from_conf_str(conf).unwrap();
        let (port, kind) = conf.relay.build();
        assert_eq!(port, 9000);
        assert_eq!(kind, ProxyKind::Http);
    }

    #[test]
    fn empty_conf_falls_back_to_defaults() {
        let conf = FullConf::from_conf_str("").unwrap();
        let (port, kind) = conf.relay.build();
        assert_eq!(port, crate::consts::DEFAULT_PORT);
        assert_eq!(kind, ProxyKind::Http);
    }

    #[test]
    fn garbage_conf_is_an_error() {
        assert!(FullConf::from_conf_str("[relay").is_err());
    }
}
