use std::fmt::{Display, Formatter};

// candidate sources, one per proxy kind
pub const CANDIDATE_URL_HTTP: &str = "https://pubproxy.com/api/proxy?limit=1&format=txt&type=http";
pub const CANDIDATE_URL_SOCKS: &str = "https://pubproxy.com/api/proxy?limit=1&format=txt&type=socks5";

// validation echo endpoint, fetched through the candidate itself
pub const ECHO_URL: &str = "http://api.rto.app/echo";
pub const USER_AGENT: &str = "rto/proxy-app";

// refresh cadence, seconds
pub const REFRESH_INTERVAL: u64 = 300;
pub const RETRY_INTERVAL: u64 = 5;

// network timeouts, seconds
pub const FETCH_TIMEOUT: u64 = 15;
pub const VALIDATE_TIMEOUT: u64 = 15;
pub const CONNECT_TIMEOUT: u64 = 5;

// defaults
pub const DEFAULT_LOG_FILE: &str = "stdout";
pub const DEFAULT_PORT: u16 = 1080;

// features
macro_rules! def_feat {
    ($fet: ident, $name: expr) => {
        pub const $fet: bool = if cfg!(feature = $name) { true } else { false };
    };
}

def_feat!(FEATURE_MIMALLOC, "mi-malloc");
def_feat!(FEATURE_JEMALLOC, "jemalloc");
def_feat!(FEATURE_MULTI_THREAD, "multi-thread");

pub struct Features {
    pub mimalloc: bool,
    pub jemalloc: bool,
    pub multi_thread: bool,
}

pub const FEATURES: Features = Features {
    mimalloc: FEATURE_MIMALLOC,
    jemalloc: FEATURE_JEMALLOC,
    multi_thread: FEATURE_MULTI_THREAD,
};

impl Display for Features {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        macro_rules! disp_feat {
            ($field: ident, $show: expr) => {
                if self.$field {
                    write!(f, "[{}]", $show)?;
                }
            };
        }

        disp_feat!(multi_thread, "multi-thread");
        disp_feat!(mimalloc, "mimalloc");
        disp_feat!(jemalloc, "jemalloc");
        Ok(())
    }
}
