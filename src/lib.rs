pub mod cmd;
pub mod conf;
pub mod consts;
pub mod utils;
pub mod store;
pub mod rotate;
pub mod relay;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ENV_CONFIG: &str = "RTO_CONF";
