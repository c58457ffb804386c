use std::env;
use cfg_if::cfg_if;

use rto::cmd;
use rto::conf::{Config, FullConf, LogConf};
use rto::utils::ProxyKind;
use rto::relay;
use rto::ENV_CONFIG;

cfg_if! {
    if #[cfg(all(feature = "mi-malloc"))] {
        use mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    } else if #[cfg(all(feature = "jemalloc", not(target_env = "msvc")))] {
        use jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
    }
}

fn main() {
    let conf = (|| {
        if let Ok(conf_str) = env::var(ENV_CONFIG) {
            if let Ok(conf) = FullConf::from_conf_str(&conf_str) {
                return conf;
            }
        };

        use cmd::CmdInput;
        match cmd::scan() {
            CmdInput::Config(path, matches) => {
                let mut conf = FullConf::from_conf_file(&path);
                conf.apply_cmd_opts(&matches);
                conf
            }
            CmdInput::Opts(matches) => {
                let mut conf = FullConf::default();
                conf.apply_cmd_opts(&matches);
                conf
            }
        }
    })();

    start_from_conf(conf);
}

fn start_from_conf(full: FullConf) {
    let FullConf {
        log: log_conf,
        relay: relay_conf,
    } = full;

    setup_log(log_conf);

    println!("relay: {}", &relay_conf);
    let (port, kind) = relay_conf.build();

    execute(port, kind);
}

fn setup_log(log: LogConf) {
    println!("log: {}", &log);

    let (level, output) = log.build();
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}]{}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(output)
        .apply()
        .unwrap_or_else(|e| panic!("failed to setup logger: {}", &e))
}

fn execute(port: u16, kind: ProxyKind) {
    #[cfg(feature = "multi-thread")]
    {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(relay::run(port, kind))
    }

    #[cfg(not(feature = "multi-thread"))]
    {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(relay::run(port, kind))
    }
}
