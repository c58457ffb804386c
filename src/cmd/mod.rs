use clap::{Arg, ArgMatches, Command};

pub enum CmdInput {
    Config(String, ArgMatches),
    Opts(ArgMatches),
}

pub fn scan() -> CmdInput {
    let app = Command::new("rto")
        .about("A transparent tcp relay through rotating upstream proxies.")
        .disable_help_flag(true)
        .disable_version_flag(true);

    let app = add_flags(app);
    let app = add_options(app);
    let app = add_global_options(app);

    let mut help = app.clone();
    let matches = app.get_matches();

    if matches.contains_id("help") {
        let _ = help.print_help();
        std::process::exit(0);
    }

    if matches.contains_id("version") {
        println!("rto {} {}", crate::VERSION, crate::consts::FEATURES);
        std::process::exit(0);
    }

    #[cfg(unix)]
    if matches.contains_id("daemon") {
        crate::utils::daemonize();
    }

    match matches.get_one::<String>("config").cloned() {
        Some(config) => CmdInput::Config(config, matches),
        None => CmdInput::Opts(matches),
    }
}

fn add_flags(app: Command) -> Command {
    app.next_help_heading("FLAGS").args(&[
        Arg::new("help")
            .short('h')
            .long("help")
            .help("show help")
            .display_order(0),
        Arg::new("version")
            .short('v')
            .long("version")
            .help("show version")
            .display_order(1),
        Arg::new("daemon")
            .short('d')
            .long("daemon")
            .help("run as a unix daemon")
            .display_order(2),
    ])
}

fn add_options(app: Command) -> Command {
    app.next_help_heading("OPTIONS").args(&[
        Arg::new("config")
            .short('c')
            .long("config")
            .help("use config file")
            .value_name("path")
            .takes_value(true)
            .display_order(0),
        Arg::new("port")
            .short('p')
            .long("port")
            .help("listen port")
            .value_name("port")
            .takes_value(true)
            .display_order(1),
        Arg::new("proxy_type")
            .short('t')
            .long("type")
            .help("upstream proxy type")
            .value_name("http|socks")
            .takes_value(true)
            .display_order(2),
    ])
}

fn add_global_options(app: Command) -> Command {
    app.next_help_heading("LOG OPTIONS").args(&[
        Arg::new("log_level")
            .long("log-level")
            .help("override log level")
            .value_name("level")
            .takes_value(true)
            .display_order(0),
        Arg::new("log_output")
            .long("log-output")
            .help("override log output")
            .value_name("path")
            .takes_value(true)
            .display_order(1),
    ])
}
