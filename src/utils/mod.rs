mod types;
pub use types::*;

#[cfg(unix)]
pub fn daemonize() {
    use std::env::current_dir;
    use daemonize::Daemonize;

    let pwd = current_dir().unwrap().canonicalize().unwrap();
    let daemon = Daemonize::new()
        .umask(0)
        .working_directory(pwd)
        .exit_action(|| println!("rto is running in the background"));

    daemon
        .start()
        .unwrap_or_else(|e| eprintln!("failed to daemonize, {}", e));
}
