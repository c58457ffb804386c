use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, info, warn, error};
use futures::future::join_all;

use tokio::net::TcpListener;

mod tcp;

use crate::rotate;
use crate::store::ProxyStore;
use crate::utils::ProxyKind;

/// Spawn the refresh worker and the listener, then wait for either the
/// workers (which never finish on their own) or a ctrl-c.
pub async fn run(port: u16, kind: ProxyKind) {
    let store = Arc::new(ProxyStore::new());

    let mut workers = Vec::with_capacity(2);
    workers.push(tokio::spawn(rotate::refresh(store.clone(), kind)));
    workers.push(tokio::spawn(listen(store, port)));

    tokio::select! {
        _ = join_all(workers) => {}
        _ = tokio::signal::ctrl_c() => info!("ctrl-c, shutting down"),
    }
}

pub async fn listen(store: Arc<ProxyStore>, port: u16) {
    let laddr = SocketAddr::from(([0, 0, 0, 0], port));

    let lis = TcpListener::bind(laddr)
        .await
        .unwrap_or_else(|e| panic!("unable to bind {}: {}", &laddr, &e));

    info!("[tcp]listening on {}", &laddr);

    loop {
        let (stream, addr) = match lis.accept().await {
            Ok(x) => x,
            Err(e) => {
                error!("[tcp]failed to accept: {}", &e);
                continue;
            }
        };

        // snapshot once; the tunnel keeps it for its whole lifetime
        let proxy = match store.read() {
            Some(x) => x,
            None => {
                warn!("[tcp]{} dropped, no active proxy", &addr);
                continue;
            }
        };

        let msg = format!("{} => {}", &addr, &proxy);
        info!("[tcp]{}", &msg);

        tokio::spawn(async move {
            match tcp::tunnel(stream, proxy).await {
                Ok((up, dl)) => debug!(
                    "[tcp]{} finish, upload: {}b, download: {}b",
                    msg, up, dl
                ),
                Err(e) => warn!("[tcp]{}, error: {}", msg, e),
            }
        });
    }
}
