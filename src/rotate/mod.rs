use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::time::sleep;

mod fetch;
mod check;

use crate::consts::{FETCH_TIMEOUT, REFRESH_INTERVAL, RETRY_INTERVAL};
use crate::store::ProxyStore;
use crate::utils::{ProxyCandidate, ProxyKind};

/// Background worker keeping the store populated. Every failure along
/// the way counts the same and retries after the short interval; a
/// published proxy earns the long refresh interval instead.
pub async fn refresh(store: Arc<ProxyStore>, kind: ProxyKind) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT))
        .build()
        .unwrap_or_else(|e| panic!("failed to build http client: {}", &e));

    loop {
        let interval = if refresh_once(&client, &store, kind).await {
            REFRESH_INTERVAL
        } else {
            RETRY_INTERVAL
        };

        sleep(Duration::from_secs(interval)).await;
    }
}

async fn refresh_once(client: &reqwest::Client, store: &ProxyStore, kind: ProxyKind) -> bool {
    let raw = match fetch::candidate(client, kind).await {
        Ok(x) => x,
        Err(e) => {
            warn!("[rotate]failed to fetch candidate: {}", &e);
            return false;
        }
    };

    let candidate = match raw.trim().parse::<ProxyCandidate>() {
        Ok(x) => x,
        Err(e) => {
            warn!("[rotate]bad candidate {:?}: {}", raw.trim(), e);
            return false;
        }
    };

    if !check::validate(&candidate, kind).await {
        return false;
    }

    info!("[rotate]active proxy: {}", &candidate);
    store.publish(candidate);

    true
}
