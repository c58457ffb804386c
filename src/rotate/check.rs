use std::time::Duration;

use log::{debug, info};
use serde_json::Value;

use crate::consts::{ECHO_URL, USER_AGENT, VALIDATE_TIMEOUT};
use crate::utils::{ProxyCandidate, ProxyKind};

/// Live round-trip through the candidate. True iff the echo endpoint,
/// reached via the candidate as upstream proxy, reports the candidate's
/// own host as the egress address. Transport failures of any shape are
/// an ordinary false, never an error.
pub async fn validate(candidate: &ProxyCandidate, kind: ProxyKind) -> bool {
    let body = match echo_through(candidate, kind).await {
        Ok(x) => x,
        Err(e) => {
            info!("[rotate]candidate {} unreachable: {}", candidate, &e);
            return false;
        }
    };

    echo_matches(candidate, &body)
}

async fn echo_through(candidate: &ProxyCandidate, kind: ProxyKind) -> Result<Value, reqwest::Error> {
    let proxy = reqwest::Proxy::all(format!("{}://{}", kind.scheme(), candidate))?;

    let client = reqwest::Client::builder()
        .proxy(proxy)
        .timeout(Duration::from_secs(VALIDATE_TIMEOUT))
        .build()?;

    client
        .get(ECHO_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?
        .json()
        .await
}

// exact string equality against the echoed egress host
fn echo_matches(candidate: &ProxyCandidate, body: &Value) -> bool {
    match body.get("proxy").and_then(Value::as_str) {
        Some(host) if host == candidate.host => {
            debug!("[rotate]candidate {} confirmed", candidate);
            true
        }
        Some(host) => {
            info!("[rotate]candidate {} rejected, egress seen as {}", candidate, host);
            false
        }
        None => {
            info!("[rotate]candidate {} rejected, malformed echo response", candidate);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate() -> ProxyCandidate {
        "203.0.113.5:1080".parse().unwrap()
    }

    #[test]
    fn accept_matching_echo() {
        let body = json!({ "proxy": "203.0.113.5" });
        assert!(echo_matches(&candidate(), &body));
    }

    #[test]
    fn reject_mismatching_echo() {
        let body = json!({ "proxy": "198.51.100.9" });
        assert!(!echo_matches(&candidate(), &body));
    }

    #[test]
    fn reject_echo_without_proxy_field() {
        let body = json!({ "ip": "203.0.113.5" });
        assert!(!echo_matches(&candidate(), &body));
    }

    #[test]
    fn reject_non_string_echo() {
        let body = json!({ "proxy": 1080 });
        assert!(!echo_matches(&candidate(), &body));
    }
}
