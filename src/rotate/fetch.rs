use log::debug;

use crate::utils::ProxyKind;

// one plain-text "host:port" per call
pub async fn candidate(client: &reqwest::Client, kind: ProxyKind) -> Result<String, reqwest::Error> {
    let raw = client
        .get(kind.candidate_url())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    debug!("[rotate]source answered {:?}", raw.trim());

    Ok(raw)
}
