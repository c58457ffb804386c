use std::fmt::{Display, Formatter};
use std::io::Result;
use std::time::Duration;

use log::debug;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{ReadHalf, WriteHalf};
use tokio::time::timeout as timeoutfut;

use crate::consts::CONNECT_TIMEOUT;
use crate::utils::ProxyCandidate;

const BUFFER_SIZE: usize = 0x4000;

#[derive(Clone, Copy)]
enum Direction {
    Upload,
    Download,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Direction::*;
        match self {
            Upload => write!(f, "upload"),
            Download => write!(f, "download"),
        }
    }
}

/// Relay raw bytes between the client and the snapshot proxy until one
/// direction finishes. The first EOF or error wins; the other direction
/// is abandoned where it stands, in-flight data included, and both
/// connections close on return.
pub async fn tunnel(mut client: TcpStream, proxy: ProxyCandidate) -> Result<(u64, u64)> {
    let timeout = Duration::from_secs(CONNECT_TIMEOUT);
    let mut upstream =
        timeoutfut(timeout, TcpStream::connect((proxy.host.as_str(), proxy.port))).await??;

    client.set_nodelay(true)?;
    upstream.set_nodelay(true)?;

    let (mut rc, mut wc) = client.split();
    let (mut ru, mut wu) = upstream.split();

    let mut up: u64 = 0;
    let mut dl: u64 = 0;

    use Direction::{Upload, Download};

    let res = tokio::select! {
        r = copy(&mut rc, &mut wu, &mut up, Upload) => r,
        r = copy(&mut ru, &mut wc, &mut dl, Download) => r,
    };

    res.map(|_| (up, dl))
}

async fn copy(
    r: &mut ReadHalf<'_>,
    w: &mut WriteHalf<'_>,
    count: &mut u64,
    direction: Direction,
) -> Result<()> {
    let mut buf = vec![0u8; BUFFER_SIZE];
    let mut n: usize;
    loop {
        n = r.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        w.write_all(&buf[..n]).await?;
        w.flush().await?;
        *count += n as u64;
    }

    debug!("tcp tunnel cut, direction: {}", direction);

    Ok(())
}
