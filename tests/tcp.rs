use std::sync::Arc;
use std::time::Duration;

use tokio::net::{TcpStream, TcpListener};
use tokio::time::{sleep, timeout};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use rto::relay;
use rto::store::ProxyStore;

#[tokio::test]
async fn tcp() {
    let _ = env_logger::try_init();

    let store = Arc::new(ProxyStore::new());
    store.publish("127.0.0.1:20100".parse().unwrap());

    tokio::spawn(relay::listen(store, 10100));

    let task1 = async {
        sleep(Duration::from_millis(500)).await;
        let mut stream = TcpStream::connect("127.0.0.1:10100").await.unwrap();

        let mut buf = vec![0; 32];

        for _ in 0..20 {
            stream.write(b"Ping Ping Ping").await.unwrap();
            let n = stream.read(&mut buf).await.unwrap();
            log::debug!("a got: {:?}", std::str::from_utf8(&buf[..n]).unwrap());
            assert_eq!(b"Pong Pong Pong", &buf[..n]);
        }
    };

    let task2 = async {
        let lis = TcpListener::bind("127.0.0.1:20100").await.unwrap();
        let (mut stream, _) = lis.accept().await.unwrap();

        let mut buf = vec![0; 32];

        for _ in 0..20 {
            let n = stream.read(&mut buf).await.unwrap();
            log::debug!("b got: {:?}", std::str::from_utf8(&buf[..n]).unwrap());
            assert_eq!(b"Ping Ping Ping", &buf[..n]);
            stream.write(b"Pong Pong Pong").await.unwrap();
        }
    };

    tokio::join!(task1, task2);
}

// upstream hangs up first; the client side must observe eof quickly
#[tokio::test]
async fn tcp_upstream_eof_closes_client() {
    let _ = env_logger::try_init();

    let store = Arc::new(ProxyStore::new());
    store.publish("127.0.0.1:20101".parse().unwrap());

    tokio::spawn(relay::listen(store, 10101));

    let task1 = async {
        sleep(Duration::from_millis(500)).await;
        let mut stream = TcpStream::connect("127.0.0.1:10101").await.unwrap();

        stream.write(b"hello").await.unwrap();

        let mut buf = vec![0; 32];
        let n = timeout(Duration::from_secs(2), stream.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(n, 0);
    };

    let task2 = async {
        let lis = TcpListener::bind("127.0.0.1:20101").await.unwrap();
        let (mut stream, _) = lis.accept().await.unwrap();

        let mut buf = vec![0; 32];
        let n = stream.read(&mut buf).await.unwrap();
        assert_eq!(b"hello", &buf[..n]);

        // drop without replying
    };

    tokio::join!(task1, task2);
}

// client hangs up first; the upstream side must observe eof quickly
#[tokio::test]
async fn tcp_client_eof_closes_upstream() {
    let _ = env_logger::try_init();

    let store = Arc::new(ProxyStore::new());
    store.publish("127.0.0.1:20102".parse().unwrap());

    tokio::spawn(relay::listen(store, 10102));

    let task1 = async {
        sleep(Duration::from_millis(500)).await;
        let mut stream = TcpStream::connect("127.0.0.1:10102").await.unwrap();

        stream.write(b"bye").await.unwrap();

        // drop without reading
    };

    let task2 = async {
        let lis = TcpListener::bind("127.0.0.1:20102").await.unwrap();
        let (mut stream, _) = lis.accept().await.unwrap();

        let mut buf = vec![0; 32];
        let n = stream.read(&mut buf).await.unwrap();
        assert_eq!(b"bye", &buf[..n]);

        let n = timeout(Duration::from_secs(2), stream.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(n, 0);
    };

    tokio::join!(task1, task2);
}

// the published proxy is dead; clients are cut off without forwarding
// and the listener keeps accepting
#[tokio::test]
async fn tcp_dead_upstream_closes_client() {
    let _ = env_logger::try_init();

    let store = Arc::new(ProxyStore::new());

    // nothing listens on this port
    store.publish("127.0.0.1:20103".parse().unwrap());

    tokio::spawn(relay::listen(store, 10103));

    sleep(Duration::from_millis(500)).await;

    let mut buf = vec![0; 32];

    let mut stream = TcpStream::connect("127.0.0.1:10103").await.unwrap();
    let n = timeout(Duration::from_secs(7), stream.read(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(n, 0);

    // the failed tunnel must not take the listener down with it
    let mut stream = TcpStream::connect("127.0.0.1:10103").await.unwrap();
    let n = timeout(Duration::from_secs(7), stream.read(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(n, 0);
}
