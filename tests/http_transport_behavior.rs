//! Behavior tests for the reqwest transport against a throwaway local server.
//!
//! Each test binds a `TcpListener` on 127.0.0.1, answers (or refuses to
//! answer) a single request, and checks what `QuoteClient` reports.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use quoteline_core::{ClientConfig, QuoteClient, QuoteError, ReqwestHttpClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response and hand back the request line it saw.
async fn serve_once(status_line: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0_u8; 4096];
        let read = socket.read(&mut buf).await.expect("read request");
        let request = String::from_utf8_lossy(&buf[..read]).into_owned();

        let response = format!(
            "{status_line}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        request.lines().next().unwrap_or_default().to_owned()
    });

    (addr, handle)
}

fn client_for(addr: SocketAddr, timeout_ms: u64) -> QuoteClient {
    let config = ClientConfig::default()
        .with_base_url(format!("http://{addr}/d/quotes.csv"))
        .with_timeout_ms(timeout_ms);
    // Proxy variables from the environment must not capture loopback traffic.
    let transport = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("reqwest client");
    QuoteClient::with_http_client(config, Arc::new(ReqwestHttpClient::with_client(transport)))
        .expect("valid config")
}

#[tokio::test]
async fn fetches_and_parses_over_real_http() {
    let (addr, server) = serve_once(
        "HTTP/1.1 200 OK",
        "\"GE\",\"General Electric Company Common\",26.47,26.10,26.02,-0.45,\"-1.70%\",26.00,26.24,\"7/8/2015\",\"10:06am\"\n",
    )
    .await;

    let batch = client_for(addr, 2_000)
        .get_quotes(&["GE"])
        .await
        .expect("fetch should succeed");

    assert_eq!(batch.len(), 1);
    let quote = batch.quote_at(0).expect("one row");
    assert_eq!(quote.symbol, "GE");
    assert_eq!(quote.change_percent, -1.70);

    let request_line = server.await.expect("server task");
    assert_eq!(
        request_line,
        "GET /d/quotes.csv?s=GE&f=snpol1c1p2ghd1t1 HTTP/1.1"
    );
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let (addr, server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom").await;

    let result = client_for(addr, 2_000).get_quotes(&["GE"]).await;

    assert_eq!(result, Err(QuoteError::Status { status: 500 }));
    server.await.expect("server task");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let error = client_for(addr, 2_000)
        .get_quotes(&["GE"])
        .await
        .expect_err("nothing is listening");

    assert!(
        matches!(error, QuoteError::Transport { .. }),
        "unexpected error: {error:?}"
    );
}

#[tokio::test]
async fn silent_server_trips_the_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let error = client_for(addr, 200)
        .get_quotes(&["GE"])
        .await
        .expect_err("server never answers");

    assert!(
        matches!(error, QuoteError::Timeout { .. }),
        "unexpected error: {error:?}"
    );
    server.abort();
}
