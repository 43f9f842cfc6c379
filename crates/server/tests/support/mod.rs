#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use sunrise_server::{build_router, AppState};
use sunrise_storage::{StoreOptions, SubmissionStore};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<SubmissionStore>,
}

pub async fn spawn_server() -> TestServer {
    spawn_with_state(AppState::new(Arc::new(SubmissionStore::new()))).await
}

pub async fn spawn_with_limit(max_records: usize) -> TestServer {
    let store = Arc::new(SubmissionStore::with_options(
        StoreOptions::new().max_records_per_table(max_records),
    ));
    spawn_with_state(AppState::new(store)).await
}

pub async fn spawn_with_state(state: AppState) -> TestServer {
    let store = state.store().clone();
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    TestServer { addr, store }
}

pub async fn send_raw(addr: SocketAddr, path: &str) -> (u16, String, String) {
    send_raw_with_method(addr, "GET", path, &[], None).await
}

pub async fn post_json(addr: SocketAddr, path: &str, body: &str) -> (u16, String, String) {
    send_raw_with_method(addr, "POST", path, &[], Some(body)).await
}

pub async fn send_raw_with_method(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(payload) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    if let Some(payload) = body {
        req.push_str(payload);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub fn json_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("json body")
}

/// Case-insensitive header lookup in a raw response head
pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
