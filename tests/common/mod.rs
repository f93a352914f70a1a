//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use fundraising_proxy::config::{ProxyConfig, UpstreamConfig};
use fundraising_proxy::http::HttpServer;
use fundraising_proxy::lifecycle::Shutdown;
use fundraising_proxy::proxy::ProxyCacheHandler;
use fundraising_proxy::upstream::UpstreamClient;

pub const SAMPLE_UPSTREAM_BODY: &str =
    r#"{"data":{"id":7,"target_amount":1000,"total_amount":"532.10","title":"Run"}}"#;
pub const SAMPLE_PROXY_BODY: &str = r#"{"target_amount":1000,"total_amount":"532.10"}"#;

/// What the mock upstream does with the next connection.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Reply {
    /// Respond with the given status and body.
    Respond(u16, String),
    /// Sleep, then respond.
    Delayed(Duration, u16, String),
    /// Close the socket without writing a response.
    Hangup,
}

/// Programmable raw-TCP upstream that counts calls and records the site id header.
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<AtomicU32>,
    reply: Arc<Mutex<Reply>>,
    site_ids: Arc<Mutex<Vec<Option<String>>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let calls = Arc::new(AtomicU32::new(0));
        let reply = Arc::new(Mutex::new(reply));
        let site_ids = Arc::new(Mutex::new(Vec::new()));

        let (c, r, s) = (calls.clone(), reply.clone(), site_ids.clone());
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let (calls, reply, site_ids) = (c.clone(), r.clone(), s.clone());
                tokio::spawn(async move {
                    let mut reader = BufReader::new(socket);
                    let mut site_id = None;
                    let mut line = String::new();
                    loop {
                        line.clear();
                        match reader.read_line(&mut line).await {
                            Ok(0) | Err(_) => return,
                            Ok(_) => {}
                        }
                        let trimmed = line.trim_end();
                        if trimmed.is_empty() {
                            break;
                        }
                        if let Some((name, value)) = trimmed.split_once(':') {
                            if name.eq_ignore_ascii_case("x-site-id") {
                                site_id = Some(value.trim().to_string());
                            }
                        }
                    }

                    calls.fetch_add(1, Ordering::SeqCst);
                    site_ids.lock().unwrap().push(site_id);

                    let current = reply.lock().unwrap().clone();
                    let (status, body) = match current {
                        Reply::Respond(status, body) => (status, body),
                        Reply::Delayed(delay, status, body) => {
                            tokio::time::sleep(delay).await;
                            (status, body)
                        }
                        Reply::Hangup => return,
                    };

                    let status_text = match status {
                        200 => "200 OK",
                        404 => "404 Not Found",
                        500 => "500 Internal Server Error",
                        503 => "503 Service Unavailable",
                        _ => "200 OK",
                    };
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_text,
                        body.len(),
                        body
                    );
                    let mut socket = reader.into_inner();
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            addr,
            calls,
            reply,
            site_ids,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/actions/test", self.addr)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn site_ids(&self) -> Vec<Option<String>> {
        self.site_ids.lock().unwrap().clone()
    }
}

/// A proxy running on an ephemeral loopback port.
pub struct TestProxy {
    pub addr: SocketAddr,
    pub handler: Arc<ProxyCacheHandler>,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestProxy {
    pub async fn start(upstream_url: &str, ttl: Duration) -> Self {
        let mut config = ProxyConfig::default();
        config.listener.host = "127.0.0.1".to_string();
        config.listener.port = "0".to_string();
        config.upstream = UpstreamConfig {
            url: upstream_url.to_string(),
            site_id_header: "x-site-id".to_string(),
            site_id: "test-site".to_string(),
        };
        config.cache.ttl_ms = ttl.as_millis() as u64;

        let upstream = UpstreamClient::with_http_client(&config.upstream, client());
        let handler = ProxyCacheHandler::new(upstream, config.cache.ttl());
        let server = HttpServer::with_handler(config, handler);
        let handler = server.handler();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Shutdown::new();
        let server_shutdown: broadcast::Receiver<()> = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        Self {
            addr,
            handler,
            shutdown,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// HTTP client that never routes loopback traffic through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
