//! Shared test helpers: a local stand-in for the Ringba API and response
//! body builders.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Minimal blocking HTTP/1.1 server that answers canned JSON per request
/// path (query string ignored for routing). It runs on its own thread for
/// the life of the test process and records every raw request so tests can
/// assert on headers and query strings.
pub struct MockApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub fn spawn(routes: HashMap<String, (u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle_connection(stream, &routes, &log);
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw request texts, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(
    mut stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    log: &Arc<Mutex<Vec<String>>>,
) {
    stream.set_read_timeout(Some(Duration::from_secs(2))).ok();

    // GET requests carry no body; read until the header terminator.
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    while !raw.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&raw).to_string();
    log.lock().unwrap().push(request.clone());

    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(|target| target.split('?').next().unwrap_or(target).to_string())
        .unwrap_or_default();

    let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or((404, "{}".to_string()));
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Response body for one resource kind: the entity list under `body_key`,
/// plus an optional top-level `stats` map.
pub fn collection_body(body_key: &str, entities: Value, stats: Option<Value>) -> String {
    let mut body = json!({ body_key: entities });
    if let Some(stats) = stats {
        body["stats"] = stats;
    }
    body.to_string()
}

/// Routes covering all five resource kinds with empty collections, keyed by
/// `/{account_id}/{path}`. Tests overwrite the kinds they care about.
pub fn empty_routes(account_id: &str) -> HashMap<String, (u16, String)> {
    let kinds = [
        ("publishers", "publishers"),
        ("buyers", "buyers"),
        ("pingtrees", "pingTrees"),
        ("pingtreetargets", "pingTreeTargets"),
        ("targets", "targets"),
    ];
    kinds
        .iter()
        .map(|(path, body_key)| {
            (
                format!("/{account_id}/{path}"),
                (200, collection_body(body_key, json!([]), None)),
            )
        })
        .collect()
}
