#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::config::Config;
use rtimesheet::delivery::{Delivered, FileDelivery};
use rtimesheet::errors::AppResult;
use rtimesheet::models::TimeEntry;
use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// CLI command isolated from the user's environment and config file.
pub fn rts(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env_remove("RTIMESHEET_TOKEN")
        .env_remove("RTIMESHEET_API_URI")
        .env_remove("RTIMESHEET_LOG")
        .arg("--config")
        .arg(config_dir.join("rtimesheet.conf"));
    cmd
}

/// Entries used by most tests (same shape as the API payload).
pub fn sample_entries() -> Vec<TimeEntry> {
    vec![
        TimeEntry::new(2.0, "2020-01-02", Some("A")),
        TimeEntry::new(3.0, "2020-01-01", Some("A")),
        TimeEntry::new(1.0, "2020-01-01", None),
    ]
}

pub fn sample_json() -> String {
    r#"[
        {"hours": 2, "work_date": "2020-01-02", "project": "A"},
        {"hours": 3, "work_date": "2020-01-01", "project": "A"},
        {"hours": 1, "work_date": "2020-01-01", "project": null}
    ]"#
    .to_string()
}

pub fn config_for(base: &str, token: &str) -> Config {
    Config {
        api_uri: Some(base.to_string()),
        token: Some(token.to_string()),
        ..Config::default()
    }
}

// ---------------------------------------------------------------------------
// Delivery that only records what it was given
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingDelivery {
    pub calls: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FileDelivery for RecordingDelivery {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> AppResult<Delivered> {
        self.calls
            .borrow_mut()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(Delivered::Stdout { bytes: bytes.len() })
    }
}

// ---------------------------------------------------------------------------
// Minimal HTTP/1.1 server answering every request with a fixed response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct MockServer {
    /// e.g. "http://127.0.0.1:12345/"
    pub base: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("server received no request")
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start_server(status: u16, content_type: &str, body: &[u8]) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let captured = Arc::clone(&requests);
    let content_type = content_type.to_string();
    let body = body.to_vec();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, status, &content_type, &body, &captured);
        }
    });

    MockServer {
        base: format!("http://127.0.0.1:{port}/"),
        requests,
    }
}

/// Address where nothing listens (connection refused).
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/report")
}

fn handle(
    mut stream: TcpStream,
    status: u16,
    content_type: &str,
    body: &[u8],
    captured: &Arc<Mutex<Vec<CapturedRequest>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    captured.lock().unwrap().push(request);

    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let head = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut data: Vec<u8> = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let path = first.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);

    let mut body = data[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&buf[..n]);
    }

    Some(CapturedRequest {
        method,
        path,
        headers,
        body,
    })
}
