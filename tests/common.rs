#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub fn gha() -> Command {
    cargo_bin_cmd!("github-activity")
}

/// A one-shot HTTP server bound to an OS-assigned local port.
///
/// It answers exactly one request with the canned status and body, then
/// hands back the request line it saw so tests can assert on the path.
pub struct MockServer {
    url: String,
    handle: JoinHandle<String>,
}

impl MockServer {
    pub fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            // Drain headers up to the blank line.
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).expect("read header");
                if n == 0 || line == "\r\n" || line == "\n" {
                    break;
                }
            }

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Status",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().ok();

            request_line.trim_end().to_string()
        });

        Self {
            url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the single request and return its request line,
    /// e.g. `GET /users/octocat/events HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().expect("mock server thread panicked")
    }
}

/// Reserve a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn watch_event(repo: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "type": "WatchEvent",
        "repo": { "id": 1, "name": repo, "url": format!("https://api.github.com/repos/{}", repo) },
        "payload": { "action": "started" },
        "public": true,
        "created_at": created_at
    })
}
