//! Minimal HTTP/1.1 server that accepts raw-body uploads for integration tests.
//!
//! Reads one request per connection (headers plus `Content-Length` body),
//! hands it to the test through a channel, then answers with a canned
//! response after an optional delay.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// A well-formed HTTP response with this status and body.
    Status { code: u16, body: String },
    /// Bytes written verbatim instead of an HTTP response.
    Raw(Vec<u8>),
    /// Close the connection without answering.
    Hangup,
}

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub reply: Reply,
    /// Wait this long before replying.
    pub delay: Duration,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            reply: Reply::Status {
                code: 201,
                body: r#"{"ok":true}"#.to_string(),
            },
            delay: Duration::ZERO,
        }
    }
}

/// A request as the server saw it.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    /// Header values decoded as Latin-1, one char per byte.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    raw_headers: Vec<(String, Vec<u8>)>,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The header value exactly as the bytes arrived, surrounding blanks trimmed.
    pub fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        self.raw_headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice())
    }
}

pub struct UploadServer {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:12345`.
    pub base_url: String,
    requests: mpsc::Receiver<ReceivedRequest>,
}

impl UploadServer {
    /// Waits for the next captured request.
    pub fn next_request(&self) -> ReceivedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server received no request")
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: ServerOptions) -> UploadServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let tx = tx.clone();
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts, &tx));
        }
    });
    UploadServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests: rx,
    }
}

/// Returns a URL on a local port with nothing listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, opts: &ServerOptions, tx: &mpsc::Sender<ReceivedRequest>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let _ = tx.send(request);

    if !opts.delay.is_zero() {
        thread::sleep(opts.delay);
    }
    match &opts.reply {
        Reply::Status { code, body } => {
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                code,
                reason(*code),
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Reply::Raw(bytes) => {
            let _ = stream.write_all(bytes);
        }
        Reply::Hangup => {}
    }
}

fn read_request(stream: &mut TcpStream) -> Option<ReceivedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    let header_end = loop {
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos;
        }
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let mut lines = buf[..header_end].split(|&b| b == b'\n').map(trim_cr);
    let request_line = latin1(lines.next()?);
    let mut request_line = request_line.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let raw_headers: Vec<(String, Vec<u8>)> = lines
        .filter_map(|line| {
            let colon = line.iter().position(|&b| b == b':')?;
            let value = line[colon + 1..].trim_ascii();
            Some((latin1(&line[..colon]).trim().to_string(), value.to_vec()))
        })
        .collect();
    let headers: Vec<(String, String)> = raw_headers
        .iter()
        .map(|(k, v)| (k.clone(), latin1(v)))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
        }
    }

    Some(ReceivedRequest {
        method,
        path,
        headers,
        body,
        raw_headers,
    })
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
