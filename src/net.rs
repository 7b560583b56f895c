// src/net.rs
// Minimal HTTP over plain TCP, no TLS.
// Uses HTTP/1.0 so the server closes the connection at the end (no chunked
// transfer). The export response is a binary workbook, so bodies are bytes.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(15);

/// A parsed HTTP response: status code plus raw body bytes.
/// Callers that expect text convert the body themselves.
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Perform a plain HTTP GET request and return the response body as a String.
/// Any non-2xx status is an error.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: dst_roster/0.1\r\nConnection: close\r\n\r\n",
        path, host
    );
    let resp = exchange(host, port, req.as_bytes())?;
    if !resp.is_success() {
        return Err(format!("HTTP error: {} {}{}", resp.status, host, path).into());
    }
    Ok(resp.body_text())
}

/// POST a JSON document and return the full response, whatever the status.
/// The caller inspects `status`; a failed export carries a JSON error body
/// that must be surfaced, not discarded.
pub fn http_post_json(
    host: &str,
    port: u16,
    path: &str,
    json: &str,
) -> Result<Response, Box<dyn std::error::Error>> {
    let req = format!(
        "POST {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: dst_roster/0.1\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        path, host, json.len(), json
    );
    exchange(host, port, req.as_bytes())
}

/// Connect, send the raw request, read to EOF, split status line and body.
fn exchange(host: &str, port: u16, request: &[u8]) -> Result<Response, Box<dyn std::error::Error>> {
    let mut stream = TcpStream::connect((host, port))?;
    stream.set_read_timeout(Some(TIMEOUT))?;
    stream.set_write_timeout(Some(TIMEOUT))?;

    stream.write_all(request)?;
    stream.flush()?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;

    let status = parse_status(&buf).ok_or("Malformed HTTP status line")?;
    let body_idx = find_header_end(&buf).ok_or("Malformed HTTP response")?;
    Ok(Response { status, body: buf[body_idx..].to_vec() })
}

/// "HTTP/1.0 200 OK" → 200. Only the first line is looked at.
fn parse_status(resp: &[u8]) -> Option<u16> {
    let line_end = resp.windows(2).position(|w| w == b"\r\n")?;
    let line = String::from_utf8_lossy(&resp[..line_end]).into_owned();
    line.split_whitespace().nth(1)?.parse().ok()
}

/// Byte offset just past the blank line separating headers from body.
fn find_header_end(resp: &[u8]) -> Option<usize> {
    resp.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}
