// tests/export_e2e.rs
//
// Full round trips against a loopback HTTP/1.0 server: roster fetch, and
// export with both a binary success response and a JSON error response.
//
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use dst_roster::config::options::{ExportOptions, ServerOptions};
use dst_roster::{export, roster};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dst_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serve exactly one request: read it fully (headers + Content-Length body),
/// write `response`, close. The raw request bytes come back on the channel.
fn one_shot_server(response: Vec<u8>) -> (ServerOptions, mpsc::Receiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(&response).unwrap();
        stream.flush().unwrap();
        drop(stream); // HTTP/1.0: closing the socket ends the response
        let _ = tx.send(request);
    });

    (ServerOptions { host: "127.0.0.1".into(), port }, rx)
}

/// Read headers byte-wise up to the blank line, then the body per
/// Content-Length. The client keeps its write half open, so reading to EOF
/// here would deadlock both sides.
fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut byte = [0u8; 1];
    while !buf.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(0) => return buf,
            Ok(_) => buf.push(byte[0]),
            Err(_) => return buf,
        }
    }
    let head = String::from_utf8_lossy(&buf).to_ascii_lowercase();
    let len = head.lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    if len > 0 {
        let mut body = vec![0u8; len];
        stream.read_exact(&mut body).unwrap();
        buf.extend_from_slice(&body);
    }
    buf
}

fn http_response(status_line: &str, body: &[u8]) -> Vec<u8> {
    let mut out = format!(
        "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line, body.len()
    ).into_bytes();
    out.extend_from_slice(body);
    out
}

/* ---------------- Roster fetch ---------------- */

#[test]
fn fetch_parses_served_csv() {
    let csv = "Nguyen Van A,M001,member\nTran Thi B,M002,admin\n";
    let (server, rx) = one_shot_server(http_response("HTTP/1.0 200 OK", csv.as_bytes()));

    let roster = roster::fetch(&server).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.members[1].name, "Tran Thi B");

    let request = String::from_utf8(rx.recv().unwrap()).unwrap();
    assert!(request.starts_with("GET /static/data.csv HTTP/1.0\r\n"));
}

#[test]
fn fetch_rejects_empty_body() {
    let (server, _rx) = one_shot_server(http_response("HTTP/1.0 200 OK", b"  \n"));
    let err = roster::fetch(&server).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn fetch_rejects_http_error() {
    let (server, _rx) = one_shot_server(http_response("HTTP/1.0 404 Not Found", b"nope"));
    assert!(roster::fetch(&server).is_err());
}

/* ---------------- Export ---------------- */

#[test]
fn export_posts_codes_and_writes_workbook() {
    // Not a real workbook, but the client must treat any 2xx body as opaque
    // bytes and write them through untouched.
    let sheet: &[u8] = b"PK\x03\x04 fake xlsx bytes \xff\x00\x01";
    let (server, rx) = one_shot_server(http_response("HTTP/1.0 200 OK", sheet));

    let dir = tmp_dir("ok");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let selected = vec!["M002".to_string()];
    let path = export::export_selection(&server, &opts, &selected, "KITHI25").unwrap();

    assert_eq!(path.file_name().unwrap().to_str().unwrap(), "DST_KITHI25.xlsx");
    assert_eq!(fs::read(&path).unwrap(), sheet);

    let request = String::from_utf8_lossy(&rx.recv().unwrap()).into_owned();
    assert!(request.starts_with("POST /export HTTP/1.0\r\n"));
    assert!(request.contains("Content-Type: application/json"));
    assert!(request.contains(r#""M002""#));
    assert!(request.contains(r#""exam_code":"KITHI25""#));
}

#[test]
fn export_surfaces_server_error_message() {
    let body = br#"{"error":"Khong tim thay hoc vien"}"#;
    let (server, _rx) = one_shot_server(http_response("HTTP/1.0 400 Bad Request", body));

    let dir = tmp_dir("err");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let selected = vec!["M999".to_string()];
    let err = export::export_selection(&server, &opts, &selected, "KITHI25").unwrap_err();
    assert_eq!(err.to_string(), "Khong tim thay hoc vien");

    // nothing may be written on failure
    assert!(fs::read_dir(&dir).unwrap().next().is_none());
}

#[test]
fn export_trims_exam_code_before_filename_and_payload() {
    let (server, rx) = one_shot_server(http_response("HTTP/1.0 200 OK", b"bytes"));

    let dir = tmp_dir("trim");
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.to_str().unwrap());

    let selected = vec!["M001".to_string()];
    let path = export::export_selection(&server, &opts, &selected, "  K7 ").unwrap();
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), "DST_K7.xlsx");

    let request = String::from_utf8_lossy(&rx.recv().unwrap()).into_owned();
    assert!(request.contains(r#""exam_code":"K7""#));
}
