// tests/export_payload.rs
//
// Payload shape, output path derivation, and the fail-fast preconditions
// that must never reach the network.
//
use dst_roster::config::options::{ExportOptions, ServerOptions};
use dst_roster::export::{self, ExportRequest};

#[test]
fn payload_serializes_selected_codes_and_exam_code() {
    let req = ExportRequest {
        selected: vec!["M001".into(), "M002".into()],
        exam_code: "KITHI25".into(),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"selected":["M001","M002"],"exam_code":"KITHI25"}"#);
}

#[test]
fn server_error_body_is_surfaced() {
    let msg = export::server_error_message(r#"{"error":"Thiếu dữ liệu"}"#.as_bytes(), 400);
    assert_eq!(msg, "Thiếu dữ liệu");
}

#[test]
fn malformed_error_body_falls_back_to_status() {
    let msg = export::server_error_message(b"<html>oops</html>", 500);
    assert_eq!(msg, "export failed (HTTP 500)");
}

#[test]
fn workbook_path_is_prefix_exam_extension() {
    let opts = ExportOptions::default();
    let path = opts.workbook_path("KITHI25");
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), "DST_KITHI25.xlsx");
    assert_eq!(path.parent().unwrap().to_str().unwrap(), "out");
}

#[test]
fn set_dir_replaces_the_output_directory() {
    let mut opts = ExportOptions::default();
    opts.set_dir("exports/season1");
    let path = opts.workbook_path("K1");
    assert!(path.ends_with(["exports", "season1", "DST_K1.xlsx"].iter().collect::<std::path::PathBuf>()));

    // blank text keeps the previous directory
    opts.set_dir("   ");
    assert!(opts.workbook_path("K1").to_string_lossy().contains("season1"));
}

// Port 1 is never served in the test environment; if a request were
// attempted these would fail with a connection error, not the messages
// asserted here.
fn dead_server() -> ServerOptions {
    ServerOptions { host: "127.0.0.1".into(), port: 1 }
}

#[test]
fn empty_selection_never_issues_a_request() {
    let err = export::export_selection(&dead_server(), &ExportOptions::default(), &[], "KITHI25")
        .unwrap_err();
    assert_eq!(err.to_string(), "no members selected");
}

#[test]
fn blank_exam_code_never_issues_a_request() {
    let selected = vec!["M001".to_string()];
    let err = export::export_selection(&dead_server(), &ExportOptions::default(), &selected, "   ")
        .unwrap_err();
    assert_eq!(err.to_string(), "exam code is required");
}
