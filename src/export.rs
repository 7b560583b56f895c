// src/export.rs
//
// Build the export request, POST it, and save the returned workbook.
// One request, one file, no retries.

use std::error::Error;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::consts::EXPORT_PATH;
use crate::config::options::{ExportOptions, ServerOptions};
use crate::{file, net};

/// Wire payload for POST /export.
#[derive(Clone, Debug, Serialize)]
pub struct ExportRequest {
    pub selected: Vec<String>,
    pub exam_code: String,
}

/// Error body the server sends with a non-2xx export response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// POST the selected member codes and write the returned workbook to
/// `<out dir>/DST_<exam_code>.xlsx`. Returns the written path.
///
/// Preconditions are enforced here as well as in the frontends: with no
/// selection or a blank exam code, no request is issued at all.
pub fn export_selection(
    server: &ServerOptions,
    export: &ExportOptions,
    selected: &[String],
    exam_code: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    if selected.is_empty() {
        return Err("no members selected".into());
    }
    let exam_code = exam_code.trim();
    if exam_code.is_empty() {
        return Err("exam code is required".into());
    }

    let request = ExportRequest {
        selected: selected.to_vec(),
        exam_code: s!(exam_code),
    };
    let json = serde_json::to_string(&request)?;

    logf!("Export: POST {}:{}{} codes={} exam={}",
        server.host, server.port, EXPORT_PATH, selected.len(), exam_code);

    let resp = net::http_post_json(&server.host, server.port, EXPORT_PATH, &json)?;
    if !resp.is_success() {
        return Err(server_error_message(&resp.body, resp.status).into());
    }

    let path = export.workbook_path(exam_code);
    file::write_binary(&path, &resp.body)?;
    logf!("Export: OK {} bytes → {}", resp.body.len(), path.display());
    Ok(path)
}

/// Pull the server's `error` message out of a failed response body,
/// falling back to a generic line when the body isn't the expected JSON.
pub fn server_error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("export failed (HTTP {status})"))
}
