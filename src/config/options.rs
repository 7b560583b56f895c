// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub server: ServerOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            server: ServerOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Where the roster server lives. Paths on it are fixed (see consts).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerOptions {
    pub host: String,
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self { host: s!(HOST), port: PORT }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    /// Parse GUI/CLI text into the output directory. Separators are
    /// normalized for the platform. The workbook filename is not part of
    /// this; it is derived from the exam code at export time.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = crate::file::normalize_dir_path(s);
        }
    }

    /// `<out dir>/DST_<exam_code>.xlsx`: fixed prefix and extension,
    /// exam code verbatim in between.
    pub fn workbook_path(&self, exam_code: &str) -> PathBuf {
        self.out_dir.join(join!(WORKBOOK_PREFIX, exam_code, ".", WORKBOOK_EXT))
    }
}
