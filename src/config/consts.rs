// src/config/consts.rs

// Net config
pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 5000;
pub const ROSTER_PATH: &str = "/static/data.csv";
pub const EXPORT_PATH: &str = "/export";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const WORKBOOK_PREFIX: &str = "DST_";
pub const WORKBOOK_EXT: &str = "xlsx";
