//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("suvidha {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}\nSUVIDHA civic services kiosk\n\n\
         USAGE:\n    suvidha [OPTIONS]\n\n\
         OPTIONS:\n    \
         --data-dir <PATH>      Directory for kiosk state and logs\n    \
         --export-dir <PATH>    Directory for exported receipts\n    \
         -h, --help             Print this help\n    \
         -V, --version          Print version\n\n\
         ENVIRONMENT:\n    \
         SUVIDHA_DATA_DIR, SUVIDHA_EXPORT_DIR, SUVIDHA_LANG, SUVIDHA_LOG",
        version_text()
    )
}
