//! Receipt export and printing.
//!
//! The receipt is written as a one-page PDF named after the request id.
//! Printing writes the same file and opens it in the system viewer, whose
//! print dialog also offers "Save as PDF".

mod pdf;
mod receipt;

pub use pdf::render_pdf;
pub use receipt::{Receipt, ReceiptField, ROUTING_NOTE};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExportError;
use crate::models::{Complaint, Language};

/// File name used when the complaint has no id.
pub const FALLBACK_FILENAME: &str = "suvidha_receipt.pdf";

/// `<id>.pdf`, or [`FALLBACK_FILENAME`] for a blank id.
pub fn receipt_filename(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '\\']) {
        FALLBACK_FILENAME.to_string()
    } else {
        format!("{id}.pdf")
    }
}

/// Write the receipt for `complaint` into `dir`, creating it if needed.
///
/// The document uses English labels since the standard PDF fonts cannot
/// show Devanagari.
pub fn export_receipt(complaint: &Complaint, dir: &Path) -> Result<PathBuf, ExportError> {
    let receipt = Receipt::for_complaint(complaint, Language::English.translation());
    let bytes = render_pdf(receipt.heading, &receipt.body_lines())?;

    let path = dir.join(receipt_filename(&complaint.id));
    let write_failed = |e: std::io::Error| ExportError::WriteFailed {
        path: path.clone(),
        message: e.to_string(),
    };
    fs::create_dir_all(dir).map_err(write_failed)?;
    fs::write(&path, bytes).map_err(write_failed)?;

    debug!(path = %path.display(), "Receipt written");
    Ok(path)
}

/// Hand `path` to the system viewer.
pub fn open_for_print(path: &Path) -> Result<(), ExportError> {
    open::that(path).map_err(|e| ExportError::ViewerFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintStatus, Department};
    use tempfile::TempDir;

    fn complaint(id: &str) -> Complaint {
        Complaint {
            id: id.to_string(),
            department: Department::Gas,
            service_type: "Leakage Report".to_string(),
            description: "Smell near the meter".to_string(),
            status: ComplaintStatus::Assigned,
            timestamp: "02/03/2025, 08:15:00".to_string(),
            user_id: "CIT-XYZ12".to_string(),
            attachment_name: None,
        }
    }

    #[test]
    fn test_receipt_filename() {
        assert_eq!(receipt_filename("REQ-654321"), "REQ-654321.pdf");
        assert_eq!(receipt_filename("  "), FALLBACK_FILENAME);
        assert_eq!(receipt_filename("../x"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_export_writes_pdf() {
        let temp = TempDir::new().unwrap();
        let path = export_receipt(&complaint("REQ-654321"), temp.path()).unwrap();
        assert_eq!(path, temp.path().join("REQ-654321.pdf"));

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Status: Assigned"));
    }

    #[test]
    fn test_export_survives_very_long_attachment_name() {
        let temp = TempDir::new().unwrap();
        let mut long = complaint("REQ-222222");
        long.attachment_name = Some("scan ".repeat(2000));
        long.service_type = "y".repeat(5000);
        let path = export_receipt(&long, temp.path()).unwrap();
        assert!(fs::read(path).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_export_creates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("receipts");
        let path = export_receipt(&complaint(""), &dir).unwrap();
        assert_eq!(path, dir.join(FALLBACK_FILENAME));
        assert!(path.exists());
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        assert!(matches!(
            export_receipt(&complaint("REQ-1"), &blocker),
            Err(ExportError::WriteFailed { .. })
        ));
    }
}
