//! Receipt export and print errors.

use std::path::PathBuf;

/// Failure of the render → encode → write → hand-off receipt pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// There is no receipt on screen to export.
    #[error("no receipt available")]
    NoReceipt,

    /// Laying the receipt out onto a page failed.
    #[error("failed to render receipt: {message}")]
    RenderFailed { message: String },

    /// Writing the document to disk failed.
    #[error("failed to write {path:?}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// The system viewer could not be launched for printing.
    #[error("failed to open {path:?} for printing: {message}")]
    ViewerFailed { path: PathBuf, message: String },

    /// The background export task died before reporting back.
    #[error("export task failed: {message}")]
    TaskFailed { message: String },
}

impl ExportError {
    pub fn user_message(&self) -> String {
        match self {
            ExportError::NoReceipt => "No receipt available to save.".to_string(),
            ExportError::RenderFailed { .. } | ExportError::TaskFailed { .. } => {
                "Failed to save PDF.".to_string()
            }
            ExportError::WriteFailed { path, .. } => {
                format!("Failed to save PDF to '{}'.", path.display())
            }
            ExportError::ViewerFailed { path, .. } => format!(
                "Unable to open the print dialog. The receipt was saved to '{}'.",
                path.display()
            ),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::NoReceipt => "EXPORT_NO_RECEIPT",
            ExportError::RenderFailed { .. } => "EXPORT_RENDER_FAILED",
            ExportError::WriteFailed { .. } => "EXPORT_WRITE_FAILED",
            ExportError::ViewerFailed { .. } => "EXPORT_VIEWER_FAILED",
            ExportError::TaskFailed { .. } => "EXPORT_TASK_FAILED",
        }
    }
}
