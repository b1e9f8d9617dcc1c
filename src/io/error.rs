//! Error types and context management for rendering operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all rendering operations
#[derive(Debug)]
pub enum AsciifyError {
    /// Render parameters cannot produce an image
    ///
    /// Raised before any pixel work starts, e.g. when the glyph cell is
    /// larger than the source image and no cell fits the grid.
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to read or parse the font resource
    FontLoad {
        /// Path to the font file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// A per-cell or per-buffer computation could not be carried out
    Render {
        /// Pipeline stage that failed
        stage: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AsciifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FontLoad { path, reason } => {
                write!(f, "Failed to load font '{}': {reason}", path.display())
            }
            Self::Render { stage, reason } => {
                write!(f, "Render error during {stage}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AsciifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, AsciifyError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches the path being worked on to errors converted without one
pub trait WithContext<T> {
    /// Fill in the path of path-carrying errors that were created without one
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AsciifyError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AsciifyError::ImageLoad { path: slot, .. }
                | AsciifyError::ImageExport { path: slot, .. }
                | AsciifyError::FontLoad { path: slot, .. }
                | AsciifyError::FileSystem { path: slot, .. } => {
                    if slot.as_os_str() == UNKNOWN_PATH {
                        *slot = path.to_path_buf();
                    }
                }
                AsciifyError::Configuration { .. } | AsciifyError::Render { .. } => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for AsciifyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for AsciifyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AsciifyError {
    AsciifyError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a render error
pub fn render_error(stage: &'static str, reason: &impl ToString) -> AsciifyError {
    AsciifyError::Render {
        stage,
        reason: reason.to_string(),
    }
}

/// Create a font loading error
pub fn font_error(path: &Path, reason: &impl ToString) -> AsciifyError {
    AsciifyError::FontLoad {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
