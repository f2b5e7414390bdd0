//! Error types for colormap-tool.
//!
//! Every failure is a validation failure on caller input (or on a resource
//! file), so nothing here is retryable.

use thiserror::Error;

/// The main error type for colormap-tool operations.
#[derive(Error, Debug)]
pub enum ColormapError {
    /// A dotted identifier was combined with an explicit namespace
    #[error("Namespace conflict: '{name}' already carries a namespace, but namespace '{explicit}' was also given")]
    Conflict { name: String, explicit: String },

    /// A bare identifier was given without a namespace
    #[error("Missing namespace: '{name}' has no namespace prefix and no namespace was given")]
    MissingNamespace { name: String },

    /// The namespace is not one of the known set
    #[error("Unknown namespace: '{namespace}' (known: {known})")]
    UnknownNamespace { namespace: String, known: String },

    /// The colormap name is not present in the namespace's source
    #[error("Unknown colormap: '{name}' not found in namespace '{namespace}'")]
    UnknownName { namespace: String, name: String },

    /// A table is neither (N, 3) nor (N, 1, 3)
    #[error("Invalid shape: {shape:?} - {message}")]
    InvalidShape { shape: Vec<usize>, message: String },

    /// A requested table length is not positive
    #[error("Invalid length: {length} - {message}")]
    InvalidLength { length: usize, message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Host registry errors
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding/decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl ColormapError {
    pub(crate) fn invalid_shape(shape: &[usize], message: impl Into<String>) -> Self {
        ColormapError::InvalidShape {
            shape: shape.to_vec(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with ColormapError
pub type Result<T> = std::result::Result<T, ColormapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_value() {
        let err = ColormapError::UnknownName {
            namespace: "mpl".to_string(),
            name: "nonexistent".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("nonexistent"));
        assert!(message.contains("mpl"));

        let err = ColormapError::invalid_shape(&[5, 2], "expected 3 channels");
        assert_eq!(
            err.to_string(),
            "Invalid shape: [5, 2] - expected 3 channels"
        );
    }
}
