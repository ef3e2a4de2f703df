//! Kernel error types.

use thiserror::Error;

/// Errors raised while wiring inputs and validators into a host.
///
/// Rendering and validation themselves never fail; these cover lookups and
/// loading of host-provided resources.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("unknown input type: {0}")]
    UnknownInput(String),

    #[error("unknown validator: {0}")]
    UnknownValidator(String),

    #[error("failed to read asset manifest {path}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed asset manifest {path}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KernelError::UnknownInput("wysiwyg".to_string()).to_string(),
            "unknown input type: wysiwyg"
        );
        assert_eq!(
            KernelError::UnknownValidator("phone".to_string()).to_string(),
            "unknown validator: phone"
        );
    }
}
