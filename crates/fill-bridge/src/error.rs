use serde::{Deserialize, Serialize};
use stone_layout::LayoutError;

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid input: {0}")]
    Layout(#[from] LayoutError),

    #[error("malformed request: {reason}")]
    Parse { reason: String },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Coarse error class reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request parsed but describes a layout that cannot be generated.
    InvalidInput,
    /// The request could not be parsed.
    MalformedRequest,
    Internal,
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::Layout(_) => ErrorKind::InvalidInput,
            BridgeError::Parse { .. } => ErrorKind::MalformedRequest,
            BridgeError::Serialization { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the caller should fix the request rather than report a fault.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}
