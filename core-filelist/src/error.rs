use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileListError {
    #[error("Invalid argument at position {position}: {reason}")]
    InvalidArgument { position: usize, reason: String },

    #[error("File transfer failed: {0}")]
    Transfer(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, FileListError>;
