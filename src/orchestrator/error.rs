use thiserror::Error;

use crate::client::error::ClientError;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("error reading wasm file: {path:?}")]
    WasmFileRead {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    ClientError(#[from] ClientError),
}

impl DeployError {
    pub fn wasmfile(path: &str, e: std::io::Error) -> DeployError {
        DeployError::WasmFileRead {
            path: path.to_string(),
            source: e,
        }
    }
}
