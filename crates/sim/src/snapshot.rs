//! Save and restore for game state.
//!
//! States serialize with bincode's standard configuration. A snapshot
//! taken on one machine replays on another as long as both run the same
//! build.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Serialize a state value to bytes.
pub fn save<S: Serialize>(state: &S) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serde::encode_to_vec(
        state,
        bincode::config::standard(),
    )?)
}

/// Deserialize a state value from bytes produced by [`save`].
pub fn load<S: DeserializeOwned>(data: &[u8]) -> Result<S, SnapshotError> {
    let (state, _) = bincode::serde::decode_from_slice(data, bincode::config::standard())?;
    Ok(state)
}
