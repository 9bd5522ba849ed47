use cosmrs::ErrorReport;
use prost::{DecodeError, EncodeError};
use thiserror::Error;

use super::chain_res::ChainResponse;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("malformed rpc url")]
    InvalidURL { source: tendermint_rpc::Error },

    #[error("{name} address must not be empty")]
    MissingAddress { name: String },

    #[error("invalid account ID: {id:?}")]
    AccountId { id: String },

    #[error("no signing key for sender: {address:?}")]
    UnknownSigner { address: String },

    #[error("cryptographic error")]
    Crypto { source: ErrorReport },

    #[error("invalid denomination: {name:?}")]
    Denom { name: String },

    #[error("invalid coin amount: {amount:?}")]
    Amount { amount: String },

    #[error("invalid chainId: {chain_id:?}")]
    ChainId { chain_id: String },

    #[error("invalid mnemonic")]
    Mnemonic,

    #[error("invalid derivation path")]
    DerivationPath,

    #[error("invalid abci query path: {path:?}")]
    QueryPath { path: String },

    #[error("proto encoding error")]
    ProtoEncoding { source: ErrorReport },

    #[error("proto decoding error")]
    ProtoDecoding { source: ErrorReport },

    #[error("serde json serialization error")]
    JsonSerialize { source: serde_json::Error },

    #[error("tx broadcast error")]
    Broadcast { source: ErrorReport },

    #[error("missing {name:?} event in tx response")]
    MissingEvent { name: String },

    #[error("CosmosSDK error: {}", res.log)]
    CosmosSdk { res: ChainResponse },

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    RPC(#[from] tendermint_rpc::Error),
}

impl ClientError {
    pub fn crypto(e: ErrorReport) -> ClientError {
        ClientError::Crypto { source: e }
    }

    pub fn proto_encoding(e: ErrorReport) -> ClientError {
        ClientError::ProtoEncoding { source: e }
    }

    pub fn prost_proto_en(e: EncodeError) -> ClientError {
        ClientError::ProtoEncoding { source: e.into() }
    }

    pub fn prost_proto_de(e: DecodeError) -> ClientError {
        ClientError::ProtoDecoding { source: e.into() }
    }

    pub fn json(e: serde_json::Error) -> ClientError {
        ClientError::JsonSerialize { source: e }
    }

    pub fn broadcast(e: ErrorReport) -> ClientError {
        ClientError::Broadcast { source: e }
    }

    pub(crate) fn missing_address(name: &str) -> ClientError {
        ClientError::MissingAddress { name: name.into() }
    }
}

#[derive(Error, Debug)]
pub enum DeserializeError {
    #[error("Raw chain response is empty")]
    EmptyResponse,

    #[error("Failed to deserialize JSON")]
    Json(#[from] serde_json::Error),
}
