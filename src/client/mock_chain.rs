use async_trait::async_trait;

use super::chain_res::{
    ChainResponse, ExecResponse, InstantiateResponse, QueryResponse, StoreCodeResponse,
};
use super::error::ClientError;
use super::fee::Fee;
use super::traits::{CosmWasmQuerier, InstantiateOptions, SigningCosmWasm};
use crate::config::cfg::Coin;

/// Chain double for unit tests, built with `MockChain::faux()`.
/// Any call that is not stubbed with `faux::when!` panics.
#[faux::create]
#[derive(Debug)]
pub(crate) struct MockChain {}

#[faux::methods]
#[async_trait(?Send)]
impl CosmWasmQuerier for MockChain {
    async fn query_contract_smart(
        &self,
        _address: &str,
        _payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        unimplemented!()
    }

    async fn all_balances(&self, _address: &str) -> Result<Vec<Coin>, ClientError> {
        unimplemented!()
    }

    async fn chain_id(&self) -> Result<String, ClientError> {
        unimplemented!()
    }

    async fn height(&self) -> Result<u64, ClientError> {
        unimplemented!()
    }
}

#[faux::methods]
#[async_trait(?Send)]
impl SigningCosmWasm for MockChain {
    async fn execute(
        &self,
        _sender: &str,
        _contract: &str,
        _payload: Vec<u8>,
        _fee: Fee,
        _memo: Option<String>,
        _funds: Vec<Coin>,
    ) -> Result<ExecResponse, ClientError> {
        unimplemented!()
    }

    async fn store(
        &self,
        _sender: &str,
        _wasm: Vec<u8>,
        _fee: Fee,
        _memo: Option<String>,
    ) -> Result<StoreCodeResponse, ClientError> {
        unimplemented!()
    }

    async fn instantiate(
        &self,
        _sender: &str,
        _code_id: u64,
        _payload: Vec<u8>,
        _label: &str,
        _fee: Fee,
        _options: InstantiateOptions,
    ) -> Result<InstantiateResponse, ClientError> {
        unimplemented!()
    }

    async fn send_tokens(
        &self,
        _sender: &str,
        _recipient: &str,
        _amount: Vec<Coin>,
        _fee: Fee,
        _memo: Option<String>,
    ) -> Result<ExecResponse, ClientError> {
        unimplemented!()
    }
}

/// Smart query response carrying `json` as its data.
pub(crate) fn query_json(json: &str) -> QueryResponse {
    QueryResponse {
        res: ChainResponse {
            data: Some(json.as_bytes().to_vec()),
            ..Default::default()
        },
    }
}

/// Payload bytes as a string, for comparing against expected json.
pub(crate) fn utf8(payload: &[u8]) -> &str {
    std::str::from_utf8(payload).unwrap()
}
