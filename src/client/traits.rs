use async_trait::async_trait;

use super::chain_res::{ExecResponse, InstantiateResponse, QueryResponse, StoreCodeResponse};
use super::error::ClientError;
use super::fee::Fee;
use crate::config::cfg::Coin;

/// Read-only access to a cosmwasm enabled chain.
#[async_trait(?Send)]
pub trait CosmWasmQuerier {
    /// Runs a smart query with the raw json `payload` against the contract at `address`.
    async fn query_contract_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError>;

    async fn all_balances(&self, address: &str) -> Result<Vec<Coin>, ClientError>;

    async fn chain_id(&self) -> Result<String, ClientError>;

    async fn height(&self) -> Result<u64, ClientError>;
}

/// Signed access to a cosmwasm enabled chain.
///
/// Every method submits exactly one new transaction signed by `sender`.
#[async_trait(?Send)]
pub trait SigningCosmWasm: CosmWasmQuerier {
    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        payload: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) -> Result<ExecResponse, ClientError>;

    async fn store(
        &self,
        sender: &str,
        wasm: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<StoreCodeResponse, ClientError>;

    async fn instantiate(
        &self,
        sender: &str,
        code_id: u64,
        payload: Vec<u8>,
        label: &str,
        fee: Fee,
        options: InstantiateOptions,
    ) -> Result<InstantiateResponse, ClientError>;

    async fn send_tokens(
        &self,
        sender: &str,
        recipient: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<ExecResponse, ClientError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstantiateOptions {
    /// Optional admin address allowed to migrate the contract.
    pub admin: Option<String>,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

#[async_trait(?Send)]
impl<T: CosmWasmQuerier + ?Sized> CosmWasmQuerier for &T {
    async fn query_contract_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        (**self).query_contract_smart(address, payload).await
    }

    async fn all_balances(&self, address: &str) -> Result<Vec<Coin>, ClientError> {
        (**self).all_balances(address).await
    }

    async fn chain_id(&self) -> Result<String, ClientError> {
        (**self).chain_id().await
    }

    async fn height(&self) -> Result<u64, ClientError> {
        (**self).height().await
    }
}

#[async_trait(?Send)]
impl<T: SigningCosmWasm + ?Sized> SigningCosmWasm for &T {
    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        payload: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) -> Result<ExecResponse, ClientError> {
        (**self)
            .execute(sender, contract, payload, fee, memo, funds)
            .await
    }

    async fn store(
        &self,
        sender: &str,
        wasm: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<StoreCodeResponse, ClientError> {
        (**self).store(sender, wasm, fee, memo).await
    }

    async fn instantiate(
        &self,
        sender: &str,
        code_id: u64,
        payload: Vec<u8>,
        label: &str,
        fee: Fee,
        options: InstantiateOptions,
    ) -> Result<InstantiateResponse, ClientError> {
        (**self)
            .instantiate(sender, code_id, payload, label, fee, options)
            .await
    }

    async fn send_tokens(
        &self,
        sender: &str,
        recipient: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<ExecResponse, ClientError> {
        (**self)
            .send_tokens(sender, recipient, amount, fee, memo)
            .await
    }
}
