use log::debug;
use serde::Serialize;

use super::msg::{AdminListResp, QueryMsg};
use crate::client::error::ClientError;
use crate::client::traits::CosmWasmQuerier;

/// Read-only client for a deployed split contract.
///
/// Holds no state besides the chain client and the contract address, so two
/// clients over the same address are interchangeable.
#[derive(Clone, Debug)]
pub struct SplitVotaQueryClient<C> {
    pub(crate) client: C,
    contract_address: String,
}

impl<C: CosmWasmQuerier> SplitVotaQueryClient<C> {
    /// Binds `client` to `contract_address`. Performs no network I/O.
    pub fn new<S: Into<String>>(client: C, contract_address: S) -> Result<Self, ClientError> {
        let contract_address = contract_address.into();
        if contract_address.is_empty() {
            return Err(ClientError::missing_address("contract"));
        }

        Ok(Self {
            client,
            contract_address,
        })
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub async fn admin_list(&self) -> Result<AdminListResp, ClientError> {
        self.query(&QueryMsg::AdminList {}).await
    }

    async fn query<T, R>(&self, msg: &T) -> Result<R, ClientError>
    where
        T: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let payload = serde_json::to_vec(msg).map_err(ClientError::json)?;

        let res = self
            .client
            .query_contract_smart(&self.contract_address, payload)
            .await?;
        debug!("{:?}", res.res);

        Ok(res.data()?)
    }
}
