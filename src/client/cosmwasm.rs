use async_trait::async_trait;
use cosmos_sdk_proto::cosmos::bank::v1beta1::{QueryAllBalancesRequest, QueryAllBalancesResponse};
use cosmos_sdk_proto::cosmwasm::wasm::v1::{
    QuerySmartContractStateRequest, QuerySmartContractStateResponse,
};
use cosmrs::bank::MsgSend;
use cosmrs::cosmwasm::{MsgExecuteContract, MsgInstantiateContract, MsgStoreCode};
use cosmrs::crypto::secp256k1;
use cosmrs::rpc::{Client, HttpClient};
use cosmrs::tx::Msg;
use cosmrs::AccountId;
use log::debug;
use prost::Message;

use super::chain_res::{
    find_event, ExecResponse, InstantiateResponse, QueryResponse, StoreCodeResponse,
};
use super::cosmos::{abci_query, send_tx};
use super::error::ClientError;
use super::fee::Fee;
use super::traits::{CosmWasmQuerier, InstantiateOptions, SigningCosmWasm};
use crate::config::cfg::{parse_url, ChainCfg, Coin};
use crate::config::key::SigningKey;

/// Read-only client for a cosmwasm chain over tendermint RPC.
#[derive(Clone, Debug)]
pub struct CosmWasmClient {
    // http tendermint RPC client
    rpc_client: HttpClient,
    cfg: ChainCfg,
}

impl CosmWasmClient {
    /// Builds the RPC client for `cfg.rpc_endpoint`. No request is sent until the first call.
    pub fn connect(cfg: ChainCfg) -> Result<Self, ClientError> {
        let endpoint = parse_url(&cfg.rpc_endpoint)
            .map_err(|e| ClientError::InvalidURL { source: e })?;

        Ok(Self {
            rpc_client: HttpClient::new(endpoint.as_str())?,
            cfg,
        })
    }

    pub fn cfg(&self) -> &ChainCfg {
        &self.cfg
    }
}

#[async_trait(?Send)]
impl CosmWasmQuerier for CosmWasmClient {
    async fn query_contract_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        let res = abci_query(
            &self.rpc_client,
            QuerySmartContractStateRequest {
                address: address.to_string(),
                query_data: payload,
            },
            "/cosmwasm.wasm.v1.Query/SmartContractState",
        )
        .await?;

        let res = QuerySmartContractStateResponse::decode(res.value.as_slice())
            .map_err(ClientError::prost_proto_de)?;

        Ok(QueryResponse { res: res.into() })
    }

    async fn all_balances(&self, address: &str) -> Result<Vec<Coin>, ClientError> {
        let res = abci_query(
            &self.rpc_client,
            QueryAllBalancesRequest {
                address: address.to_string(),
                pagination: None,
            },
            "/cosmos.bank.v1beta1.Query/AllBalances",
        )
        .await?;

        QueryAllBalancesResponse::decode(res.value.as_slice())
            .map_err(ClientError::prost_proto_de)?
            .balances
            .into_iter()
            .map(Coin::try_from)
            .collect()
    }

    async fn chain_id(&self) -> Result<String, ClientError> {
        Ok(self.rpc_client.status().await?.node_info.network.to_string())
    }

    async fn height(&self) -> Result<u64, ClientError> {
        Ok(self
            .rpc_client
            .latest_block()
            .await?
            .block
            .header
            .height
            .into())
    }
}

/// [CosmWasmClient] that signs transactions with a single configured key.
#[derive(Clone, Debug)]
pub struct SigningCosmWasmClient {
    client: CosmWasmClient,
    key: SigningKey,
    address: AccountId,
}

impl SigningCosmWasmClient {
    pub fn connect(cfg: ChainCfg, key: SigningKey) -> Result<Self, ClientError> {
        let address = key.to_account(&cfg.prefix)?;

        Ok(Self {
            client: CosmWasmClient::connect(cfg)?,
            key,
            address,
        })
    }

    /// Bech32 address of the signing key.
    pub fn address(&self) -> String {
        self.address.to_string()
    }

    pub fn cfg(&self) -> &ChainCfg {
        self.client.cfg()
    }

    // Only `self.address` can sign, any other sender is rejected before building the tx.
    fn signer(&self, sender: &str) -> Result<(secp256k1::SigningKey, AccountId), ClientError> {
        if sender != self.address.as_ref() {
            return Err(ClientError::UnknownSigner {
                address: sender.to_string(),
            });
        }

        Ok(((&self.key).try_into()?, self.address.clone()))
    }

    async fn broadcast(
        &self,
        msg: cosmrs::Any,
        signing_key: &secp256k1::SigningKey,
        account_id: AccountId,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<ExecResponse, ClientError> {
        let tx_res = send_tx(
            &self.client.rpc_client,
            msg,
            signing_key,
            account_id,
            &self.client.cfg,
            fee,
            memo,
        )
        .await?;

        let res: ExecResponse = tx_res.into();
        debug!("{:?}", res.res);

        Ok(res)
    }
}

#[async_trait(?Send)]
impl CosmWasmQuerier for SigningCosmWasmClient {
    async fn query_contract_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        self.client.query_contract_smart(address, payload).await
    }

    async fn all_balances(&self, address: &str) -> Result<Vec<Coin>, ClientError> {
        self.client.all_balances(address).await
    }

    async fn chain_id(&self) -> Result<String, ClientError> {
        self.client.chain_id().await
    }

    async fn height(&self) -> Result<u64, ClientError> {
        self.client.height().await
    }
}

#[async_trait(?Send)]
impl SigningCosmWasm for SigningCosmWasmClient {
    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        payload: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) -> Result<ExecResponse, ClientError> {
        let (signing_key, account_id) = self.signer(sender)?;

        let msg = MsgExecuteContract {
            sender: account_id.clone(),
            contract: parse_account(contract)?,
            msg: payload,
            funds: cosm_coins(funds)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        self.broadcast(msg, &signing_key, account_id, fee, memo)
            .await
    }

    async fn store(
        &self,
        sender: &str,
        wasm: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<StoreCodeResponse, ClientError> {
        let (signing_key, account_id) = self.signer(sender)?;

        let msg = MsgStoreCode {
            sender: account_id.clone(),
            wasm_byte_code: wasm,
            instantiate_permission: None,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let res = self
            .broadcast(msg, &signing_key, account_id, fee, memo)
            .await?;

        let code_id = find_event(&res.events, "store_code")
            .and_then(|e| e.attribute("code_id"))
            .and_then(|id| id.parse::<u64>().ok())
            .ok_or_else(|| ClientError::MissingEvent {
                name: "store_code".to_string(),
            })?;

        Ok(StoreCodeResponse {
            code_id,
            res: res.res,
            tx_hash: res.tx_hash,
            height: res.height,
        })
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
        let (signing_key, account_id) = self.signer(sender)?;

        let msg = MsgInstantiateContract {
            sender: account_id.clone(),
            admin: options.admin.as_deref().map(parse_account).transpose()?,
            code_id,
            label: Some(label.to_string()),
            msg: payload,
            funds: cosm_coins(options.funds)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        let res = self
            .broadcast(msg, &signing_key, account_id, fee, options.memo)
            .await?;

        let address = find_event(&res.events, "instantiate")
            .and_then(|e| e.attribute("_contract_address"))
            .ok_or_else(|| ClientError::MissingEvent {
                name: "instantiate".to_string(),
            })?
            .to_string();

        Ok(InstantiateResponse {
            address,
            res: res.res,
            tx_hash: res.tx_hash,
            height: res.height,
        })
    }

    async fn send_tokens(
        &self,
        sender: &str,
        recipient: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<ExecResponse, ClientError> {
        let (signing_key, account_id) = self.signer(sender)?;

        let msg = MsgSend {
            from_address: account_id.clone(),
            to_address: parse_account(recipient)?,
            amount: cosm_coins(amount)?,
        }
        .to_any()
        .map_err(ClientError::proto_encoding)?;

        self.broadcast(msg, &signing_key, account_id, fee, memo)
            .await
    }
}

fn parse_account(address: &str) -> Result<AccountId, ClientError> {
    address.parse().map_err(|_| ClientError::AccountId {
        id: address.to_string(),
    })
}

fn cosm_coins(coins: Vec<Coin>) -> Result<Vec<cosmrs::Coin>, ClientError> {
    coins.into_iter().map(cosmrs::Coin::try_from).collect()
}
