use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::DeployError;
use crate::client::chain_res::{ExecResponse, InstantiateResponse, StoreCodeResponse};
use crate::client::cosmwasm::SigningCosmWasmClient;
use crate::client::error::ClientError;
use crate::client::fee::Fee;
use crate::client::traits::{CosmWasmQuerier, InstantiateOptions, SigningCosmWasm};
use crate::config::cfg::{Coin, Config, DeployCfg};
use crate::config::key::SigningKey;
use crate::contract::msg::InstantiateMsg;
use crate::contract::SplitVotaClient;

/// Code id and address of a deployed split contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployInfo {
    pub code_id: u64,
    pub address: String,
}

/// Logs the chain id and height, then returns every balance held by `address`.
pub async fn check_balance<C: CosmWasmQuerier>(
    client: &C,
    address: &str,
) -> Result<Vec<Coin>, ClientError> {
    info!(
        "chain id: {}, height: {}",
        client.chain_id().await?,
        client.height().await?
    );

    let balances = client.all_balances(address).await?;
    info!("{} balances: {:?}", address, balances);

    Ok(balances)
}

/// Uploads the wasm binary at `wasm_path` to the chain.
pub async fn store_contract<C: SigningCosmWasm>(
    client: &C,
    sender: &str,
    wasm_path: &str,
) -> Result<StoreCodeResponse, DeployError> {
    info!("Storing {:?}", wasm_path);

    let wasm = tokio::fs::read(wasm_path)
        .await
        .map_err(|e| DeployError::wasmfile(wasm_path, e))?;

    let res = client.store(sender, wasm, Fee::Auto, None).await?;
    debug!("{:?}", res.res);

    Ok(res)
}

/// Instantiates `code_id` with the configured admins, making `sender` the contract's migrate admin.
pub async fn instantiate_contract<C: SigningCosmWasm>(
    client: &C,
    sender: &str,
    code_id: u64,
    cfg: &DeployCfg,
) -> Result<InstantiateResponse, DeployError> {
    let msg = InstantiateMsg {
        admins: cfg.admins.clone(),
    };
    let payload = serde_json::to_vec(&msg).map_err(ClientError::json)?;

    let options = InstantiateOptions {
        admin: Some(sender.to_string()),
        memo: Some(cfg.memo.clone()).filter(|m| !m.is_empty()),
        funds: vec![],
    };

    let res = client
        .instantiate(sender, code_id, payload, &cfg.label, Fee::Auto, options)
        .await?;
    debug!("{:?}", res.res);

    Ok(res)
}

/// Stores and instantiates the split contract, reusing the configured code id
/// and contract address when they are already set.
pub async fn deploy<C: SigningCosmWasm>(
    client: &C,
    sender: &str,
    cfg: &DeployCfg,
) -> Result<DeployInfo, DeployError> {
    let code_id = match cfg.code_id {
        Some(code_id) => code_id,
        None => store_contract(client, sender, &cfg.wasm_path).await?.code_id,
    };
    info!("code_id: {}", code_id);

    let address = match &cfg.contract_address {
        Some(address) => address.clone(),
        None => {
            instantiate_contract(client, sender, code_id, cfg)
                .await?
                .address
        }
    };
    info!("contract_address: {}", address);

    Ok(DeployInfo { code_id, address })
}

/// Sends `amount` from `sender` to `recipient`.
pub async fn send_coins<C: SigningCosmWasm>(
    client: &C,
    sender: &str,
    recipient: &str,
    amount: Vec<Coin>,
    memo: Option<String>,
) -> Result<ExecResponse, ClientError> {
    let res = client
        .send_tokens(sender, recipient, amount, Fee::Auto, memo)
        .await?;
    debug!("{:?}", res.res);

    Ok(res)
}

/// Connects to the configured chain with `key`, makes sure the split contract
/// is deployed and returns a client for it signing as `key`.
pub async fn bootstrap(
    cfg: Config,
    key: SigningKey,
) -> Result<SplitVotaClient<SigningCosmWasmClient>, DeployError> {
    let client = SigningCosmWasmClient::connect(cfg.chain_cfg, key)?;
    let sender = client.address();
    info!("Address: {}", sender);

    check_balance(&client, &sender).await?;

    let info = deploy(&client, &sender, &cfg.deploy).await?;

    Ok(SplitVotaClient::new(client, sender, info.address)?)
}
