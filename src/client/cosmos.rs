use super::chain_res::ChainResponse;
use super::error::ClientError;
use super::fee::{fee_amount, gas_limit, Fee, StdFee};
use crate::config::cfg::{ChainCfg, Coin};
use cosmos_sdk_proto::cosmos::auth::v1beta1::{
    BaseAccount, QueryAccountRequest, QueryAccountResponse,
};
use cosmos_sdk_proto::cosmos::tx::v1beta1::{SimulateRequest, SimulateResponse};
use cosmrs::crypto::secp256k1;
use cosmrs::rpc::endpoint::broadcast::tx_commit::Response;
use cosmrs::rpc::Client;
use cosmrs::tendermint::abci::Code;
use cosmrs::tendermint::chain;
use cosmrs::tx::{self, SignDoc, SignerInfo};
use cosmrs::{rpc::HttpClient, AccountId, Any};
use log::debug;
use prost::Message;
use tendermint_rpc::endpoint::abci_query::AbciQuery;

/// Signs `msg` with `key` and broadcasts it, waiting for the tx to be committed.
pub async fn send_tx(
    client: &HttpClient,
    msg: Any,
    key: &secp256k1::SigningKey,
    account_id: AccountId,
    cfg: &ChainCfg,
    fee: Fee,
    memo: Option<String>,
) -> Result<Response, ClientError> {
    let timeout_height = 0u16;
    let account = account(client, account_id).await?;
    let chain_id = chain_id(cfg)?;

    let tx_body = tx::Body::new(vec![msg], memo.unwrap_or_default(), timeout_height);

    let fee = match fee {
        Fee::Auto => {
            simulate_gas_fee(client, &tx_body, &account, key, cfg, &chain_id, cfg.gas_adjustment)
                .await?
        }
        Fee::GasMultiplier(multiplier) => {
            simulate_gas_fee(client, &tx_body, &account, key, cfg, &chain_id, multiplier).await?
        }
        Fee::Explicit(std_fee) => explicit_fee(std_fee, cfg)?,
    };

    // NOTE: if we are making requests in parallel with the same key, we need to serialize `account.sequence` to avoid errors
    let auth_info =
        SignerInfo::single_direct(Some(key.public_key()), account.sequence).auth_info(fee);

    let sign_doc = SignDoc::new(&tx_body, &auth_info, &chain_id, account.account_number)
        .map_err(ClientError::proto_encoding)?;

    let tx_raw = sign_doc.sign(key).map_err(ClientError::crypto)?;

    let tx_commit_response = tx_raw
        .broadcast_commit(client)
        .await
        .map_err(ClientError::broadcast)?;

    debug!("tx {} committed at {}", tx_commit_response.hash, tx_commit_response.height);

    if tx_commit_response.check_tx.code.is_err() {
        return Err(ClientError::CosmosSdk {
            res: tx_commit_response.check_tx.into(),
        });
    }
    if tx_commit_response.deliver_tx.code.is_err() {
        return Err(ClientError::CosmosSdk {
            res: tx_commit_response.deliver_tx.into(),
        });
    }

    Ok(tx_commit_response)
}

pub async fn abci_query<T: Message>(
    client: &HttpClient,
    req: T,
    path: &str,
) -> Result<AbciQuery, ClientError> {
    let mut buf = Vec::with_capacity(req.encoded_len());
    req.encode(&mut buf).map_err(ClientError::prost_proto_en)?;

    let res = client
        .abci_query(
            Some(path.parse().map_err(|_| ClientError::QueryPath {
                path: path.to_string(),
            })?),
            buf,
            None,
            false,
        )
        .await?;

    if res.code != Code::Ok {
        return Err(ClientError::CosmosSdk { res: res.into() });
    }

    Ok(res)
}

async fn account(client: &HttpClient, account_id: AccountId) -> Result<BaseAccount, ClientError> {
    let res = abci_query(
        client,
        QueryAccountRequest {
            address: account_id.as_ref().into(),
        },
        "/cosmos.auth.v1beta1.Query/Account",
    )
    .await?;

    let res = QueryAccountResponse::decode(res.value.as_slice())
        .map_err(ClientError::prost_proto_de)?
        .account
        .ok_or(ClientError::AccountId {
            id: account_id.to_string(),
        })?;

    let base_account =
        BaseAccount::decode(res.value.as_slice()).map_err(ClientError::prost_proto_de)?;

    Ok(base_account)
}

fn chain_id(cfg: &ChainCfg) -> Result<chain::Id, ClientError> {
    cfg.chain_id.parse().map_err(|_| ClientError::ChainId {
        chain_id: cfg.chain_id.to_string(),
    })
}

fn explicit_fee(std_fee: StdFee, cfg: &ChainCfg) -> Result<tx::Fee, ClientError> {
    let mut amount: Vec<cosmrs::Coin> = vec![];
    for coin in std_fee.amount {
        amount.push(coin.try_into()?);
    }

    // `from_amount_and_gas` only takes a single coin, so overwrite the amounts afterwards
    let mut fee = tx::Fee::from_amount_and_gas(Coin::new(0, &cfg.denom).try_into()?, std_fee.gas);
    fee.amount = amount;

    Ok(fee)
}

#[allow(deprecated)]
async fn simulate_gas_fee(
    client: &HttpClient,
    tx: &tx::Body,
    account: &BaseAccount,
    key: &secp256k1::SigningKey,
    cfg: &ChainCfg,
    chain_id: &chain::Id,
    multiplier: f64,
) -> Result<tx::Fee, ClientError> {
    let signer_info = SignerInfo::single_direct(Some(key.public_key()), account.sequence);
    let auth_info = signer_info.auth_info(tx::Fee::from_amount_and_gas(
        Coin::new(0, &cfg.denom).try_into()?,
        0u64,
    ));

    let sign_doc = SignDoc::new(tx, &auth_info, chain_id, account.account_number)
        .map_err(ClientError::proto_encoding)?;

    let tx_raw = sign_doc.sign(key).map_err(ClientError::crypto)?;

    let res = abci_query(
        client,
        SimulateRequest {
            tx: None,
            tx_bytes: tx_raw.to_bytes().map_err(ClientError::proto_encoding)?,
        },
        "/cosmos.tx.v1beta1.Service/Simulate",
    )
    .await?;

    let gas_info = SimulateResponse::decode(res.value.as_slice())
        .map_err(ClientError::prost_proto_de)?
        .gas_info
        .ok_or_else(|| ClientError::CosmosSdk {
            res: ChainResponse {
                code: Code::Err(1),
                log: "simulate response is missing gas info".to_string(),
                ..Default::default()
            },
        })?;

    let gas_limit = gas_limit(gas_info.gas_used, multiplier);
    let amount = Coin::new(fee_amount(gas_limit, cfg.gas_prices), &cfg.denom);

    Ok(tx::Fee::from_amount_and_gas(amount.try_into()?, gas_limit))
}
