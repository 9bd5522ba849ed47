use super::error::DeserializeError;
use cosmos_sdk_proto::cosmwasm::wasm::v1::QuerySmartContractStateResponse;
use cosmrs::rpc::endpoint::broadcast::tx_commit::{Response, TxResult};
use cosmrs::tendermint::abci::{self, Code};
use serde::Deserialize;
use tendermint_rpc::endpoint::abci_query::AbciQuery;

#[derive(Clone, Debug)]
pub struct StoreCodeResponse {
    pub code_id: u64,
    pub res: ChainResponse,
    pub tx_hash: String,
    pub height: u64,
}

#[derive(Clone, Debug)]
pub struct InstantiateResponse {
    pub address: String,
    pub res: ChainResponse,
    pub tx_hash: String,
    pub height: u64,
}

/// Result of a signed transaction against the chain, returned as is by the contract clients.
#[derive(Clone, Debug, Default)]
pub struct ExecResponse {
    pub res: ChainResponse,
    pub tx_hash: String,
    pub height: u64,
    pub events: Vec<Event>,
}
impl ExecResponse {
    pub fn data<'a, T: Deserialize<'a>>(&'a self) -> Result<T, DeserializeError> {
        self.res.data()
    }

    pub fn gas_used(&self) -> u64 {
        self.res.gas_used
    }
}

#[derive(Clone, Debug)]
pub struct QueryResponse {
    pub res: ChainResponse,
}
impl QueryResponse {
    pub fn data<'a, T: Deserialize<'a>>(&'a self) -> Result<T, DeserializeError> {
        self.res.data()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChainResponse {
    pub code: Code,
    pub data: Option<Vec<u8>>,
    pub log: String,
    pub gas_wanted: u64,
    pub gas_used: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<abci::Event> for Event {
    fn from(e: abci::Event) -> Event {
        Event {
            kind: e.type_str,
            attributes: e
                .attributes
                .into_iter()
                .map(|tag| (tag.key.to_string(), tag.value.to_string()))
                .collect(),
        }
    }
}

impl From<TxResult> for ChainResponse {
    fn from(res: TxResult) -> ChainResponse {
        ChainResponse {
            code: res.code,
            data: res.data.map(|d| d.into()),
            log: res.log.to_string(),
            gas_wanted: res.gas_wanted.into(),
            gas_used: res.gas_used.into(),
        }
    }
}

impl From<AbciQuery> for ChainResponse {
    fn from(res: AbciQuery) -> ChainResponse {
        ChainResponse {
            code: res.code,
            data: Some(res.value),
            log: res.log.to_string(),
            gas_wanted: 0,
            gas_used: 0,
        }
    }
}

impl From<QuerySmartContractStateResponse> for ChainResponse {
    fn from(res: QuerySmartContractStateResponse) -> ChainResponse {
        ChainResponse {
            code: Code::Ok,
            data: Some(res.data),
            ..Default::default()
        }
    }
}

impl From<Response> for ExecResponse {
    fn from(res: Response) -> ExecResponse {
        ExecResponse {
            tx_hash: res.hash.to_string(),
            height: res.height.into(),
            events: res
                .deliver_tx
                .events
                .clone()
                .into_iter()
                .map(Event::from)
                .collect(),
            res: res.deliver_tx.into(),
        }
    }
}

impl ChainResponse {
    pub fn data<'a, T: Deserialize<'a>>(&'a self) -> Result<T, DeserializeError> {
        let r: T = serde_json::from_slice(
            self.data
                .as_ref()
                .ok_or(DeserializeError::EmptyResponse)?
                .as_slice(),
        )?;
        Ok(r)
    }
}

pub(crate) fn find_event<'a>(events: &'a [Event], kind: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.kind == kind)
}
