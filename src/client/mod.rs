pub mod chain_res;

pub mod cosmwasm;

pub mod error;

pub mod fee;

pub mod traits;

pub(crate) mod cosmos;

#[cfg(test)]
pub(crate) mod mock_chain;

pub use cosmrs::tendermint::abci::Code;
