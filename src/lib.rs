//! Typed client and deployment tooling for the SplitVota cosmwasm contract
//!
//! Query the admin list, split funds across groups of recipients and withdraw
//! leftovers from a [SplitVota] contract running on a [Cosmos] based chain
//! such as Dora Vota.
//!
//! [Cosmos]: https://github.com/cosmos/cosmos-sdk
//! [SplitVota]: https://github.com/DoraFactory
//!
//!
//! # Quick Start
//!
//! ```no_run
//! use split_vota::{
//!     client::cosmwasm::SigningCosmWasmClient,
//!     config::{cfg::Config, key::SigningKey},
//!     contract::SplitVotaClient,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = Config::from_yaml("config.yaml")?;
//! let key = SigningKey::from_mnemonic("admin", "word1 word2 ...");
//!
//! let client = SigningCosmWasmClient::connect(cfg.chain_cfg, key)?;
//! let sender = client.address();
//! let contract = SplitVotaClient::new(client, sender, "dora1...")?;
//!
//! let admins = contract.admin_list().await?;
//! println!("{:?}", admins.admins);
//!
//! contract.withdraw_remains(None, None, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub mod config;

pub mod contract;

pub mod orchestrator;
