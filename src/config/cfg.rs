use config::{Config as _Config, Environment};
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tendermint_rpc::error::ErrorDetail::UnsupportedScheme;
use tendermint_rpc::{Error, Url};

use super::error::ConfigError;
use crate::client::error::ClientError;

const ENV_PREFIX: &str = "SPLIT_VOTA";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub chain_cfg: ChainCfg,
    // used to reuse an already stored code_id and deployed contract address
    #[serde(default)]
    pub deploy: DeployCfg,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChainCfg {
    pub denom: String,
    pub prefix: String,
    pub chain_id: String,
    pub rpc_endpoint: String,
    pub gas_prices: f64,
    pub gas_adjustment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

// missing keys fall back to `DeployCfg::default()`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeployCfg {
    /// path to the optimized split_vota wasm binary
    pub wasm_path: String,
    pub code_id: Option<u64>,
    pub contract_address: Option<String>,
    /// admins passed to the contract's InstantiateMsg
    pub admins: Vec<String>,
    pub label: String,
    pub memo: String,
}

impl Default for DeployCfg {
    fn default() -> Self {
        Self {
            wasm_path: "./artifacts/split_vota.wasm".to_string(),
            code_id: None,
            contract_address: None,
            admins: vec![],
            label: "split-vota".to_string(),
            memo: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Config {
    /// Loads the config from `file`, letting `SPLIT_VOTA__*` environment variables
    /// override individual keys (ie. `SPLIT_VOTA__DEPLOY__CODE_ID=12`).
    ///
    /// A `chain_cfg.rpc_endpoint` without a scheme defaults to https.
    pub fn from_yaml(file: &str) -> Result<Config, ConfigError> {
        let settings = _Config::builder()
            .add_source(config::File::with_name(file))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let mut cfg = settings.try_deserialize::<Config>()?;
        cfg.chain_cfg.rpc_endpoint = parse_url(&cfg.chain_cfg.rpc_endpoint)?;

        Ok(cfg)
    }
}

impl ChainCfg {
    /// Dora Vota chain settings used by the split contract deployments.
    pub fn vota(network: Network) -> Self {
        let (chain_id, rpc_endpoint) = match network {
            Network::Mainnet => ("vota-ash", "https://vota-rpc.dorafactory.org"),
            Network::Testnet => ("vota-testnet", "https://vota-testnet-rpc.dorafactory.org"),
        };

        Self {
            denom: "peaka".to_string(),
            prefix: "dora".to_string(),
            chain_id: chain_id.to_string(),
            rpc_endpoint: rpc_endpoint.to_string(),
            gas_prices: 1_000_000_000.0,
            gas_adjustment: 1.3,
        }
    }
}

impl Coin {
    pub fn new<S: Into<String>>(amount: u128, denom: S) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl TryFrom<Coin> for cosmrs::Coin {
    type Error = ClientError;

    fn try_from(coin: Coin) -> Result<cosmrs::Coin, ClientError> {
        Ok(cosmrs::Coin {
            denom: coin
                .denom
                .parse()
                .map_err(|_| ClientError::Denom { name: coin.denom })?,
            amount: coin
                .amount
                .to_string()
                .parse()
                .map_err(|_| ClientError::Amount {
                    amount: coin.amount.to_string(),
                })?,
        })
    }
}

impl TryFrom<ProtoCoin> for Coin {
    type Error = ClientError;

    fn try_from(coin: ProtoCoin) -> Result<Coin, ClientError> {
        let amount = coin
            .amount
            .parse()
            .map_err(|_| ClientError::Amount {
                amount: coin.amount.clone(),
            })?;

        Ok(Coin {
            denom: coin.denom,
            amount,
        })
    }
}

// Attempt to parse the configured url to ensure that it is valid.
// If url is missing the Scheme then default to https.
pub(crate) fn parse_url(url: &str) -> Result<String, Error> {
    let u = Url::from_str(url);

    if let Err(Error(UnsupportedScheme(detail), report)) = u {
        // if url is missing the scheme, then we will default to https:
        if !url.contains("://") {
            return Ok(format!("https://{}", url));
        }

        return Err(Error(UnsupportedScheme(detail), report));
    }

    Ok(u?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;

    #[test]
    fn vota_presets() {
        let main = ChainCfg::vota(Network::Mainnet);
        assert_eq!(main.chain_id, "vota-ash");
        assert_eq!(main.rpc_endpoint, "https://vota-rpc.dorafactory.org");

        let test = ChainCfg::vota(Network::Testnet);
        assert_eq!(test.chain_id, "vota-testnet");
        assert_eq!(test.prefix, "dora");
        assert_eq!(test.denom, "peaka");
    }

    #[test]
    fn parse_url_defaults_to_https() {
        assert_eq!(
            parse_url("localhost:26657").unwrap(),
            "https://localhost:26657"
        );
        assert!(parse_url("http://localhost:26657")
            .unwrap()
            .starts_with("http://localhost:26657"));
        assert!(parse_url("ftp://localhost").is_err());
    }

    #[test]
    fn proto_coin_conversion() {
        let coin: Coin = ProtoCoin {
            denom: "peaka".to_string(),
            amount: "1000000000000000000000".to_string(),
        }
        .try_into()
        .unwrap();
        assert_eq!(coin, Coin::new(1_000_000_000_000_000_000_000, "peaka"));

        let res: Result<Coin, ClientError> = ProtoCoin {
            denom: "peaka".to_string(),
            amount: "lots".to_string(),
        }
        .try_into();
        assert_matches!(res, Err(ClientError::Amount { amount }) if amount == "lots");
    }

    #[test]
    fn loads_yaml_config() {
        let path = std::env::temp_dir().join("split_vota_cfg_test.yaml");
        fs::write(
            &path,
            r#"
chain_cfg:
  denom: peaka
  prefix: dora
  chain_id: vota-testnet
  rpc_endpoint: localhost:26657
  gas_prices: 1000000000.0
  gas_adjustment: 1.3
deploy:
  wasm_path: ./artifacts/split_vota.wasm
  admins:
    - dora1kw5qfnrxk9sw5gcyk3emktwtca94e5a4dau8y3
  label: split
"#,
        )
        .unwrap();

        let cfg = Config::from_yaml(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.chain_cfg.chain_id, "vota-testnet");
        assert_eq!(cfg.chain_cfg.rpc_endpoint, "https://localhost:26657");
        assert_eq!(cfg.chain_cfg.gas_adjustment, 1.3);
        assert_eq!(cfg.deploy.label, "split");
        assert_eq!(cfg.deploy.admins.len(), 1);
        assert_eq!(cfg.deploy.memo, "");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn env_overrides_without_deploy_section() {
        let path = std::env::temp_dir().join("split_vota_cfg_env_test.yaml");
        fs::write(
            &path,
            r#"
chain_cfg:
  denom: peaka
  prefix: dora
  chain_id: vota-ash
  rpc_endpoint: https://vota-rpc.dorafactory.org
  gas_prices: 1000000000.0
  gas_adjustment: 1.3
"#,
        )
        .unwrap();

        std::env::set_var("SPLIT_VOTA__DEPLOY__CODE_ID", "12");
        std::env::set_var("SPLIT_VOTA__DEPLOY__CONTRACT_ADDRESS", "dora1existing");

        let cfg = Config::from_yaml(path.to_str().unwrap()).unwrap();

        std::env::remove_var("SPLIT_VOTA__DEPLOY__CODE_ID");
        std::env::remove_var("SPLIT_VOTA__DEPLOY__CONTRACT_ADDRESS");
        fs::remove_file(path).unwrap();

        assert_eq!(cfg.deploy.code_id, Some(12));
        assert_eq!(cfg.deploy.contract_address, Some("dora1existing".to_string()));
        assert_eq!(cfg.deploy.wasm_path, DeployCfg::default().wasm_path);
        assert_eq!(cfg.deploy.label, "split-vota");
    }
}
