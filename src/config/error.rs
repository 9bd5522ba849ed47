use config::ConfigError as _ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error parsing url")]
    UrlParse(#[from] tendermint_rpc::Error),

    #[error(transparent)]
    Config(#[from] _ConfigError),
}
