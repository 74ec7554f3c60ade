use fund_me::FundMeError;
use soroban_sdk::InvokeError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("no deployment profile for network `{0}`")]
    UnknownNetwork(String),
    #[error("network `{0}` has no price feed configured")]
    MissingPriceFeed(String),
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("funding contract rejected deployment: {0:?}")]
    Rejected(FundMeError),
    #[error("deployment invocation failed in the host: {0:?}")]
    Host(InvokeError),
}
