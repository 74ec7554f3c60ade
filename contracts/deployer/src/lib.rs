mod config;
mod deploy;
mod errors;

pub use config::{NetworkProfile, NetworkRegistry};
pub use deploy::{
    deploy_funding_contract, Configurator, ConstructorArgs, Deployment, DeploymentRecord,
    MOCK_DECIMALS, MOCK_INITIAL_PRICE,
};
pub use errors::{ConfigError, DeployError};
