use fund_me::{FundMe, FundMeClient};
use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
use soroban_sdk::{Address, Env};

use crate::config::NetworkRegistry;
use crate::errors::{ConfigError, DeployError};

/// Fixed-point scale of the development mock feed.
pub const MOCK_DECIMALS: u32 = 8;
/// Initial mock quote: 2000 USD per token.
pub const MOCK_INITIAL_PRICE: i128 = 2_000 * 100_000_000;

/// Constructor arguments the funding contract was deployed with, in call
/// order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstructorArgs {
    pub owner: Address,
    pub price_feed: Address,
    pub token: Address,
}

/// Write-once record of a completed deployment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeploymentRecord {
    pub contract_address: Address,
    pub constructor_args: ConstructorArgs,
}

/// Output of the two-step deployment pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub price_feed: Address,
    pub fund_me: DeploymentRecord,
}

/// Resolves price feeds per network and drives deployment against a Soroban
/// environment. Holds the registry immutably and caches the development mock
/// so one configurator never registers it twice.
pub struct Configurator {
    registry: NetworkRegistry,
    mock_feed: Option<Address>,
}

impl Configurator {
    pub fn new(registry: NetworkRegistry) -> Self {
        Self {
            registry,
            mock_feed: None,
        }
    }

    /// Resolve the price feed backing `network`.
    ///
    /// Development networks get the mock feed registered in `env`, reused
    /// across calls. Live networks resolve from the registry; the configured
    /// id must be a valid contract strkey.
    pub fn resolve_price_feed(&mut self, env: &Env, network: &str) -> Result<Address, ConfigError> {
        let profile = self
            .registry
            .get(network)
            .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))?;

        if profile.development {
            if let Some(feed) = &self.mock_feed {
                return Ok(feed.clone());
            }
            let feed = register_mock_feed(env);
            log::info!("registered mock price feed {feed:?} for network {network}");
            self.mock_feed = Some(feed.clone());
            return Ok(feed);
        }

        let configured = profile
            .price_feed
            .as_deref()
            .ok_or_else(|| ConfigError::MissingPriceFeed(network.to_string()))?;
        Ok(Address::from_str(env, configured))
    }

    /// The deployment pipeline: resolve the feed first (registering the mock
    /// on development networks), then deploy the funding contract against it.
    pub fn deploy_stack(
        &mut self,
        env: &Env,
        network: &str,
        owner: &Address,
        token: &Address,
    ) -> Result<Deployment, DeployError> {
        let price_feed = self.resolve_price_feed(env, network)?;
        let fund_me = deploy_funding_contract(env, owner, &price_feed, token)?;
        Ok(Deployment {
            price_feed,
            fund_me,
        })
    }
}

fn register_mock_feed(env: &Env) -> Address {
    let feed = env.register(MockPriceFeed, ());
    MockPriceFeedClient::new(env, &feed).initialize(&MOCK_DECIMALS, &MOCK_INITIAL_PRICE);
    feed
}

/// Register the funding contract and run its constructor-equivalent
/// initialization with the resolved arguments.
pub fn deploy_funding_contract(
    env: &Env,
    owner: &Address,
    price_feed: &Address,
    token: &Address,
) -> Result<DeploymentRecord, DeployError> {
    let contract_address = env.register(FundMe, ());
    let client = FundMeClient::new(env, &contract_address);

    match client.try_initialize(owner, price_feed, token) {
        Ok(_) => {}
        Err(Ok(rejected)) => return Err(DeployError::Rejected(rejected)),
        Err(Err(invoke)) => return Err(DeployError::Host(invoke)),
    }
    log::info!("deployed funding contract {contract_address:?}");

    Ok(DeploymentRecord {
        contract_address,
        constructor_args: ConstructorArgs {
            owner: owner.clone(),
            price_feed: price_feed.clone(),
            token: token.clone(),
        },
    })
}
