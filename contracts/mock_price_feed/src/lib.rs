#![no_std]

mod errors;
mod storage;

use errors::MockPriceFeedError;
use price_feed_interface::{PriceData, PriceFeed};
use soroban_sdk::{contract, contractimpl, Env};
use storage::DataKey;

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Initialize the feed with its fixed-point scale and an initial quote
    pub fn initialize(env: Env, decimals: u32, price: i128) -> Result<(), MockPriceFeedError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Price) {
            return Err(MockPriceFeedError::AlreadyInitialized);
        }

        if price <= 0 {
            return Err(MockPriceFeedError::InvalidPrice);
        }

        env.storage().instance().set(&DataKey::Decimals, &decimals);
        env.storage().instance().set(&DataKey::Price, &price);

        Ok(())
    }

    /// Replace the current quote
    pub fn set_price(env: Env, price: i128) -> Result<(), MockPriceFeedError> {
        if !env.storage().instance().has(&DataKey::Price) {
            return Err(MockPriceFeedError::NotInitialized);
        }

        if price <= 0 {
            return Err(MockPriceFeedError::InvalidPrice);
        }

        env.storage().instance().set(&DataKey::Price, &price);

        Ok(())
    }
}

#[contractimpl]
impl PriceFeed for MockPriceFeed {
    fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(0)
    }

    fn lastprice(env: Env) -> Option<PriceData> {
        let price: i128 = env.storage().instance().get(&DataKey::Price)?;
        Some(PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        })
    }
}
