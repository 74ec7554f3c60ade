#![no_std]

use soroban_sdk::{contractclient, contracttype, Env};

/// A single price quote as reported by a feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Quote in USD, fixed-point with `decimals()` fractional digits.
    pub price: i128,
    /// Ledger timestamp at which the quote was taken.
    pub timestamp: u64,
}

/// Oracle surface the funding contract consumes.
///
/// Live networks point at a conforming on-chain feed; development networks
/// back it with the mock feed registered in the local environment.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Number of fractional digits in reported prices.
    fn decimals(env: Env) -> u32;

    /// Most recent quote, or `None` if the feed has never been quoted.
    fn lastprice(env: Env) -> Option<PriceData>;
}
