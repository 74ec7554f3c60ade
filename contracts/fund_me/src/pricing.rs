use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env};

use crate::errors::FundMeError;

/// Convert `amount` of the contribution token into USD at the feed's latest
/// quote, keeping the token's smallest-unit scale.
pub fn usd_value(env: &Env, feed: &Address, amount: i128) -> Result<i128, FundMeError> {
    let feed = PriceFeedClient::new(env, feed);

    let quote = feed.lastprice().ok_or(FundMeError::PriceUnavailable)?;
    if quote.price <= 0 {
        return Err(FundMeError::PriceUnavailable);
    }

    let scale = 10i128
        .checked_pow(feed.decimals())
        .ok_or(FundMeError::MathOverflow)?;

    amount
        .checked_mul(quote.price)
        .and_then(|value| value.checked_div(scale))
        .ok_or(FundMeError::MathOverflow)
}
