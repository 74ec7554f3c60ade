#![no_std]

mod errors;
mod events;
mod pricing;
mod storage;
mod token;

pub use errors::FundMeError;

use events::{FundedEvent, InitializedEvent, WithdrawnEvent};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use storage::DataKey;

/// Smallest accepted contribution, in USD at the token's smallest-unit scale
/// (7 decimals).
pub const MINIMUM_USD: i128 = 50 * 10_000_000;

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Initialize the contract with its owner, price feed and contribution
    /// token
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        token: Address,
    ) -> Result<(), FundMeError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(FundMeError::AlreadyInitialized);
        }

        // Require owner authorization
        owner.require_auth();

        // Store the constructor arguments
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::PriceFeed, &price_feed);
        env.storage().instance().set(&DataKey::Token, &token);

        // Start with an empty funder order
        env.storage()
            .persistent()
            .set(&DataKey::Funders, &Vec::<Address>::new(&env));

        InitializedEvent {
            owner,
            price_feed,
            token,
        }
        .publish(&env);

        Ok(())
    }

    /// Contribute `amount` of the contribution token.
    ///
    /// The amount must be worth at least [`MINIMUM_USD`] at the feed's latest
    /// quote. First-time funders are appended to the funder order; repeat
    /// contributions accumulate without a second entry.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        // Check if contract is initialized
        if !env.storage().instance().has(&DataKey::Owner) {
            return Err(FundMeError::NotInitialized);
        }

        // Require funder authorization
        funder.require_auth();

        // Enforce the USD minimum
        let price_feed: Address = env
            .storage()
            .instance()
            .get(&DataKey::PriceFeed)
            .ok_or(FundMeError::NotInitialized)?;
        let usd_value = pricing::usd_value(&env, &price_feed, amount)?;
        if usd_value < MINIMUM_USD {
            return Err(FundMeError::InsufficientContribution);
        }

        // Update the ledger before moving tokens
        let amount_key = DataKey::AmountFunded(funder.clone());
        let funded_so_far: i128 = env.storage().persistent().get(&amount_key).unwrap_or(0);
        let total = funded_so_far
            .checked_add(amount)
            .ok_or(FundMeError::MathOverflow)?;

        // First contribution places the funder at the end of the order
        if funded_so_far == 0 {
            let mut funders: Vec<Address> = env
                .storage()
                .persistent()
                .get(&DataKey::Funders)
                .unwrap_or(Vec::new(&env));
            funders.push_back(funder.clone());
            env.storage().persistent().set(&DataKey::Funders, &funders);
        }
        env.storage().persistent().set(&amount_key, &total);

        // Transfer tokens from funder to contract
        let token_address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FundMeError::NotInitialized)?;
        let contract_address = env.current_contract_address();
        token::transfer(&env, &token_address, &funder, &contract_address, &amount);

        FundedEvent {
            funder,
            amount,
            usd_value,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw the entire contract balance to the owner and reset the
    /// ledger (owner only)
    pub fn withdraw(env: Env, caller: Address) -> Result<(), FundMeError> {
        let (token_address, owner) = Self::require_owner(&env, &caller)?;

        // Zero every funder's entry, then empty the order
        let funders: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Funders)
            .unwrap_or(Vec::new(&env));
        let funder_count = funders.len();
        for funder in funders.iter() {
            env.storage()
                .persistent()
                .set(&DataKey::AmountFunded(funder), &0i128);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Funders, &Vec::<Address>::new(&env));

        let amount = Self::drain(&env, &token_address, &owner);

        WithdrawnEvent {
            owner,
            amount,
            funder_count,
        }
        .publish(&env);

        Ok(())
    }

    /// Cost-optimized withdrawal: identical observable outcome to
    /// [`FundMe::withdraw`], but releases each funder entry instead of
    /// rewriting it with a zero.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), FundMeError> {
        let (token_address, owner) = Self::require_owner(&env, &caller)?;

        // Snapshot the order once, then drop the entries outright
        let funders: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Funders)
            .unwrap_or(Vec::new(&env));
        let funder_count = funders.len();
        for funder in funders.iter() {
            env.storage()
                .persistent()
                .remove(&DataKey::AmountFunded(funder));
        }
        env.storage()
            .persistent()
            .set(&DataKey::Funders, &Vec::<Address>::new(&env));

        let amount = Self::drain(&env, &token_address, &owner);

        WithdrawnEvent {
            owner,
            amount,
            funder_count,
        }
        .publish(&env);

        Ok(())
    }

    /// Get the configured price feed address
    pub fn get_price_feed(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::PriceFeed)
            .ok_or(FundMeError::NotInitialized)
    }

    /// Get the configured contribution token address
    pub fn get_token(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FundMeError::NotInitialized)
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(FundMeError::NotInitialized)
    }

    /// Get the funder at `index` in first-contribution order
    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        let funders: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Funders)
            .unwrap_or(Vec::new(&env));
        funders
            .get(index)
            .ok_or(FundMeError::FunderIndexOutOfBounds)
    }

    /// Cumulative contribution of `funder` in the current epoch, 0 if the
    /// address never funded or the ledger was reset
    pub fn get_funder_amount(env: Env, funder: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::AmountFunded(funder))
            .unwrap_or(0)
    }

    /// Verify `caller` is the stored owner and collect the addresses both
    /// withdrawal paths need.
    fn require_owner(env: &Env, caller: &Address) -> Result<(Address, Address), FundMeError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(FundMeError::NotInitialized)?;

        // Verify owner identity
        if caller != &owner {
            return Err(FundMeError::NotOwner);
        }

        // Require owner authorization
        caller.require_auth();

        let token_address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FundMeError::NotInitialized)?;

        Ok((token_address, owner))
    }

    /// Move the whole contract balance to the owner, returning the amount
    /// moved.
    fn drain(env: &Env, token_address: &Address, owner: &Address) -> i128 {
        let contract_address = env.current_contract_address();
        let amount = token::balance(env, token_address, &contract_address);
        if amount > 0 {
            token::transfer(env, token_address, &contract_address, owner, &amount);
        }
        amount
    }
}
