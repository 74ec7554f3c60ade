use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,                 // -> Address
    PriceFeed,             // -> Address
    Token,                 // -> Address
    Funders,               // -> Vec<Address>, first-contribution order
    AmountFunded(Address), // funder -> i128, cumulative for the current epoch
}
