use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub price_feed: Address,
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundedEvent {
    #[topic]
    pub funder: Address,
    pub amount: i128,
    pub usd_value: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    #[topic]
    pub owner: Address,
    pub amount: i128,
    pub funder_count: u32,
}
