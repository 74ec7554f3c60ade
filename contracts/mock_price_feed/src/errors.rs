use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPriceFeedError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidPrice = 3,
}
