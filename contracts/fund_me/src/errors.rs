use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InsufficientContribution = 4,
    PriceUnavailable = 5,
    MathOverflow = 6,
    FunderIndexOutOfBounds = 7,
}
