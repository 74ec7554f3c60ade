use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Decimals, // -> u32
    Price,    // -> i128
}
