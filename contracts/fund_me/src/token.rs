use soroban_sdk::{token::TokenClient, Address, Env};

pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    let client = TokenClient::new(env, token);
    client.transfer(from, to, amount);
}

pub fn balance(env: &Env, token: &Address, holder: &Address) -> i128 {
    let client = TokenClient::new(env, token);
    client.balance(holder)
}
