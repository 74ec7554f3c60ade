#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use deployer::{Configurator, NetworkRegistry, MOCK_INITIAL_PRICE};
use fund_me::{FundMeClient, FundMeError};
use mock_price_feed::MockPriceFeedClient;

const SEND_VALUE: i128 = 10_000_000; // 1 token, 7 decimals

fn create_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let contract_address = env.register_stellar_asset_contract_v2(admin.clone());
    (
        TokenClient::new(env, &contract_address.address()),
        StellarAssetClient::new(env, &contract_address.address()),
    )
}

#[test]
fn test_funding_protocol_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    // Identities
    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let funder = Address::generate(&env);

    // Contribution token
    let (token_client, token_admin_client) = create_token_contract(&env, &admin);
    token_admin_client.mint(&funder, &(10 * SEND_VALUE));

    // Deploy the stack against a development network: the configurator
    // registers the mock feed, then the funding contract on top of it
    let mut configurator = Configurator::new(NetworkRegistry::well_known());
    let deployment = configurator
        .deploy_stack(&env, "local", &owner, &token_client.address)
        .unwrap();
    let client = FundMeClient::new(&env, &deployment.fund_me.contract_address);

    // The contract reports the mock feed it was deployed with, and the mock
    // answers with the initial quote
    assert_eq!(client.get_price_feed(), deployment.price_feed);
    let feed_client = MockPriceFeedClient::new(&env, &deployment.price_feed);
    assert_eq!(feed_client.lastprice().unwrap().price, MOCK_INITIAL_PRICE);

    // An under-minimum contribution is rejected without touching the ledger
    let result = client.try_fund(&funder, &10_000);
    assert_eq!(result, Err(Ok(FundMeError::InsufficientContribution)));
    assert_eq!(client.get_funder_amount(&funder), 0);

    // A real contribution lands in the ledger and the contract balance
    client.fund(&funder, &SEND_VALUE);
    assert_eq!(client.get_funder_amount(&funder), SEND_VALUE);
    assert_eq!(client.get_funder(&0), funder);
    assert_eq!(token_client.balance(&funder), 9 * SEND_VALUE);
    assert_eq!(token_client.balance(&client.address), SEND_VALUE);

    // Only the owner may withdraw
    let result = client.try_withdraw(&funder);
    assert_eq!(result, Err(Ok(FundMeError::NotOwner)));

    // Owner withdrawal drains the contract and resets the ledger
    client.withdraw(&owner);
    assert_eq!(token_client.balance(&client.address), 0);
    assert_eq!(token_client.balance(&owner), SEND_VALUE);
    assert_eq!(client.get_funder_amount(&funder), 0);
    let result = client.try_get_funder(&0);
    assert_eq!(result, Err(Ok(FundMeError::FunderIndexOutOfBounds)));
}

#[test]
fn test_funding_protocol_e2e_cheaper_withdraw() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);

    let (token_client, token_admin_client) = create_token_contract(&env, &admin);

    let mut configurator = Configurator::new(NetworkRegistry::well_known());
    let deployment = configurator
        .deploy_stack(&env, "standalone", &owner, &token_client.address)
        .unwrap();
    let client = FundMeClient::new(&env, &deployment.fund_me.contract_address);

    // Three contributors this time
    let mut funders = std::vec::Vec::new();
    for _ in 0..3 {
        let account = Address::generate(&env);
        token_admin_client.mint(&account, &SEND_VALUE);
        client.fund(&account, &SEND_VALUE);
        funders.push(account);
    }
    assert_eq!(token_client.balance(&client.address), 3 * SEND_VALUE);

    client.cheaper_withdraw(&owner);

    assert_eq!(token_client.balance(&client.address), 0);
    assert_eq!(token_client.balance(&owner), 3 * SEND_VALUE);
    for account in &funders {
        assert_eq!(client.get_funder_amount(account), 0);
    }
    let result = client.try_get_funder(&0);
    assert_eq!(result, Err(Ok(FundMeError::FunderIndexOutOfBounds)));
}
