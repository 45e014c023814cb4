use multiownable_governance::{MultiownableGovernance, MultiownableGovernanceClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

#[contract]
pub struct TestTarget;

#[contractimpl]
impl TestTarget {
    pub fn set_value(env: Env, value: u32) -> u32 {
        env.storage()
            .instance()
            .set(&Symbol::new(&env, "value"), &value);
        value
    }

    pub fn value(env: Env) -> Option<u32> {
        env.storage().instance().get(&Symbol::new(&env, "value"))
    }

    pub fn failing(_env: Env) {
        panic!("This method should fail");
    }
}

pub fn generate_owners(env: &Env, count: u32) -> Vec<Address> {
    let mut owners = Vec::new(env);
    for _ in 0..count {
        owners.push_back(Address::generate(env));
    }
    owners
}

/// Governance contract with `owner_count` freshly generated owners and all auths mocked.
pub fn setup_env<'a>(owner_count: u32) -> (Env, MultiownableGovernanceClient<'a>, Vec<Address>) {
    let env = Env::default();
    env.mock_all_auths();

    let owners = generate_owners(&env, owner_count);
    let contract_id = env.register(MultiownableGovernance, (owners.clone(),));
    let client = MultiownableGovernanceClient::new(&env, &contract_id);

    (env, client, owners)
}

pub fn setup_target<'a>(env: &Env) -> TestTargetClient<'a> {
    let contract_id = env.register(TestTarget, ());
    TestTargetClient::new(env, &contract_id)
}
