use multiownable_std::interfaces::{MultiownableClient, WitnessCheck};
use multiownable_std_derive::multiownable;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{
    contract, contractimpl, vec, Address, Bytes, Env, String, Symbol, TryFromVal, Vec,
};

#[multiownable]
#[contract]
pub struct Contract;

#[contractimpl]
impl Contract {
    pub fn __constructor(env: &Env, owners: Vec<Address>) {
        multiownable_std::interfaces::transfer_ownership::<Self>(
            env,
            env.current_contract_address(),
            owners,
        );
    }
}

impl WitnessCheck for Contract {
    fn check_witness(_env: &Env, identity: &Address) -> bool {
        identity.require_auth();
        true
    }
}

fn setup_env<'a>() -> (Env, MultiownableClient<'a>, Vec<Address>) {
    let env = Env::default();
    env.mock_all_auths();

    let owners = vec![&env, Address::generate(&env), Address::generate(&env)];
    let contract_id = env.register(Contract, (owners.clone(),));
    let client = MultiownableClient::new(&env, &contract_id);

    (env, client, owners)
}

#[test]
fn multiownable_contract_installs_constructor_owners() {
    let (_env, client, owners) = setup_env();

    assert_eq!(client.generation_of_owners(), 1);
    assert_eq!(client.number_of_owners(), 2);
    assert_eq!(client.all_owners(), owners);
    assert_eq!(client.owner_by_index(&2), Some(owners.get_unchecked(1)));
    assert_eq!(client.index_by_owner(&owners.get_unchecked(0)), 1);
    assert!(client.is_owner(&owners.get_unchecked(1)));
}

#[test]
fn multiownable_contract_votes_through_the_generated_interface() {
    let (env, client, owners) = setup_env();

    let signature = String::from_str(&env, "Pause");
    let args: Vec<Bytes> = Vec::new(&env);

    assert!(!client.call(&owners.get_unchecked(0), &signature, &2, &60, &args));
    assert!(client.cancel_call(&owners.get_unchecked(0), &signature, &2, &60, &args));
    assert!(!client.call(&owners.get_unchecked(0), &signature, &2, &60, &args));
    assert!(client.call(&owners.get_unchecked(1), &signature, &2, &60, &args));
}

#[test]
fn multiownable_contract_dispatches_named_operations() {
    let (env, client, _) = setup_env();

    let count = client.invoke(&Symbol::new(&env, "GetNumberOfOwners"), &Vec::new(&env));
    assert_eq!(u32::try_from_val(&env, &count).unwrap(), 2);
}

#[test]
fn multiownable_brings_the_interface_into_scope() {
    let (env, client, owners) = setup_env();

    let all_owners = env.as_contract(&client.address, || Contract::all_owners(&env));

    assert_eq!(all_owners, owners);
}
