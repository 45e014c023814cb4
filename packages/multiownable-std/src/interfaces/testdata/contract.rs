#![allow(clippy::redundant_pub_crate)] // contract macro generates pub types

use crate::interfaces::{self, MultiownableInterface, WitnessCheck};
use soroban_sdk::{
    contract, contractimpl, contracttype, Address, Bytes, Env, String, Symbol, Val, Vec,
};

#[contract]
pub struct Contract;

#[contracttype]
enum DataKey {
    RevokedWitness(Address),
}

#[contractimpl]
impl Contract {
    /// Makes every later witness check for `identity` fail, as if its signature were missing.
    pub fn revoke_witness(env: &Env, identity: Address) {
        env.storage()
            .instance()
            .set(&DataKey::RevokedWitness(identity), &());
    }
}

impl WitnessCheck for Contract {
    fn check_witness(env: &Env, identity: &Address) -> bool {
        if env
            .storage()
            .instance()
            .has(&DataKey::RevokedWitness(identity.clone()))
        {
            return false;
        }

        identity.require_auth();
        true
    }
}

#[contractimpl]
impl MultiownableInterface for Contract {
    fn number_of_owners(env: &Env) -> u32 {
        interfaces::number_of_owners(env)
    }

    fn owner_by_index(env: &Env, index: u32) -> Option<Address> {
        interfaces::owner_by_index(env, index)
    }

    fn index_by_owner(env: &Env, owner: Address) -> u32 {
        interfaces::index_by_owner(env, &owner)
    }

    fn generation_of_owners(env: &Env) -> u64 {
        interfaces::generation_of_owners(env)
    }

    fn all_owners(env: &Env) -> Vec<Address> {
        interfaces::all_owners(env)
    }

    fn is_owner(env: &Env, account: Address) -> bool {
        interfaces::is_owner(env, &account)
    }

    fn transfer_ownership(env: &Env, initiator: Address, new_owners: Vec<Address>) -> bool {
        interfaces::transfer_ownership::<Self>(env, initiator, new_owners)
    }

    fn call(
        env: &Env,
        initiator: Address,
        function_signature: String,
        required_votes: u32,
        timeout: u64,
        args: Vec<Bytes>,
    ) -> bool {
        interfaces::call::<Self>(env, initiator, function_signature, required_votes, timeout, args)
    }

    fn cancel_call(
        env: &Env,
        initiator: Address,
        function_signature: String,
        required_votes: u32,
        timeout: u64,
        args: Vec<Bytes>,
    ) -> bool {
        interfaces::cancel_call::<Self>(
            env,
            initiator,
            function_signature,
            required_votes,
            timeout,
            args,
        )
    }

    fn invoke(env: &Env, operation: Symbol, args: Vec<Val>) -> Val {
        interfaces::invoke::<Self>(env, operation, args)
    }
}
