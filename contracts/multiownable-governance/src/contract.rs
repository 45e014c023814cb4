use crate::event::ExecutedEvent;
use multiownable_std::error::MultiownableError;
use multiownable_std::events::Event;
use multiownable_std::interfaces::{self, WitnessCheck};
use multiownable_std::multiownable;
use multiownable_std::ttl::extend_instance_ttl;
use multiownable_std::types::majority;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, vec, Address, Env, String, Symbol, Val, Vec,
};

const EXECUTE: &str = "execute";

/// Ledger seconds an `execute` proposal stays open after its first vote.
pub const EXECUTE_TIMEOUT: u64 = 1200;

#[multiownable]
#[contract]
pub struct MultiownableGovernance;

#[contractimpl]
impl MultiownableGovernance {
    /// Installs the first owner set.
    pub fn __constructor(env: Env, owners: Vec<Address>) {
        if !interfaces::transfer_ownership::<Self>(&env, env.current_contract_address(), owners) {
            panic_with_error!(env, MultiownableError::EmptyOwnerSet);
        }
    }

    /// Votes for invoking `func` on `contract` with `args`.
    ///
    /// Needs the same majority of owners as a rotation. The vote that reaches it performs the
    /// invocation and returns its result. Every other vote returns `None`.
    pub fn execute(
        env: Env,
        initiator: Address,
        contract: Address,
        func: Symbol,
        args: Vec<Val>,
    ) -> Option<Val> {
        let vote_args = vec![
            &env,
            contract.clone().to_xdr(&env),
            func.clone().to_xdr(&env),
            args.clone().to_xdr(&env),
        ];

        let accepted = interfaces::call::<Self>(
            &env,
            initiator,
            String::from_str(&env, EXECUTE),
            majority(interfaces::number_of_owners(&env)),
            EXECUTE_TIMEOUT,
            vote_args,
        );

        if !accepted {
            return None;
        }

        log!(&env, "executing", contract, func);

        let res: Val = env.invoke_contract(&contract, &func, args.clone());

        extend_instance_ttl(&env);

        ExecutedEvent {
            contract,
            func,
            args,
        }
        .emit(&env);

        Some(res)
    }
}

impl WitnessCheck for MultiownableGovernance {
    fn check_witness(_env: &Env, identity: &Address) -> bool {
        identity.require_auth();
        true
    }
}
