use crate::ensure;
use crate::error::MultiownableError;
use crate::events::Event;
use crate::interfaces::{owners, voting, WitnessCheck};
use core::fmt::Debug;
use soroban_sdk::{
    log, Address, Bytes, Env, IntoVal, String, Symbol, Topics, TryFromVal, Val, Vec,
};

/// Named operations reachable through [`invoke`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    TransferOwnership,
    Call,
    CancelCall,
    GetNumberOfOwners,
    GetOwnerByIndex,
    GetIndexByOwner,
    GetGenerationOfOwners,
    GetAllOwners,
    IsOwner,
}

impl Operation {
    const ALL: [Self; 9] = [
        Self::TransferOwnership,
        Self::Call,
        Self::CancelCall,
        Self::GetNumberOfOwners,
        Self::GetOwnerByIndex,
        Self::GetIndexByOwner,
        Self::GetGenerationOfOwners,
        Self::GetAllOwners,
        Self::IsOwner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TransferOwnership => "TransferOwnership",
            Self::Call => "Call",
            Self::CancelCall => "CancelCall",
            Self::GetNumberOfOwners => "GetNumberOfOwners",
            Self::GetOwnerByIndex => "GetOwnerByIndex",
            Self::GetIndexByOwner => "GetIndexByOwner",
            Self::GetGenerationOfOwners => "GetGenerationOfOwners",
            Self::GetAllOwners => "GetAllOwners",
            Self::IsOwner => "IsOwner",
        }
    }

    pub fn from_symbol(env: &Env, symbol: &Symbol) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| *symbol == Symbol::new(env, operation.name()))
    }
}

/// Runs the operation named `operation` with positional `args`.
///
/// Argument layouts:
/// - `TransferOwnership`: initiator, owner list
/// - `Call` / `CancelCall`: initiator, signature, required votes, timeout, then any number of byte arguments
/// - `GetOwnerByIndex`: index
/// - `GetIndexByOwner` / `IsOwner`: account
/// - the remaining getters take no arguments
///
/// An unknown name or a malformed argument list returns `false` and emits a [`DispatchFailedEvent`].
pub fn invoke<T: WitnessCheck>(env: &Env, operation: Symbol, args: Vec<Val>) -> Val {
    log!(env, "invoke", operation, args.len());

    match dispatch::<T>(env, &operation, &args) {
        Ok(result) => result,
        Err(err) => {
            DispatchFailedEvent {
                operation,
                error: err,
            }
            .emit(env);

            false.into_val(env)
        }
    }
}

fn dispatch<T: WitnessCheck>(
    env: &Env,
    operation: &Symbol,
    args: &Vec<Val>,
) -> Result<Val, MultiownableError> {
    let operation =
        Operation::from_symbol(env, operation).ok_or(MultiownableError::UnknownOperation)?;

    let result = match operation {
        Operation::TransferOwnership => {
            expect_arity(args, 2)?;
            owners::transfer_ownership::<T>(env, arg(env, args, 0)?, arg(env, args, 1)?)
                .into_val(env)
        }
        Operation::Call => {
            let (initiator, signature, required_votes, timeout, call_args) =
                vote_args(env, args)?;
            voting::call::<T>(env, initiator, signature, required_votes, timeout, call_args)
                .into_val(env)
        }
        Operation::CancelCall => {
            let (initiator, signature, required_votes, timeout, call_args) =
                vote_args(env, args)?;
            voting::cancel_call::<T>(env, initiator, signature, required_votes, timeout, call_args)
                .into_val(env)
        }
        Operation::GetNumberOfOwners => {
            expect_arity(args, 0)?;
            owners::number_of_owners(env).into_val(env)
        }
        Operation::GetOwnerByIndex => {
            expect_arity(args, 1)?;
            owners::owner_by_index(env, arg(env, args, 0)?).into_val(env)
        }
        Operation::GetIndexByOwner => {
            expect_arity(args, 1)?;
            owners::index_by_owner(env, &arg(env, args, 0)?).into_val(env)
        }
        Operation::GetGenerationOfOwners => {
            expect_arity(args, 0)?;
            owners::generation_of_owners(env).into_val(env)
        }
        Operation::GetAllOwners => {
            expect_arity(args, 0)?;
            owners::all_owners(env).into_val(env)
        }
        Operation::IsOwner => {
            expect_arity(args, 1)?;
            owners::is_owner(env, &arg(env, args, 0)?).into_val(env)
        }
    };

    Ok(result)
}

type VoteArgs = (Address, String, u32, u64, Vec<Bytes>);

fn vote_args(env: &Env, args: &Vec<Val>) -> Result<VoteArgs, MultiownableError> {
    ensure!(args.len() >= 4, MultiownableError::InvalidArguments);

    let mut call_args = Vec::new(env);
    for position in 4..args.len() {
        call_args.push_back(arg(env, args, position)?);
    }

    Ok((
        arg(env, args, 0)?,
        arg(env, args, 1)?,
        arg(env, args, 2)?,
        arg(env, args, 3)?,
        call_args,
    ))
}

fn expect_arity(args: &Vec<Val>, arity: u32) -> Result<(), MultiownableError> {
    ensure!(args.len() == arity, MultiownableError::InvalidArguments);
    Ok(())
}

fn arg<V>(env: &Env, args: &Vec<Val>, position: u32) -> Result<V, MultiownableError>
where
    V: TryFromVal<Env, Val>,
{
    let val = args
        .get(position)
        .ok_or(MultiownableError::InvalidArguments)?;

    V::try_from_val(env, &val).map_err(|_| MultiownableError::InvalidArguments)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchFailedEvent {
    pub operation: Symbol,
    pub error: MultiownableError,
}

impl Event for DispatchFailedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "dispatch_failed"), self.operation.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.error as u32,)
    }
}

#[cfg(test)]
mod test {
    use super::{DispatchFailedEvent, Operation};
    use crate::error::MultiownableError;
    use crate::events::assert_last_event;
    use crate::interfaces::testdata::{Contract, ContractClient};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{vec, Address, Bytes, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec};

    fn setup_env<'a>() -> (Env, ContractClient<'a>, Address) {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(Contract, ());
        let client = ContractClient::new(&env, &contract_id);

        let owner = Address::generate(&env);
        client.transfer_ownership(&owner, &vec![&env, owner.clone()]);

        (env, client, owner)
    }

    fn vote_args(env: &Env, owner: &Address) -> Vec<Val> {
        vec![
            env,
            owner.into_val(env),
            String::from_str(env, "Pause").into_val(env),
            1u32.into_val(env),
            60u64.into_val(env),
            Bytes::from_array(env, &[9]).into_val(env),
        ]
    }

    #[test]
    fn operation_names_resolve_to_operations() {
        let env = Env::default();

        for operation in Operation::ALL {
            assert_eq!(
                Operation::from_symbol(&env, &Symbol::new(&env, operation.name())),
                Some(operation)
            );
        }

        assert_eq!(Operation::from_symbol(&env, &Symbol::new(&env, "call")), None);
    }

    #[test]
    fn invoke_forwards_votes() {
        let (env, client, owner) = setup_env();

        let res = client.invoke(&Symbol::new(&env, "Call"), &vote_args(&env, &owner));

        assert!(bool::try_from_val(&env, &res).unwrap());
    }

    #[test]
    fn invoke_reports_a_rejected_witness_as_false() {
        let (env, client, owner) = setup_env();
        client.revoke_witness(&owner);

        let res = client.invoke(&Symbol::new(&env, "Call"), &vote_args(&env, &owner));

        assert!(!bool::try_from_val(&env, &res).unwrap());
    }

    #[test]
    fn invoke_reports_wrong_argument_types() {
        let (env, client, _) = setup_env();
        let operation = Symbol::new(&env, "GetOwnerByIndex");

        let res = client.invoke(&operation, &vec![&env, Symbol::new(&env, "one").into_val(&env)]);

        assert!(!bool::try_from_val(&env, &res).unwrap());
        assert_last_event(
            &env,
            &client.address,
            DispatchFailedEvent {
                operation,
                error: MultiownableError::InvalidArguments,
            },
        );
    }

    #[test]
    fn invoke_reports_unknown_operations() {
        let (env, client, _) = setup_env();
        let operation = Symbol::new(&env, "Upgrade");

        let res = client.invoke(&operation, &Vec::new(&env));

        assert!(!bool::try_from_val(&env, &res).unwrap());
        assert_last_event(
            &env,
            &client.address,
            DispatchFailedEvent {
                operation,
                error: MultiownableError::UnknownOperation,
            },
        );
    }
}
