use crate::ensure;
use crate::error::MultiownableError;
use crate::events::Event;
use crate::interfaces::storage::DataKey;
use crate::interfaces::{voting, WitnessCheck};
use crate::ttl::extend_instance_ttl;
use crate::types::{majority, ROTATION_TIMEOUT, TRANSFER_OWNERSHIP};
use core::fmt::Debug;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{log, Address, Env, IntoVal, String, Symbol, Topics, Val, Vec};

/// Number of owners in the current generation, 0 before the first owner set is installed.
pub fn number_of_owners(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Multiownable_NumberOfOwners)
        .unwrap_or(0)
}

/// Owner stored at the 1-based `index`. Index 0 and indices past the owner count are never occupied.
pub fn owner_by_index(env: &Env, index: u32) -> Option<Address> {
    if index == 0 || index > number_of_owners(env) {
        return None;
    }

    env.storage()
        .instance()
        .get(&DataKey::Multiownable_Owners(index))
}

/// Index of `owner`, or 0 if it is not part of the current owner set.
pub fn index_by_owner(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Multiownable_IndexesOfOwners(owner.clone()))
        .unwrap_or(0)
}

pub fn generation_of_owners(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Multiownable_GenerationOfOwners)
        .unwrap_or(0)
}

/// Current owners in index order.
pub fn all_owners(env: &Env) -> Vec<Address> {
    let mut owners = Vec::new(env);

    for index in 1..=number_of_owners(env) {
        if let Some(owner) = owner_by_index(env, index) {
            owners.push_back(owner);
        }
    }

    owners
}

pub fn is_owner(env: &Env, account: &Address) -> bool {
    index_by_owner(env, account) != 0
}

/// Replaces the owner set with `new_owners`.
///
/// The first owner set (generation 0) is installed unconditionally. Every later rotation is a vote
/// of its own: this call counts as `initiator`'s vote, and the set is only replaced once a majority
/// of the current owners proposed the same list within [`ROTATION_TIMEOUT`].
pub fn transfer_ownership<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    new_owners: Vec<Address>,
) -> bool {
    match try_transfer_ownership::<T>(env, initiator, new_owners) {
        Ok(transferred) => transferred,
        Err(err) => {
            log!(env, "ownership transfer rejected", err as u32);
            false
        }
    }
}

pub(crate) fn try_transfer_ownership<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    new_owners: Vec<Address>,
) -> Result<bool, MultiownableError> {
    ensure!(!new_owners.is_empty(), MultiownableError::EmptyOwnerSet);

    if generation_of_owners(env) > 0 {
        let accepted = voting::try_call::<T>(
            env,
            initiator,
            String::from_str(env, TRANSFER_OWNERSHIP),
            majority(number_of_owners(env)),
            ROTATION_TIMEOUT,
            rotation_args(env, &new_owners),
        )?;

        if !accepted {
            return Ok(false);
        }
    }

    install_owners(env, &new_owners);

    Ok(true)
}

/// Each proposed owner is one vote argument, so two rotations only share a tally if they propose
/// the same owners in the same order.
fn rotation_args(env: &Env, new_owners: &Vec<Address>) -> Vec<soroban_sdk::Bytes> {
    let mut args = Vec::new(env);

    for owner in new_owners.iter() {
        args.push_back(owner.to_xdr(env));
    }

    args
}

fn install_owners(env: &Env, new_owners: &Vec<Address>) {
    let storage = env.storage().instance();

    for index in 1..=number_of_owners(env) {
        if let Some(owner) = storage.get::<_, Address>(&DataKey::Multiownable_Owners(index)) {
            storage.remove(&DataKey::Multiownable_IndexesOfOwners(owner));
        }
        storage.remove(&DataKey::Multiownable_Owners(index));
    }

    // duplicates keep every forward slot; the reverse index points at the last occurrence
    for (position, owner) in new_owners.iter().enumerate() {
        let index = position as u32 + 1;

        storage.set(&DataKey::Multiownable_Owners(index), &owner);
        storage.set(&DataKey::Multiownable_IndexesOfOwners(owner), &index);
    }

    let generation = generation_of_owners(env) + 1;

    storage.set(&DataKey::Multiownable_NumberOfOwners, &new_owners.len());
    storage.set(&DataKey::Multiownable_GenerationOfOwners, &generation);

    extend_instance_ttl(env);

    OwnershipTransferredEvent {
        generation,
        owners: new_owners.clone(),
    }
    .emit(env);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    pub generation: u64,
    pub owners: Vec<Address>,
}

impl Event for OwnershipTransferredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "ownership_transferred"), self.generation)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.owners.clone(),)
    }
}
