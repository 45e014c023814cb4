use crate::ensure;
use crate::error::MultiownableError;
use crate::events::Event;
use crate::interfaces::storage::DataKey;
use crate::interfaces::{owners, WitnessCheck};
use crate::ttl::{extend_instance_ttl, extend_persistent_ttl};
use crate::types::Hash;
use core::fmt::Debug;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contracttype, log, Address, Bytes, Env, IntoVal, String, Symbol, Topics, Val, Vec,
};

/// Tally of one pending call, stored under its fingerprint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingRecord {
    pub total_voted: u32,
    /// One flag per owner index, sized to the owner count when the first vote was cast.
    pub voters_mask: Vec<bool>,
    pub first_call_date: u64,
}

impl VotingRecord {
    fn new(env: &Env, owners: u32, now: u64) -> Self {
        let mut voters_mask = Vec::new(env);
        for _ in 0..owners {
            voters_mask.push_back(false);
        }

        Self {
            total_voted: 0,
            voters_mask,
            first_call_date: now,
        }
    }

    fn is_expired(&self, now: u64, timeout: u64) -> bool {
        now > self.first_call_date.saturating_add(timeout)
    }

    fn has_voted(&self, index: u32) -> bool {
        self.voters_mask.get(index - 1).unwrap_or(false)
    }

    /// Returns false if `index` had already voted.
    fn upvote(&mut self, index: u32) -> bool {
        if self.has_voted(index) {
            return false;
        }

        self.voters_mask.set(index - 1, true);
        self.total_voted += 1;
        true
    }

    /// Returns false if `index` had not voted.
    fn downvote(&mut self, index: u32) -> bool {
        if !self.has_voted(index) {
            return false;
        }

        self.voters_mask.set(index - 1, false);
        self.total_voted -= 1;
        true
    }
}

/// Identifies one proposed call within the current generation of owners.
///
/// The preimage is `xdr(signature) ‖ be32(required_votes) ‖ be64(timeout) ‖ be64(generation) ‖ args...`
/// with the arguments concatenated as-is. The generation makes votes from a previous owner set
/// unreachable after a rotation.
pub fn fingerprint(
    env: &Env,
    function_signature: &String,
    required_votes: u32,
    timeout: u64,
    generation: u64,
    args: &Vec<Bytes>,
) -> Hash {
    let mut preimage = function_signature.clone().to_xdr(env);
    preimage.extend_from_array(&required_votes.to_be_bytes());
    preimage.extend_from_array(&timeout.to_be_bytes());
    preimage.extend_from_array(&generation.to_be_bytes());

    for arg in args.iter() {
        preimage.append(&arg);
    }

    env.crypto().sha256(&preimage).into()
}

/// Pending tally for `fingerprint`, if any owner has voted for it and it was not resolved or cancelled.
pub fn voting_record(env: &Env, fingerprint: &Hash) -> Option<VotingRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Multiownable_VotingRecord(fingerprint.clone()))
}

/// Registers `initiator`'s vote for a call and reports whether the call has now been accepted.
///
/// Returns true exactly once per tally: on the vote that brings it to `required_votes`, after which
/// the record is deleted. Returns false for every other vote, and for callers that are not owners,
/// fail the witness check, or vote after `timeout` seconds have passed since the first vote.
pub fn call<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    function_signature: String,
    required_votes: u32,
    timeout: u64,
    args: Vec<Bytes>,
) -> bool {
    match try_call::<T>(env, initiator, function_signature, required_votes, timeout, args) {
        Ok(accepted) => accepted,
        Err(err) => {
            log!(env, "vote rejected", err as u32);
            false
        }
    }
}

/// Withdraws `initiator`'s vote for a call. Returns true if a vote was withdrawn.
///
/// Cancelling an expired tally fails, but deletes it, which is the only way an expired record is
/// ever evicted.
pub fn cancel_call<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    function_signature: String,
    required_votes: u32,
    timeout: u64,
    args: Vec<Bytes>,
) -> bool {
    match try_cancel_call::<T>(env, initiator, function_signature, required_votes, timeout, args) {
        Ok(cancelled) => cancelled,
        Err(err) => {
            log!(env, "vote cancellation rejected", err as u32);
            false
        }
    }
}

pub(crate) fn try_call<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    function_signature: String,
    required_votes: u32,
    timeout: u64,
    args: Vec<Bytes>,
) -> Result<bool, MultiownableError> {
    let index = authorized_index::<T>(env, &initiator)?;

    let fingerprint = fingerprint(
        env,
        &function_signature,
        required_votes,
        timeout,
        owners::generation_of_owners(env),
        &args,
    );
    let now = env.ledger().timestamp();

    let mut record = match voting_record(env, &fingerprint) {
        Some(record) => record,
        None => {
            let record = VotingRecord::new(env, owners::number_of_owners(env), now);

            VotingStartedEvent {
                fingerprint: fingerprint.clone(),
                function_signature: function_signature.clone(),
                first_call_date: now,
            }
            .emit(env);

            record
        }
    };

    ensure!(
        !record.is_expired(now, timeout),
        MultiownableError::VotingExpired
    );

    let counted = record.upvote(index);
    if counted {
        UpvotedEvent {
            fingerprint: fingerprint.clone(),
            owner: initiator,
            total_voted: record.total_voted,
            required_votes,
        }
        .emit(env);
    } else {
        DuplicateVoteEvent {
            fingerprint: fingerprint.clone(),
            owner: initiator,
        }
        .emit(env);
    }

    if record.total_voted == required_votes {
        remove_voting_record(env, &fingerprint);

        OperationPerformedEvent {
            fingerprint,
            function_signature,
        }
        .emit(env);

        return Ok(true);
    }

    if counted {
        save_voting_record(env, &fingerprint, &record);
    }

    Ok(false)
}

pub(crate) fn try_cancel_call<T: WitnessCheck>(
    env: &Env,
    initiator: Address,
    function_signature: String,
    required_votes: u32,
    timeout: u64,
    args: Vec<Bytes>,
) -> Result<bool, MultiownableError> {
    let index = authorized_index::<T>(env, &initiator)?;

    let fingerprint = fingerprint(
        env,
        &function_signature,
        required_votes,
        timeout,
        owners::generation_of_owners(env),
        &args,
    );

    let Some(mut record) = voting_record(env, &fingerprint) else {
        return Err(MultiownableError::NothingToCancel);
    };

    if record.is_expired(env.ledger().timestamp(), timeout) {
        remove_voting_record(env, &fingerprint);

        VotingExpiredEvent { fingerprint }.emit(env);

        return Err(MultiownableError::VotingExpired);
    }

    ensure!(record.downvote(index), MultiownableError::NotVoted);

    DownvotedEvent {
        fingerprint: fingerprint.clone(),
        owner: initiator,
        total_voted: record.total_voted,
    }
    .emit(env);

    if record.total_voted == 0 {
        remove_voting_record(env, &fingerprint);

        VotingCancelledEvent { fingerprint }.emit(env);
    } else {
        save_voting_record(env, &fingerprint, &record);
    }

    Ok(true)
}

/// Owner index of `initiator` once it is known to be an owner that can act in this invocation.
fn authorized_index<T: WitnessCheck>(
    env: &Env,
    initiator: &Address,
) -> Result<u32, MultiownableError> {
    let index = owners::index_by_owner(env, initiator);
    ensure!(index != 0, MultiownableError::NotAnOwner);

    ensure!(
        T::check_witness(env, initiator),
        MultiownableError::WitnessCheckFailed
    );

    Ok(index)
}

fn save_voting_record(env: &Env, fingerprint: &Hash, record: &VotingRecord) {
    let key = DataKey::Multiownable_VotingRecord(fingerprint.clone());

    env.storage().persistent().set(&key, record);

    extend_persistent_ttl(env, &key);
    extend_instance_ttl(env);
}

fn remove_voting_record(env: &Env, fingerprint: &Hash) {
    env.storage()
        .persistent()
        .remove(&DataKey::Multiownable_VotingRecord(fingerprint.clone()));
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingStartedEvent {
    pub fingerprint: Hash,
    pub function_signature: String,
    pub first_call_date: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpvotedEvent {
    pub fingerprint: Hash,
    pub owner: Address,
    pub total_voted: u32,
    pub required_votes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateVoteEvent {
    pub fingerprint: Hash,
    pub owner: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownvotedEvent {
    pub fingerprint: Hash,
    pub owner: Address,
    pub total_voted: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationPerformedEvent {
    pub fingerprint: Hash,
    pub function_signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingCancelledEvent {
    pub fingerprint: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingExpiredEvent {
    pub fingerprint: Hash,
}

impl Event for VotingStartedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "voting_started"), self.fingerprint.to_val())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.function_signature.to_val(), self.first_call_date)
    }
}

impl Event for UpvotedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "upvoted"),
            self.fingerprint.to_val(),
            self.owner.to_val(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.total_voted, self.required_votes)
    }
}

impl Event for DuplicateVoteEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "duplicate_vote"),
            self.fingerprint.to_val(),
            self.owner.to_val(),
        )
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        Vec::<Val>::new(env)
    }
}

impl Event for DownvotedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "downvoted"),
            self.fingerprint.to_val(),
            self.owner.to_val(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.total_voted,)
    }
}

impl Event for OperationPerformedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "operation_performed"),
            self.fingerprint.to_val(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.function_signature.to_val(),)
    }
}

impl Event for VotingCancelledEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "voting_cancelled"),
            self.fingerprint.to_val(),
        )
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        Vec::<Val>::new(env)
    }
}

impl Event for VotingExpiredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "voting_expired"), self.fingerprint.to_val())
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        Vec::<Val>::new(env)
    }
}
