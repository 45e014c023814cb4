use soroban_sdk::{contractclient, Address, Bytes, Env, String, Symbol, Val, Vec};

/// Multi-owner governance: a rotating owner set and m-of-n voting on arbitrary calls.
///
/// Contracts get a default implementation of every function through `#[multiownable]`, which
/// delegates to the free functions of this module and uses the contract's [`super::WitnessCheck`].
#[contractclient(name = "MultiownableClient")]
pub trait MultiownableInterface {
    /// Returns the number of owners in the current generation.
    fn number_of_owners(env: &Env) -> u32;

    /// Returns the owner at the 1-based `index`, or `None` if the index is not occupied.
    fn owner_by_index(env: &Env, index: u32) -> Option<Address>;

    /// Returns the index of `owner`, or 0 if it is not an owner.
    fn index_by_owner(env: &Env, owner: Address) -> u32;

    /// Returns how many times the owner set has been replaced.
    fn generation_of_owners(env: &Env) -> u64;

    /// Returns all owners in index order.
    fn all_owners(env: &Env) -> Vec<Address>;

    fn is_owner(env: &Env, account: Address) -> bool;

    /// Replaces the owner set. Installs the first set unconditionally, every later set after a
    /// majority vote of the current owners. Returns true once the new set is installed.
    fn transfer_ownership(env: &Env, initiator: Address, new_owners: Vec<Address>) -> bool;

    /// Casts `initiator`'s vote for a call and returns true on the vote that reaches `required_votes`.
    fn call(
        env: &Env,
        initiator: Address,
        function_signature: String,
        required_votes: u32,
        timeout: u64,
        args: Vec<Bytes>,
    ) -> bool;

    /// Withdraws `initiator`'s vote for a call.
    fn cancel_call(
        env: &Env,
        initiator: Address,
        function_signature: String,
        required_votes: u32,
        timeout: u64,
        args: Vec<Bytes>,
    ) -> bool;

    /// Runs a named operation with positional arguments, e.g. `"Call"` or `"GetAllOwners"`.
    ///
    /// Unknown operations and malformed arguments yield `false`.
    fn invoke(env: &Env, operation: Symbol, args: Vec<Val>) -> Val;
}
