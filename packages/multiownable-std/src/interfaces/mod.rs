mod dispatch;
mod multiownable;
mod owners;
#[cfg(test)]
mod testdata;
mod voting;

pub use dispatch::*;
pub use multiownable::*;
pub use owners::*;
pub use voting::*;

use soroban_sdk::{Address, Env};

/// The host's answer to "is this invocation allowed to act as `identity`?".
///
/// Implemented by every contract that embeds the multiownable interface. A `false` answer
/// rejects the vote without touching storage.
pub trait WitnessCheck {
    fn check_witness(env: &Env, identity: &Address) -> bool;
}

/// Data keys of the multiownable interface. Variant names carry a `Multiownable_` prefix on purpose:
/// a contract embedding the interface that declares a variant with the same name gets a lint warning
/// instead of silently sharing the storage slot.
mod storage {
    #![allow(non_camel_case_types)]

    use crate::types::Hash;
    use soroban_sdk::{contracttype, Address};

    #[contracttype]
    #[derive(Clone, Debug)]
    pub enum DataKey {
        Multiownable_Owners(u32),
        Multiownable_IndexesOfOwners(Address),
        Multiownable_NumberOfOwners,
        Multiownable_GenerationOfOwners,
        Multiownable_VotingRecord(Hash),
    }
}
