use soroban_sdk::BytesN;

/// SHA-256 digest identifying one proposed call in one generation of owners.
pub type Hash = BytesN<32>;

/// Literal signature under which ownership rotations are voted on.
pub const TRANSFER_OWNERSHIP: &str = "TransferOwnership";

/// Number of ledger seconds a rotation vote stays open after its first vote.
pub const ROTATION_TIMEOUT: u64 = 1200;

/// Votes needed to resolve a majority decision among `owners` owners.
pub const fn majority(owners: u32) -> u32 {
    owners / 2 + 1
}
