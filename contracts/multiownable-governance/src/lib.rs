#![no_std]

pub mod contract;
pub mod event;

pub use contract::{MultiownableGovernance, MultiownableGovernanceClient};
