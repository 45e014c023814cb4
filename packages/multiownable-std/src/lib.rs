#![no_std]
#[cfg(any(test, feature = "testutils"))]
extern crate std;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;

pub mod types;

pub mod error;

pub mod events;

pub mod ttl;

pub mod interfaces;

#[cfg(feature = "derive")]
pub use multiownable_std_derive::*;
