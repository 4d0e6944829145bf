// src/lib.rs

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{DriverError, Sdp3xAddr, TempCompensation};
pub use driver::Sdp3x;
