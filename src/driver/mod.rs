// src/driver/mod.rs

pub mod sync_driver;

pub use sync_driver::Sdp3x;
