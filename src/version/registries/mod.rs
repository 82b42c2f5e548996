//! Concrete registry implementations

pub mod hex;
