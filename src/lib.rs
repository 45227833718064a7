//! treasure-walker library
//!
//! Exposes the command vocabulary and the checker client for the
//! treasure-walker binary and for tests.

pub mod client;
pub mod commands;
