//! Functional core for the todolist service.
//!
//! Holds the domain types, the pure conversions between the stored and the
//! public shape of a to-do item, and the storage contract implemented by the
//! backends in the `todolist` crate. Nothing in here performs I/O.

pub mod serde;
pub mod storage;
pub mod todo;
