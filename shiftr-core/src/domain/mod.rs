//! Domain layer: the pure classification and shifting algorithms
//!
//! Everything in this module is a synchronous function of its inputs.
//! The only shared state is the injected [`dictionary::Dictionary`]
//! snapshot, which callers rebuild and swap rather than mutate.

pub mod casing;
pub mod choice;
pub mod classify;
pub mod compare;
pub mod context;
pub mod dictionary;
pub mod error;
pub(crate) mod shift;
