//! Application layer
//!
//! Use cases that turn commands from the HTTP adapter into calls on the domain
//! services and shape the results for the caller.

pub mod auth;
pub mod tenant;

#[cfg(test)]
pub(crate) mod test_support;
