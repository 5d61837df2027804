//! Solidity bindings for the consumable provider facet: the combination structs, the facet
//! interface and its revert errors, and helpers to build the call data that crosses the
//! contract boundary.
pub mod calldata;
pub mod contract;
