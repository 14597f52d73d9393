//!
//! The Solidity compiler interface.
//!

pub mod standard_json;
