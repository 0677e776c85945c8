//! State account structures

pub mod vault;
pub mod share_balance;

pub use vault::*;
pub use share_balance::*;
