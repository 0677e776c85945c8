//! Instruction handlers for the yield vault

pub mod admin;
pub mod holder;
pub mod host;
pub mod supply;
pub mod redeem;
pub mod sponsor;
pub mod rewards;
pub mod token_admin;
pub mod views;

pub use admin::*;
pub use holder::*;
pub use host::*;
pub use supply::*;
pub use redeem::*;
pub use sponsor::*;
pub use rewards::*;
pub use token_admin::*;
pub use views::*;
