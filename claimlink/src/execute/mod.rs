//! Execute handlers for the claim-link contract.
//!
//! - `announce` - register an unfunded link
//! - `fund` - CW20 receive hook that funds the sender's pending link
//! - `claim` - signature-checked redemption
//! - `cancel` - creator withdrawal, refunding funded links

mod announce;
mod cancel;
mod claim;
mod fund;

pub use announce::*;
pub use cancel::*;
pub use claim::*;
pub use fund::*;
