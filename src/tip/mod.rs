// USDC tipping: amount parsing, ERC-20 call encoding, chain guard and the
// tip session state machine.
pub mod amount;
pub mod attribution;
pub mod chain;
pub mod controller;
pub mod encode;
pub mod send;
pub mod state;

pub use attribution::Erc8021;
pub use controller::{Press, TipController};
pub use state::TipState;
