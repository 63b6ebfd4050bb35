//! Config file codec.
//!
//! - `config`: text ⇄ `GameState` (`decode`, `encode`)
//! - `session`: `GameSession`, a state bound to the file it is saved to

pub mod config;
pub mod session;

pub use config::{decode, encode, MAGIC};
pub use session::GameSession;
