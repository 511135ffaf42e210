//! Guess session domain module.
//!
//! # Module Structure
//!
//! - `model`: Attempt history and the read-only snapshot projection
//! - `machine`: The guess session state machine (`GuessSession`)

mod machine;
mod model;


// Re-export public API
pub use machine::GuessSession;
pub use model::{Attempt, GameSnapshot};
