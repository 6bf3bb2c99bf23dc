//! Game flow
//!
//! The round state machine, the session loop around it, and the traits through
//! which both reach the player.

mod error;
mod interface;
mod round;
mod session;

pub use error::{AbortReason, GameError};
pub use interface::{InputSource, Presenter};
pub use round::{Attempt, Round, RoundOutcome, RoundState, play_round};
pub use session::{Session, SessionStats};
