//! Game session: move history, time travel and status
//!
//! A [`GameSession`] is an immutable value. Every transition borrows the
//! current session and returns a new one, so the caller decides when the
//! old value is replaced.

mod error;
mod history;
mod session;
mod status;

pub use error::MoveError;
pub use history::HistoryEntry;
pub use session::GameSession;
pub use status::GameStatus;
