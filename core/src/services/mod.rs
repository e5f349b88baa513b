//! Business services containing the session lifecycle logic.

pub mod session;

// Re-export commonly used types
pub use session::{Clock, SessionConfig, SessionManager, SystemClock, TokenCodec};
