//! Poll cycle stages.
//!
//! - `check_response`: Validate the shape of an API response
//! - `StatusTranslator`: Turn a homework record into a chat message
//! - `Reporter`: Decide whether a report is new
//! - `Poller`: Run the cycles forever

pub mod detect;
pub mod poll;
pub mod translate;
pub mod validate;

pub use detect::Reporter;
pub use poll::{CycleOutcome, Poller};
pub use translate::StatusTranslator;
pub use validate::check_response;
