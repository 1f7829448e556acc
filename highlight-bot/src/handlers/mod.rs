//! Handlers: logging, registration dialogue, and the stand-alone commands.

mod commands;
mod delivery;
mod logging;
mod registration;
pub mod replies;

pub use commands::CommandHandler;
pub use logging::LoggingHandler;
pub use registration::{parse_sample_size, RegistrationHandler};

use hbot_core::HbotError;
use storage::StorageError;

pub(crate) fn storage_error(e: StorageError) -> HbotError {
    HbotError::Database(e.to_string())
}
