//! Service layer for the homework bot.
//!
//! This module contains the outbound integrations:
//! - Homework status fetching (`PracticumClient`)
//! - Chat notification delivery (`TelegramNotifier`)

mod api;
mod notifier;

pub use api::{HomeworkSource, PracticumClient};
pub use notifier::{Notifier, TelegramNotifier};
