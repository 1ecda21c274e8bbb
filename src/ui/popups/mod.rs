//! Popup overlays.

pub mod message;
pub mod open_transaction;
