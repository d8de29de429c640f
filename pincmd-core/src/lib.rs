//! Pincmd Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Digital-Pin Kommando-Protokoll, die Hardware- und
//! Reply-Traits sowie den Dispatch als Pure Function.

#![no_std]

pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{DispatchError, Dispatched, dispatch_digital_message};
pub use traits::{DigitalPins, PinError, ReplyError, ReplySink};
pub use types::{
    DIG_CMD_READ_PIN, DIG_CMD_WRITE_PIN, DIG_RESP_READ_PIN, DecodeError, DigitalCommand,
};
