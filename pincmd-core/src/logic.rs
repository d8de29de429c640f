//! Kommando-Dispatch für das Digital-Subsystem
//!
//! Pure Logic ohne Hardware-Dependencies (testbar!)

use thiserror::Error;

use crate::traits::{DigitalPins, PinError, ReplyError, ReplySink};
use crate::types::{DIG_RESP_READ_PIN, DecodeError, DigitalCommand};

/// Ergebnis eines erfolgreich ausgeführten Kommandos
///
/// Der Router erfährt, welche Operation mit welchen Argumenten
/// ausgeführt wurde (z.B. fürs Logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dispatched {
    /// Pin gelesen und 1-Byte-Reply versendet
    ReadPin { pin: u8, level: u8 },
    /// Pegel geschrieben, kein Reply
    WritePin { pin: u8, value: u8 },
}

/// Fehler beim Dispatch eines Digital-Kommandos
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// Nachricht war leer, zu kurz oder hatte einen unbekannten Opcode
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Hardware-Zugriff fehlgeschlagen
    #[error("pin access failed: {0}")]
    Pin(#[from] PinError),
    /// Reply konnte nicht versendet werden
    #[error("reply failed: {0}")]
    Reply(#[from] ReplyError),
}

/// Dispatcht eine Digital-Subsystem Nachricht auf die Hardware
///
/// Einstiegspunkt für den Message-Router: dekodiert die Nachricht mit
/// Bounds-Checking und führt sie mit typisiertem Ergebnis aus:
/// - `ReadPin`: genau ein Hardware-Read, genau ein Reply mit 1 Byte Payload
///   (der gelesene Pegel), getaggt mit `DIG_RESP_READ_PIN`
/// - `WritePin`: genau ein Hardware-Write, niemals ein Reply
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GPIO-Treiber, UART-Transport) im Production-Code
/// - Mock Implementations (MockDigitalPins, MockReplySink) in Tests
///
/// # Parameter
/// - `msg`: rohe Kommando-Nachricht (Opcode + Argumente)
/// - `pins`: Digital-Pin Hardware (Hardware oder Mock)
/// - `replies`: Reply-Sink des Transport-Layers
/// - `ctx`: opaker Routing-Kontext, wird unverändert an den Sink gereicht
pub fn dispatch_digital_message<P, S>(
    msg: &[u8],
    pins: &mut P,
    replies: &mut S,
    ctx: &S::Context,
) -> Result<Dispatched, DispatchError>
where
    P: DigitalPins,
    S: ReplySink,
{
    match DigitalCommand::try_from(msg)? {
        DigitalCommand::ReadPin { pin } => {
            let level = pins.digital_read(pin)?;
            replies.send_reply(DIG_RESP_READ_PIN, &[level], ctx)?;
            Ok(Dispatched::ReadPin { pin, level })
        }
        DigitalCommand::WritePin { pin, value } => {
            pins.digital_write(pin, value)?;
            Ok(Dispatched::WritePin { pin, value })
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Dispatched {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Dispatched::ReadPin { pin, level } => {
                defmt::write!(fmt, "ReadPin {{ pin: {}, level: {} }}", pin, level)
            }
            Dispatched::WritePin { pin, value } => {
                defmt::write!(fmt, "WritePin {{ pin: {}, value: {} }}", pin, value)
            }
        }
    }
}
