//! Protokoll-Typen für das Digital-Pin Kommando-Protokoll
//!
//! Datenstrukturen und Wire-Konstanten ohne Hardware-Dependencies

use thiserror::Error;

// ============================================================================
// Wire-Konstanten
// ============================================================================

// Opcode-Schema: High-Nibble = Subsystem-Tag (Digital = 0x2),
// Low-Nibble = Operation; Responses setzen Bit 3 im Low-Nibble.

/// Opcode: Logik-Pegel eines Pins lesen
pub const DIG_CMD_READ_PIN: u8 = 0x20;
/// Opcode: Logik-Pegel auf einen Pin schreiben
pub const DIG_CMD_WRITE_PIN: u8 = 0x21;
/// Reply-Tag für die Antwort auf ein Read-Kommando
pub const DIG_RESP_READ_PIN: u8 = 0x28;

// Feste Nachrichten-Längen: Opcode + Argumente
const READ_PIN_LEN: usize = 2;
const WRITE_PIN_LEN: usize = 3;

// ============================================================================
// Kommando-Typ
// ============================================================================

/// Dekodiertes Digital-Pin Kommando
///
/// Wird vom Transport-Layer als rohes Byte-Array empfangen und über
/// `TryFrom<&[u8]>` mit Bounds-Checking dekodiert.
///
/// Pin-Index und Wert sind volle `u8`-Bytes und werden unverändert an die
/// Hardware-Schicht durchgereicht (kein Clamping, keine Range-Validierung).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitalCommand {
    /// Lese den aktuellen Logik-Pegel von `pin`
    ReadPin { pin: u8 },
    /// Schreibe den Logik-Pegel `value` auf `pin`
    WritePin { pin: u8, value: u8 },
}

/// Fehler beim Dekodieren einer Kommando-Nachricht
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// Leere Nachricht, der Opcode fehlt
    #[error("empty command message, opcode missing")]
    Empty,
    /// Nachricht kürzer als das feste Layout des Opcodes
    #[error("command 0x{opcode:02x} needs {expected} bytes, got {actual}")]
    Truncated {
        opcode: u8,
        expected: usize,
        actual: usize,
    },
    /// Opcode gehört nicht zum Digital-Subsystem
    #[error("unknown digital opcode 0x{0:02x}")]
    UnknownOpcode(u8),
}

impl DigitalCommand {
    /// Wire-Opcode dieses Kommandos
    pub fn opcode(&self) -> u8 {
        match self {
            DigitalCommand::ReadPin { .. } => DIG_CMD_READ_PIN,
            DigitalCommand::WritePin { .. } => DIG_CMD_WRITE_PIN,
        }
    }
}

impl TryFrom<&[u8]> for DigitalCommand {
    type Error = DecodeError;

    /// Dekodiert eine Kommando-Nachricht mit Bounds-Checking
    ///
    /// Byte 0 ist der Opcode, Byte 1 der Pin-Index, Byte 2 (nur Write) der
    /// zu schreibende Wert. Bytes hinter dem festen Layout werden ignoriert.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use pincmd_core::DigitalCommand;
    /// let cmd = DigitalCommand::try_from(&[0x20u8, 13][..]).unwrap();
    /// assert_eq!(cmd, DigitalCommand::ReadPin { pin: 13 });
    /// ```
    fn try_from(msg: &[u8]) -> Result<Self, DecodeError> {
        let opcode = *msg.first().ok_or(DecodeError::Empty)?;
        match opcode {
            DIG_CMD_READ_PIN => {
                if msg.len() < READ_PIN_LEN {
                    return Err(DecodeError::Truncated {
                        opcode,
                        expected: READ_PIN_LEN,
                        actual: msg.len(),
                    });
                }
                Ok(DigitalCommand::ReadPin { pin: msg[1] })
            }
            DIG_CMD_WRITE_PIN => {
                if msg.len() < WRITE_PIN_LEN {
                    return Err(DecodeError::Truncated {
                        opcode,
                        expected: WRITE_PIN_LEN,
                        actual: msg.len(),
                    });
                }
                Ok(DigitalCommand::WritePin {
                    pin: msg[1],
                    value: msg[2],
                })
            }
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for DigitalCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DigitalCommand::ReadPin { pin } => {
                defmt::write!(fmt, "ReadPin {{ pin: {} }}", pin)
            }
            DigitalCommand::WritePin { pin, value } => {
                defmt::write!(fmt, "WritePin {{ pin: {}, value: {} }}", pin, value)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DecodeError::Empty => defmt::write!(fmt, "Empty"),
            DecodeError::Truncated {
                opcode,
                expected,
                actual,
            } => {
                defmt::write!(
                    fmt,
                    "Truncated {{ opcode: 0x{:02x}, expected: {}, actual: {} }}",
                    opcode,
                    expected,
                    actual
                )
            }
            DecodeError::UnknownOpcode(opcode) => {
                defmt::write!(fmt, "UnknownOpcode(0x{:02x})", opcode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_read_pin() {
        let cmd = DigitalCommand::try_from(&[DIG_CMD_READ_PIN, 13][..]).unwrap();
        assert_eq!(cmd, DigitalCommand::ReadPin { pin: 13 });
        assert_eq!(cmd.opcode(), DIG_CMD_READ_PIN);
    }

    #[test]
    fn test_decode_write_pin() {
        let cmd = DigitalCommand::try_from(&[DIG_CMD_WRITE_PIN, 7, 1][..]).unwrap();
        assert_eq!(cmd, DigitalCommand::WritePin { pin: 7, value: 1 });
        assert_eq!(cmd.opcode(), DIG_CMD_WRITE_PIN);
    }

    #[test]
    fn test_decode_empty_message() {
        let result = DigitalCommand::try_from(&[][..]);
        assert_eq!(result, Err(DecodeError::Empty));
    }

    #[test]
    fn test_decode_truncated_read() {
        let result = DigitalCommand::try_from(&[DIG_CMD_READ_PIN][..]);
        assert_eq!(
            result,
            Err(DecodeError::Truncated {
                opcode: DIG_CMD_READ_PIN,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_decode_truncated_write() {
        let result = DigitalCommand::try_from(&[DIG_CMD_WRITE_PIN, 7][..]);
        assert_eq!(
            result,
            Err(DecodeError::Truncated {
                opcode: DIG_CMD_WRITE_PIN,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_decode_unknown_opcode() {
        let result = DigitalCommand::try_from(&[0x42, 1, 2][..]);
        assert_eq!(result, Err(DecodeError::UnknownOpcode(0x42)));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        // Das Layout ist fix, Bytes hinter Byte 2 werden nie gelesen
        let cmd = DigitalCommand::try_from(&[DIG_CMD_READ_PIN, 13, 0xFF, 0xFF][..]).unwrap();
        assert_eq!(cmd, DigitalCommand::ReadPin { pin: 13 });
    }

    #[test]
    fn test_decode_pin_boundaries() {
        // Pin 0 und Pin 255 werden unverändert übernommen
        let low = DigitalCommand::try_from(&[DIG_CMD_READ_PIN, 0][..]).unwrap();
        assert_eq!(low, DigitalCommand::ReadPin { pin: 0 });

        let high = DigitalCommand::try_from(&[DIG_CMD_READ_PIN, 255][..]).unwrap();
        assert_eq!(high, DigitalCommand::ReadPin { pin: 255 });
    }
}
