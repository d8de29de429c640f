//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff und
//! Reply-Versand ohne konkrete Implementierung.

use thiserror::Error;

/// Fehler-Typ für Pin-Operationen
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    #[error("digital read failed")]
    ReadFailed,
    #[error("digital write failed")]
    WriteFailed,
}

/// Fehler-Typ für Reply-Versand
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyError {
    #[error("reply transmission failed")]
    SendFailed,
}

/// Trait für Digital-Pin Hardware-Zugriff
///
/// Abstrahiert die digitalRead/digitalWrite Primitiven der Hardware.
///
/// Pin-Index und Wert kommen unvalidiert aus dem Kommando-Protokoll an;
/// das Verhalten für Pins außerhalb des Hardware-Bereichs definiert die
/// Implementierung, nicht der Handler.
///
/// # Implementierungen
/// - **Production:** GPIO-Treiber des Targets
/// - **Testing:** MockDigitalPins (in-memory Mock)
pub trait DigitalPins: Send {
    /// Liest den aktuellen Logik-Pegel eines Pins
    ///
    /// # Fehlerbehandlung
    /// Gibt `PinError::ReadFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn digital_read(&mut self, pin: u8) -> Result<u8, PinError>;

    /// Setzt den Ausgangs-Pegel eines Pins
    ///
    /// # Fehlerbehandlung
    /// Gibt `PinError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn digital_write(&mut self, pin: u8, value: u8) -> Result<(), PinError>;
}

/// Trait für den Reply-Versand zurück zum Host
///
/// Abstrahiert die Reply-Transmission des Transport-Layers. Der Handler
/// bekommt den Sink als explizite Dependency übergeben statt eine globale
/// Sende-Funktion aufzurufen.
///
/// `Context` ist der opake Routing-Kontext (`local` im Protokoll): er
/// identifiziert, über welche Verbindung die Antwort gehen soll, und wird
/// ausschließlich vom Transport-Layer interpretiert.
pub trait ReplySink: Send {
    type Context;

    /// Sendet einen Reply-Frame mit Typ-Tag und Payload
    ///
    /// # Fehlerbehandlung
    /// Gibt `ReplyError::SendFailed` zurück wenn der Versand fehlschlägt
    fn send_reply(
        &mut self,
        reply_type: u8,
        payload: &[u8],
        ctx: &Self::Context,
    ) -> Result<(), ReplyError>;
}
