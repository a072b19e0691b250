//! Diagnostic output of the node: one text line per transmission attempt.
//!
//! A successful send reports the decimal sample value, a failed one reports
//! [`SEND_ERROR_MESSAGE`]. The output is meant for a human watching a serial
//! console, not for machine parsing.
//!
//! Sinks provided here:
//!
//! * [`NullSink`] discards everything (diagnostics disabled);
//! * [`FmtSink`] writes lines to any [`core::fmt::Write`] (UART, USB serial, test buffer);
//! * [`ChannelSink`] queues lines in a pre-allocated [`embassy_sync::channel::Channel`]
//!   so another task can print them without slowing the transmit loop.
use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Sender};

use crate::core::TorqueSample;

/// Line emitted when the bus refuses the torque frame.
pub const SEND_ERROR_MESSAGE: &str = "Error sending message";

/// One diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticLine {
    /// Frame accepted by the bus; carries the transmitted value.
    Torque(TorqueSample),
    /// Frame refused by the bus.
    SendError,
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLine::Torque(sample) => write!(f, "{}", sample),
            DiagnosticLine::SendError => f.write_str(SEND_ERROR_MESSAGE),
        }
    }
}

/// Destination of diagnostic lines.
pub trait DiagnosticSink {
    /// Record one line. Must not block the caller.
    fn emit(&mut self, line: DiagnosticLine);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, line: DiagnosticLine) {
        (**self).emit(line);
    }
}

//==================================================================================NULL_SINK
/// Sink used when diagnostics are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _line: DiagnosticLine) {}
}

//==================================================================================FMT_SINK
/// Sink writing each line, newline terminated, to a text writer.
pub struct FmtSink<W: fmt::Write> {
    writer: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> DiagnosticSink for FmtSink<W> {
    fn emit(&mut self, line: DiagnosticLine) {
        // A console that cannot keep up loses the line; the loop carries on.
        let _ = writeln!(self.writer, "{}", line);
    }
}

//==================================================================================CHANNEL_SINK
/// Sink pushing lines into a bounded channel drained by another task.
///
/// Uses `try_send`: when the channel is full the line is dropped and counted.
pub struct ChannelSink<'a, M: RawMutex, const CAP: usize> {
    sender: Sender<'a, M, DiagnosticLine, CAP>,
    dropped: u32,
}

impl<'a, M: RawMutex, const CAP: usize> ChannelSink<'a, M, CAP> {
    /// Attach to a firmware-provided channel.
    pub fn new(channel: &'a Channel<M, DiagnosticLine, CAP>) -> Self {
        Self {
            sender: channel.sender(),
            dropped: 0,
        }
    }

    /// Number of lines lost because the channel was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<M: RawMutex, const CAP: usize> DiagnosticSink for ChannelSink<'_, M, CAP> {
    fn emit(&mut self, line: DiagnosticLine) {
        if self.sender.try_send(line).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::trace!("Diagnostic channel full, {} lines dropped", self.dropped);
        }
    }
}
