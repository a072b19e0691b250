//! Test doubles simulating the hardware boundary of the torque node.
//!
//! Every double appends to a shared [`EventLog`] so a test can check the exact
//! order in which the node touched the hardware.
use embedded_hal::digital::{Error as PinError, ErrorKind, ErrorType, OutputPin};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::time::{sleep, Duration};
use torque_can::protocol::transport::{
    can_frame::CanFrame,
    traits::{analog_input::AnalogInput, can_bus::CanBus, delay_timer::DelayTimer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
/// Hardware interaction observed by the doubles.
pub enum Event {
    BusStarted(u32),
    Delay(u32),
    EnableHigh,
    Resolution(u8),
    Conversion(u16),
    Sent(CanFrame),
    Refused(CanFrame),
}

#[derive(Clone, Default)]
/// Shared, ordered record of hardware events.
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

#[allow(dead_code)]
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    /// Number of transmission attempts (accepted or refused).
    pub fn send_attempts(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Sent(_) | Event::Refused(_)))
            .count()
    }

    /// Frames handed to the bus, whatever the outcome.
    pub fn frames(&self) -> Vec<CanFrame> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Sent(frame) | Event::Refused(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }
}

//==================================================================================CAN_BUS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum MockBusError {
    /// `send` refused the frame.
    Refused,
    /// `begin` failed.
    Offline,
}

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    log: EventLog,
    /// Outcome of the next sends (`true` = accepted). Accepts once exhausted.
    outcomes: Arc<Mutex<VecDeque<bool>>>,
    sent_at: Arc<Mutex<Vec<Instant>>>,
    /// While set, `send` never completes (TX mailbox stuck).
    stalled: Arc<Mutex<bool>>,
    offline: bool,
}

#[allow(dead_code)]
impl MockCanBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            sent_at: Arc::new(Mutex::new(Vec::new())),
            stalled: Arc::new(Mutex::new(false)),
            offline: false,
        }
    }

    /// Bus whose `begin` always fails.
    pub fn offline(log: &EventLog) -> Self {
        Self {
            offline: true,
            ..Self::new(log)
        }
    }

    /// Queue the outcome of the next sends.
    pub fn script(&self, outcomes: &[bool]) {
        self.outcomes.lock().unwrap().extend(outcomes.iter().copied());
    }

    /// Make the following sends hang until [`resume`](Self::resume).
    pub fn stall(&self) {
        *self.stalled.lock().unwrap() = true;
    }

    pub fn resume(&self) {
        *self.stalled.lock().unwrap() = false;
    }

    /// Instant of every send attempt.
    pub fn send_times(&self) -> Vec<Instant> {
        self.sent_at.lock().unwrap().clone()
    }
}

impl CanBus for MockCanBus {
    type Error = MockBusError;

    async fn begin(&mut self, bitrate: u32) -> Result<(), Self::Error> {
        if self.offline {
            return Err(MockBusError::Offline);
        }
        self.log.push(Event::BusStarted(bitrate));
        Ok(())
    }

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.sent_at.lock().unwrap().push(Instant::now());
        let stalled = *self.stalled.lock().unwrap();
        if stalled {
            std::future::pending::<()>().await;
        }
        let accepted = self.outcomes.lock().unwrap().pop_front().unwrap_or(true);

        if accepted {
            self.log.push(Event::Sent(frame.clone()));
            Ok(())
        } else {
            self.log.push(Event::Refused(frame.clone()));
            Err(MockBusError::Refused)
        }
    }
}

//==================================================================================TIMER
#[allow(dead_code)]
/// Timer logging each delay; sleeps through `tokio::time::sleep` when `real`.
pub struct MockTimer {
    log: EventLog,
    real: bool,
}

#[allow(dead_code)]
impl MockTimer {
    /// Log delays without waiting.
    pub fn instant(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            real: false,
        }
    }

    /// Log delays and actually wait for them.
    pub fn sleeping(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            real: true,
        }
    }
}

impl DelayTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        self.log.push(Event::Delay(millis));
        if self.real {
            sleep(Duration::from_millis(millis as u64)).await;
        }
    }
}

//==================================================================================ADC
#[allow(dead_code)]
/// Analog input replaying scripted codes; repeats the last one when exhausted.
pub struct MockAdc {
    log: EventLog,
    codes: VecDeque<u16>,
    last: u16,
}

#[allow(dead_code)]
impl MockAdc {
    pub fn new(log: &EventLog, codes: &[u16]) -> Self {
        Self {
            log: log.clone(),
            codes: codes.iter().copied().collect(),
            last: 0,
        }
    }
}

impl AnalogInput for MockAdc {
    fn set_resolution(&mut self, bits: u8) {
        self.log.push(Event::Resolution(bits));
    }

    fn read(&mut self) -> u16 {
        if let Some(code) = self.codes.pop_front() {
            self.last = code;
        }
        self.log.push(Event::Conversion(self.last));
        self.last
    }
}

//==================================================================================ENABLE_PIN
#[derive(Debug)]
pub struct MockPinError;

impl PinError for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[allow(dead_code)]
/// Transceiver enable line.
pub struct MockPin {
    log: EventLog,
    broken: bool,
    pub is_high: bool,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            broken: false,
            is_high: false,
        }
    }

    /// Pin whose driver reports an error on every write.
    pub fn broken(log: &EventLog) -> Self {
        Self {
            broken: true,
            ..Self::new(log)
        }
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(MockPinError);
        }
        self.is_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(MockPinError);
        }
        self.is_high = true;
        self.log.push(Event::EnableHigh);
        Ok(())
    }
}
