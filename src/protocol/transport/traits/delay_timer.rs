//! Asynchronous timer abstraction providing the two fixed waits of the node
//! (transceiver settle delay and transmit period).
use embassy_time::{Duration, Timer};

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait DelayTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a mut self,
        millis: u32,
    ) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`DelayTimer`] backed by the Embassy time driver of the target board.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

impl DelayTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        Timer::after(Duration::from_millis(millis as u64)).await;
    }
}
