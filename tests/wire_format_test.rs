//! End-to-end wire format: frames produced by the node are decoded by the
//! host-side decoder, and diagnostics reach a console task through a channel.
mod helpers;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use helpers::{EventLog, MockAdc, MockCanBus, MockPin, MockTimer};
use static_cell::StaticCell;
use torque_can::config::NodeConfig;
use torque_can::core::TorqueSample;
use torque_can::protocol::decoder::{decode_torque_frame, is_torque_frame};
use torque_can::protocol::diagnostics::{ChannelSink, DiagnosticLine, FmtSink};
use torque_can::protocol::node::TorqueNode;

static CONSOLE_CHANNEL: StaticCell<Channel<CriticalSectionRawMutex, DiagnosticLine, 4>> =
    StaticCell::new();

#[tokio::test]
/// Every value sent by the node decodes back to the ADC reading.
async fn host_decodes_node_frames() {
    let log = EventLog::new();
    let codes = [0u16, 1, 255, 256, 300, 1024, 3000, 4095];
    let mut node = TorqueNode::new(
        NodeConfig::DEFAULT,
        MockCanBus::new(&log),
        MockAdc::new(&log, &codes),
        MockPin::new(&log),
        MockTimer::instant(&log),
        FmtSink::new(String::new()),
    );
    node.setup().await.unwrap();

    for _ in codes {
        node.tick().await.unwrap();
    }

    let decoded: Vec<u16> = log
        .frames()
        .iter()
        .inspect(|frame| assert!(is_torque_frame(*frame)))
        .map(|frame| decode_torque_frame(frame).expect("node frames must decode").get())
        .collect();
    assert_eq!(decoded, codes);
}

#[tokio::test]
/// Diagnostics queued by the node can be drained and printed by another task.
async fn diagnostics_through_channel() {
    let channel = CONSOLE_CHANNEL.init(Channel::new());

    let log = EventLog::new();
    let bus = MockCanBus::new(&log);
    bus.script(&[true, false, true, true, true, true]);
    let mut node = TorqueNode::new(
        NodeConfig::DEFAULT.with_diagnostics(true),
        bus,
        MockAdc::new(&log, &[300, 301, 302, 303, 304, 305]),
        MockPin::new(&log),
        MockTimer::instant(&log),
        ChannelSink::new(&*channel),
    );
    node.setup().await.unwrap();

    for _ in 0..6 {
        let _ = node.tick().await;
    }

    // Four slots: the last two lines overflow and are dropped.
    assert_eq!(node.diagnostics().dropped(), 2);

    let mut console = String::new();
    while let Ok(line) = channel.try_receive() {
        console.push_str(&line.to_string());
        console.push('\n');
    }
    assert_eq!(console, "300\nError sending message\n302\n303\n");
    assert_eq!(
        DiagnosticLine::Torque(TorqueSample::new(304).unwrap()).to_string(),
        "304"
    );
}
