//! Hardware abstraction traits used by the node (CAN bus, timer, analog input).
pub mod analog_input;
pub mod can_bus;
pub mod delay_timer;
