//! Device-type derivation: turn one model CSV row into a `DeviceRecord`
//! (interfaces, console ports, power ports and library metadata).
pub mod console;
pub mod interfaces;
pub mod record;
pub mod row;
pub mod slug;
