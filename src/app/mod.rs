//! Application core — pure domain logic, zero I/O.
//!
//! Action dispatch and background-task lifecycle live here. All
//! interaction with hardware, subprocesses and the network happens
//! through **port traits** defined in [`ports`], keeping this layer
//! fully testable without a Raspberry Pi.

pub mod commands;
pub mod events;
pub mod ports;
pub mod registry;
pub mod service;
