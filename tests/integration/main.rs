//! Host-side integration tests for the controller.
//!
//! These drive the full sample → debounce → classify → dispatch chain
//! through mock ports, without GPIO, subprocesses, or the network.

mod controller_tests;
mod mock_ports;
