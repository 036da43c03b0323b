//! Leaf components: the button monitor state machine and the external
//! command runner. No port dependencies; fully host-testable.

pub mod button;
pub mod script;
