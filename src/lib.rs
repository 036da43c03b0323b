//! Netra controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. Hardware-touching code lives behind the port traits in
//! [`app::ports`] and their adapters in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod controller;
pub mod drivers;
pub mod error;
pub mod pins;
