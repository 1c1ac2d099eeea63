//! iicguard Hardware Abstraction Layer
//!
//! This crate defines the transport traits that a platform implements to
//! give [`iicguard-core`] access to an I2C bus. The register protocol and
//! the device handle live in the core crate and only ever talk to these
//! traits, which keeps them testable against a mock bus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  iicguard-core (Device handle, errors)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  iicguard-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ iicguard-hal- │       │  test mocks   │
//! │    linux      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Open a bus by path
//! - [`i2c::I2cTransport`] - Bind an address, byte-level read/write
//!
//! [`iicguard-core`]: https://docs.rs/iicguard-core

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod error;
pub mod i2c;

// Re-export key types at crate root for convenience
pub use address::Address;
pub use error::OsError;
pub use i2c::{I2cBus, I2cTransport};
