//! Driver for the Microchip `MCP23008` 8-bit I2C GPIO expander.
//!
//! The driver works on single registers: every operation is one or two blocking bus
//! transactions.  Writes can be verified by reading the register back, which is the only way to
//! detect a missing or misbehaving device on buses that do not report errors.
//!
//! ```no_run
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! use mcp23008::{Mcp23008, PinMode};
//!
//! // A0..A2 strapped to 0b011, bus address 0x23
//! let mut mcp = Mcp23008::new(i2c, 0x03);
//! mcp.initialize().unwrap();
//!
//! mcp.set_pin_mode(0, PinMode::Output).unwrap();
//! mcp.set_pin_mode(1, PinMode::InputPullUp).unwrap();
//! mcp.digital_write(0, true).unwrap();
//! let pressed = !mcp.digital_read(1).unwrap();
//! ```
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod bus;
mod common;
mod config;
mod driver;
mod error;
mod mutex;
mod pin;
mod register;
#[cfg(test)]
mod sim;

pub use bus::I2cBus;
pub use common::{mode, PinMode, PIN_COUNT};
pub use config::{Config, PullupWriteBack, ReadTarget};
pub use driver::{Mcp23008, BASE_ADDRESS};
pub use error::Error;
pub use mutex::PortMutex;
pub use pin::{Parts, Pin, SharedMcp23008};
pub use register::Register;

pub(crate) use bus::I2cExt;
