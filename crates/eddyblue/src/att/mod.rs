//! Attribute Protocol (ATT) result codes
//!
//! The configuration engine does not speak ATT itself. The attribute transport
//! in front of it does, and needs engine errors turned into the result codes it
//! puts on the wire. This module holds that mapping target.

pub mod constants;
pub mod error;

pub use self::constants::*;
pub use self::error::AttErrorCode;
