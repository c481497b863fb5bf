//! # Channel Mask Core
//!
//! Compact channel-set representation for IEEE 802.15.4-class radios:
//! which of channels 11-26 a wireless stack is allowed to use, stored as
//! one bit per channel the way radio configuration registers expect it.
//!
//! ## Features
//!
//! - **Membership**: range-checked per-channel test, insert, remove
//! - **Iteration**: ascending member iterator, no sentinels exposed
//! - **Random Selection**: uniform over members with an injected RNG
//! - **Rendering**: compact `{ 11-13, 15, 20}` form with run collapsing
//! - **Parsing**: the inverse channel-list grammar for CLIs and configs
//!
//! ## Example
//!
//! ```rust
//! use chanmask_core::ChannelMask;
//!
//! let scan: ChannelMask = "11-14, 25".parse().unwrap();
//! assert_eq!(scan.len(), 5);
//! assert_eq!(scan.to_string(), "{ 11-14, 25}");
//!
//! let candidate = scan & ChannelMask::from_bits(0x0000_F800);
//! assert_eq!(candidate.to_string(), "{ 11-14}");
//! ```

pub mod mask;
pub mod parse;

// Re-exports
pub use mask::{ChannelMask, Channels};
pub use parse::ParseMaskError;
