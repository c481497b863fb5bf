//! Channel list parsing
//!
//! Parses the human channel-list grammar used on the command line and in
//! config files: comma-separated singles and dashed ranges, e.g.
//! `11`, `11-13`, `11,12,15-20`. Whitespace around items is ignored.
//!
//! The grammar accepts everything [`ChannelMask`]'s `Display` output emits
//! between the braces, so a rendered mask can be fed back in.

use crate::mask::ChannelMask;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a channel list into a [`ChannelMask`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMaskError {
    /// Input had no channels at all
    #[error("empty channel list")]
    Empty,

    /// An item was not a channel number or `start-end` range
    #[error("invalid channel item `{0}`")]
    InvalidItem(String),

    /// A channel number fell outside the supported window
    #[error("channel {0} is outside the supported range {min}-{max}",
        min = ChannelMask::MIN_CHANNEL, max = ChannelMask::MAX_CHANNEL)]
    OutOfRange(u8),

    /// A dashed range ran backwards, e.g. `20-15`
    #[error("invalid channel range `{0}` (start exceeds end)")]
    BackwardsRange(String),
}

fn parse_channel(item: &str) -> Result<u8, ParseMaskError> {
    let channel: u8 = item
        .trim()
        .parse()
        .map_err(|_| ParseMaskError::InvalidItem(item.trim().to_string()))?;

    if channel < ChannelMask::MIN_CHANNEL || channel > ChannelMask::MAX_CHANNEL {
        return Err(ParseMaskError::OutOfRange(channel));
    }

    Ok(channel)
}

impl FromStr for ChannelMask {
    type Err = ParseMaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseMaskError::Empty);
        }

        let mut mask = ChannelMask::new();

        for item in s.split(',') {
            let item = item.trim();

            match item.split_once('-') {
                Some((start, end)) => {
                    let start = parse_channel(start)?;
                    let end = parse_channel(end)?;
                    if start > end {
                        return Err(ParseMaskError::BackwardsRange(item.to_string()));
                    }
                    mask.extend(start..=end);
                }
                None => {
                    mask.insert(parse_channel(item)?);
                }
            }
        }

        Ok(mask)
    }
}
