//! Radio Channel Mask
//!
//! A channel mask is a compact set of radio channels, one bit per channel,
//! covering the IEEE 802.15.4 2.4 GHz channel page (channels 11-26).
//! Radios take channel configuration as a raw bitmask, so the type wraps a
//! `u32` directly and exposes set semantics on top of it.
//!
//! All operations are allocation-free and bounded-time, which keeps the type
//! usable from latency-sensitive paths (scan scheduling, MAC timers).
//!
//! ## Usage
//!
//! ```rust
//! use chanmask_core::ChannelMask;
//!
//! let mut mask = ChannelMask::new();
//! mask.insert(11);
//! mask.insert(12);
//! mask.insert(13);
//! mask.insert(20);
//!
//! assert!(mask.contains(12));
//! assert_eq!(mask.len(), 4);
//! assert_eq!(mask.to_string(), "{ 11-13, 20}");
//!
//! let picked = mask.choose(&mut rand::thread_rng()).unwrap();
//! assert!(mask.contains(picked));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Bitmask-backed set of radio channels
///
/// Bit *i* set means channel *i* is a member. Only bits inside the
/// supported channel window survive construction, so out-of-range bits in
/// a raw mask can never show up as members.
///
/// This is a plain `Copy` value: copies are independent, and there is no
/// interior mutability or locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ChannelMask(u32);

impl ChannelMask {
    /// Lowest supported channel number (802.15.4 2.4 GHz page)
    pub const MIN_CHANNEL: u8 = 11;

    /// Highest supported channel number
    pub const MAX_CHANNEL: u8 = 26;

    /// Mask with every supported channel enabled (bits 11-26, `0x07FFF800`)
    pub const ALL: Self = Self(0x07FF_F800);

    /// Mask with no channels enabled
    pub const EMPTY: Self = Self(0);

    /// Create an empty mask
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Create a mask from a raw bitmask
    ///
    /// Bits outside the supported channel window are dropped.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bitmask value, for radio configuration APIs
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Check whether `channel` is a member
    ///
    /// Channel numbers outside the supported window are simply not members;
    /// this never panics.
    pub fn contains(&self, channel: u8) -> bool {
        channel >= Self::MIN_CHANNEL
            && channel <= Self::MAX_CHANNEL
            && (self.0 & (1u32 << channel)) != 0
    }

    /// Add a channel to the mask
    ///
    /// Returns `true` if the channel was newly inserted, `false` if it was
    /// already a member or outside the supported window.
    pub fn insert(&mut self, channel: u8) -> bool {
        if channel < Self::MIN_CHANNEL || channel > Self::MAX_CHANNEL {
            return false;
        }
        let bit = 1u32 << channel;
        let newly = (self.0 & bit) == 0;
        self.0 |= bit;
        newly
    }

    /// Remove a channel from the mask
    ///
    /// Returns `true` if the channel was present.
    pub fn remove(&mut self, channel: u8) -> bool {
        if !self.contains(channel) {
            return false;
        }
        self.0 &= !(1u32 << channel);
        true
    }

    /// Remove all channels
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Number of channels in the mask
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the mask has no channels
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check whether the mask holds exactly one channel
    pub fn is_single_channel(&self) -> bool {
        self.0 != 0 && (self.0 & (self.0 - 1)) == 0
    }

    /// Keep only channels present in both masks
    pub fn intersect(&mut self, other: Self) {
        self.0 &= other.0;
    }

    /// Iterate member channels in ascending order
    pub fn iter(&self) -> Channels {
        Channels { bits: self.0 }
    }

    /// Pick a member channel uniformly at random
    ///
    /// The draw is uniform over *members*, not over raw channel numbers, so
    /// sparse or clustered masks are still sampled evenly. Returns `None`
    /// on an empty mask.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let rank = rng.gen_range(0..self.len());
        self.iter().nth(rank)
    }
}

impl From<u32> for ChannelMask {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<ChannelMask> for u32 {
    fn from(mask: ChannelMask) -> u32 {
        mask.bits()
    }
}

impl BitOr for ChannelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChannelMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ChannelMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ChannelMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<u8> for ChannelMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut mask = Self::new();
        mask.extend(iter);
        mask
    }
}

impl Extend<u8> for ChannelMask {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for channel in iter {
            self.insert(channel);
        }
    }
}

impl IntoIterator for ChannelMask {
    type Item = u8;
    type IntoIter = Channels;

    fn into_iter(self) -> Channels {
        self.iter()
    }
}

impl IntoIterator for &ChannelMask {
    type Item = u8;
    type IntoIter = Channels;

    fn into_iter(self) -> Channels {
        self.iter()
    }
}

/// Iterator over the member channels of a [`ChannelMask`], ascending
///
/// Exhaustion is `None`; the iterator is fused and restartable by calling
/// [`ChannelMask::iter`] again.
#[derive(Debug, Clone)]
pub struct Channels {
    bits: u32,
}

impl Iterator for Channels {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let channel = self.bits.trailing_zeros() as u8;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(channel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Channels {}

impl FusedIterator for Channels {}

impl fmt::Display for ChannelMask {
    /// Compact rendering as a brace-delimited channel list
    ///
    /// Maximal runs of three or more consecutive channels collapse into a
    /// dashed range; runs of two are listed as two singles so the output
    /// reads `{ 11, 12}` rather than the degenerate `{ 11-12}`:
    ///
    /// ```rust
    /// use chanmask_core::ChannelMask;
    ///
    /// let mask: ChannelMask = [11, 12, 14, 20, 21, 22].into_iter().collect();
    /// assert_eq!(mask.to_string(), "{ 11, 12, 14, 20-22}");
    /// assert_eq!(ChannelMask::EMPTY.to_string(), "{}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        let mut iter = self.iter().peekable();
        let mut first = true;

        while let Some(start) = iter.next() {
            let mut end = start;
            while let Some(&next) = iter.peek() {
                if next != end + 1 {
                    break;
                }
                end = next;
                iter.next();
            }

            write!(f, "{}{}", if first { " " } else { ", " }, start)?;
            first = false;

            if end > start {
                write!(f, "{}{}", if end == start + 1 { ", " } else { "-" }, end)?;
            }
        }

        f.write_str("}")
    }
}
