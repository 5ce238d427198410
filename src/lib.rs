//! Radix 256 sorting of `u32` keys with optional `u32` payloads, plus an
//! approximate tail selection that narrows the input before sorting.
//!
//! All sorting entry points play ping pong between two caller-owned buffer
//! pairs. The returned [`ActiveBuffer`] tells which pair holds the result.
mod buffer;
mod check;
mod error;
mod owned;
mod payload;
mod select;
mod sort;

pub use buffer::*;
pub use check::*;
pub use error::*;
pub use owned::*;
pub use payload::*;
pub use select::*;
pub use sort::*;

// 8 bits per digit -> 4 passes per u32, 256 buckets of u32 counts = 1k histogram
pub(crate) const RADIX_BITS: usize = 8;
pub(crate) const RADIX_HIST_LEN: usize = 1 << RADIX_BITS;
pub(crate) const RADIX_HIST_MASK: u32 = (RADIX_HIST_LEN - 1) as u32;
pub(crate) const RADIX_PASSES: usize = (u32::BITS as usize).div_ceil(RADIX_BITS);

/// Sampling stride used by [`select_approximate_tail`].
pub const DEFAULT_SAMPLE_STRIDE: usize = 101;
