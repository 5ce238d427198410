//! Approximate tail selection.
//!
//! A strided sample of the keys is radix sorted and a threshold is read off at
//! the position matching the requested tail size. Everything at or above the
//! threshold is then compacted into the output buffers, in input order. How
//! many elements survive depends on how representative the sample is, so the
//! result is only close to the requested count. Sort the survivors afterwards
//! to get the exact order of the tail.

use log::debug;

use crate::buffer::{check_capacity, check_count};
use crate::sort::radix256_sort;
use crate::{SortError, DEFAULT_SAMPLE_STRIDE};

/// Sampling based threshold selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantileSelector {
    stride: usize,
}

impl Default for QuantileSelector {
    fn default() -> Self {
        Self {
            stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

impl QuantileSelector {
    /// Selector sampling every `stride`th key. A stride of zero is rejected.
    pub fn new(stride: usize) -> Result<Self, SortError> {
        Self::default().with_stride(stride)
    }

    pub fn with_stride(mut self, stride: usize) -> Result<Self, SortError> {
        if stride == 0 {
            return Err(SortError::InvalidConfiguration("sampling stride must be positive".to_string()));
        }
        self.stride = stride;
        Ok(self)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of keys sampled from `count` input keys.
    pub fn sample_len(&self, count: usize) -> usize {
        count.div_ceil(self.stride)
    }

    /// Position in the ascending sample whose key becomes the threshold.
    ///
    /// Clamped to the sample, so oversized targets select everything at or
    /// above the smallest sampled key and a target of zero keeps only keys
    /// reaching the largest sampled key. `sample_len` must be positive.
    pub fn threshold_index(&self, sample_len: usize, target: usize) -> usize {
        debug_assert!(sample_len > 0);
        sample_len.saturating_sub(target.div_ceil(self.stride)).min(sample_len - 1)
    }

    /// Copy every `stride`th key of `keys` to the front of `sample`, returning the sample length.
    fn sample(&self, keys: &[u32], sample: &mut [u32]) -> usize {
        keys.iter()
            .step_by(self.stride)
            .zip(sample.iter_mut())
            .for_each(|(key, slot)| *slot = *key);
        self.sample_len(keys.len())
    }

    /// Estimate the threshold for keeping about `target` of `keys`.
    ///
    /// `scratch_a` and `scratch_b` are clobbered. Returns `None` for empty input.
    fn estimate_threshold(&self, keys: &[u32], target: usize, scratch_a: &mut [u32], scratch_b: &mut [u32]) -> Option<u32> {
        if keys.is_empty() {
            return None;
        }
        let sample_len = self.sample(keys, scratch_a);
        let (sample, other) = (&mut scratch_a[..sample_len], &mut scratch_b[..sample_len]);
        let active = radix256_sort(sample, other, &mut ());

        let threshold_index = self.threshold_index(sample_len, target);
        let threshold = active.pick(&*sample, &*other)[threshold_index];
        debug!(
            "sampling stride={} sample_len={} threshold_index={} threshold=0x{:08x}",
            self.stride, sample_len, threshold_index, threshold
        );
        Some(threshold)
    }

    /// Retain roughly the `target` largest of the first `count` key-value pairs.
    ///
    /// Survivors are written to the front of `output_keys` and `output_values` in
    /// input order; the number written is returned. Input buffers are only read.
    pub fn select(
        &self,
        input_keys: &[u32],
        input_values: &[u32],
        output_keys: &mut [u32],
        output_values: &mut [u32],
        count: usize,
        target: usize,
    ) -> Result<usize, SortError> {
        check_count(count)?;
        check_capacity("input_keys", input_keys, count)?;
        check_capacity("input_values", input_values, count)?;
        check_capacity("output_keys", output_keys, count)?;
        check_capacity("output_values", output_values, count)?;

        let keys = &input_keys[..count];
        let values = &input_values[..count];

        // the output buffers double as scratch space for the sample sort
        let Some(threshold) = self.estimate_threshold(keys, target, output_keys, output_values) else {
            return Ok(0);
        };

        let retained = compact(keys, values, output_keys, output_values, threshold);
        debug!("retained {retained} of {count} elements, target {target}");
        Ok(retained)
    }
}

/// Append every pair whose key is at least `threshold` to the outputs, preserving order.
#[inline(never)]
fn compact(keys: &[u32], values: &[u32], output_keys: &mut [u32], output_values: &mut [u32], threshold: u32) -> usize {
    let mut retained = 0;
    keys.iter().zip(values).for_each(|(key, value)| {
        if *key >= threshold {
            output_keys[retained] = *key;
            output_values[retained] = *value;
            retained += 1;
        }
    });
    retained
}

/// [`QuantileSelector::select`] with the default sampling stride.
pub fn select_approximate_tail(
    input_keys: &[u32],
    input_values: &[u32],
    output_keys: &mut [u32],
    output_values: &mut [u32],
    count: usize,
    target: usize,
) -> Result<usize, SortError> {
    QuantileSelector::default().select(input_keys, input_values, output_keys, output_values, count, target)
}
