// LSB radix sort with 8 bit digits, following Merrill's three step scheme:
// histogram, exclusive scan, scatter. See
// http://codercorner.com/RadixSortRevisited.htm
// http://stereopsis.com/radix.html

use log::trace;

use crate::buffer::{check_capacity, check_count};
use crate::payload::Payload;
use crate::{ActiveBuffer, SortError, SortKind, Values, RADIX_BITS, RADIX_HIST_LEN, RADIX_HIST_MASK, RADIX_PASSES};

#[inline(always)]
fn digit(key: u32, shift: usize) -> usize {
    ((key >> shift) & RADIX_HIST_MASK) as usize
}

/// Fill the histogram for the digit indicated by the given `shift` amount.
#[inline(never)]
fn fill_histogram(keys: &[u32], shift: usize, histogram: &mut [u32; RADIX_HIST_LEN]) {
    histogram.fill(0);
    keys.iter().for_each(|key| {
        histogram[digit(*key, shift)] += 1;
    });
}

/// Calculate the exclusive prefix sum of the histogram, resulting in the starting indices to the output for each bucket.
#[inline(never)]
pub(crate) fn cumulative_histogram<const N: usize>(histogram: &mut [u32; N]) {
    let mut sum = 0_u32;
    histogram.iter_mut().for_each(|count| {
        let tmp = *count;
        *count = sum;
        sum += tmp;
    });
}

/// Move every key to the next free slot of its bucket, calling `carry(from, to)` for each move.
///
/// Keys are visited in input order, which keeps the pass stable. Afterwards the
/// histogram holds the inclusive prefix sum.
#[inline(always)]
fn scatter<F: FnMut(usize, usize)>(
    keys: &[u32],
    output: &mut [u32],
    histogram: &mut [u32; RADIX_HIST_LEN],
    shift: usize,
    mut carry: F,
) {
    keys.iter().enumerate().for_each(|(i, key)| {
        let bucket = digit(*key, shift);
        let output_idx = histogram[bucket] as usize;
        output[output_idx] = *key;
        carry(i, output_idx);
        histogram[bucket] += 1;
    });
}

/// Run all four digit passes over equally long buffers.
///
/// The pair that is read from alternates every pass, so after an even number
/// of passes the sorted keys are back in `input`.
#[inline(never)]
pub(crate) fn radix256_sort<P: Payload>(input: &mut [u32], output: &mut [u32], payload: &mut P) -> ActiveBuffer {
    debug_assert_eq!(input.len(), output.len());

    let mut histogram = [0_u32; RADIX_HIST_LEN];
    let mut source = ActiveBuffer::Input;

    for pass in 0..RADIX_PASSES {
        let shift = pass * RADIX_BITS;
        let (keys, keys_out) = source.split(input, output);

        fill_histogram(keys, shift, &mut histogram);
        cumulative_histogram(&mut histogram);

        match payload.lanes(source) {
            Some((values, values_out)) => scatter(keys, keys_out, &mut histogram, shift, |from, to| {
                values_out[to] = values[from];
            }),
            None => scatter(keys, keys_out, &mut histogram, shift, |_, _| {}),
        }

        trace!("radix pass {pass} (shift {shift}) over {} keys", keys.len());
        source = source.flip();
    }

    source
}

/// Sort the first `count` keys of `input_keys` ascending, using `output_keys` as the
/// second buffer.
///
/// Returns which of the two buffers holds the sorted keys.
/// `count` must not exceed `u32::MAX`.
pub fn sort_keys_only(input_keys: &mut [u32], output_keys: &mut [u32], count: usize) -> Result<ActiveBuffer, SortError> {
    check_count(count)?;
    check_capacity("input_keys", input_keys, count)?;
    check_capacity("output_keys", output_keys, count)?;

    Ok(radix256_sort(&mut input_keys[..count], &mut output_keys[..count], &mut ()))
}

/// Stable sort of the first `count` key-value pairs by key.
///
/// Each value ends up at the same index as its key, in the buffer pair
/// indicated by the returned [`ActiveBuffer`].
pub fn sort_keys_and_values(
    input_keys: &mut [u32],
    input_values: &mut [u32],
    output_keys: &mut [u32],
    output_values: &mut [u32],
    count: usize,
) -> Result<ActiveBuffer, SortError> {
    sort_with_kind(
        SortKind::KeysAndValues,
        input_keys,
        output_keys,
        Some(Values::new(input_values, output_values)),
        count,
    )
}

/// Sort with the payload mode chosen at runtime.
///
/// `values` must be present for [`SortKind::KeysAndValues`]. In
/// [`SortKind::KeysOnly`] mode any supplied values are left untouched.
pub fn sort_with_kind(
    kind: SortKind,
    input_keys: &mut [u32],
    output_keys: &mut [u32],
    values: Option<Values<'_>>,
    count: usize,
) -> Result<ActiveBuffer, SortError> {
    match (kind, values) {
        (SortKind::KeysOnly, _) => sort_keys_only(input_keys, output_keys, count),
        (SortKind::KeysAndValues, None) => Err(SortError::InvalidConfiguration(
            "key-value sort requires input and output value buffers".to_string(),
        )),
        (SortKind::KeysAndValues, Some(values)) => {
            check_count(count)?;
            check_capacity("input_keys", input_keys, count)?;
            check_capacity("output_keys", output_keys, count)?;
            check_capacity("input_values", values.input, count)?;
            check_capacity("output_values", values.output, count)?;

            let mut values = values.truncate(count);
            Ok(radix256_sort(&mut input_keys[..count], &mut output_keys[..count], &mut values))
        }
    }
}
