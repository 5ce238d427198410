//! Allocating wrappers around the buffer based entry points.

use crate::{sort_keys_and_values, sort_keys_only, ActiveBuffer, QuantileSelector, SortError};

fn try_zeroed(len: usize) -> Result<Vec<u32>, SortError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

fn try_copy(values: &[u32]) -> Result<Vec<u32>, SortError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(values.len())?;
    buffer.extend_from_slice(values);
    Ok(buffer)
}

/// Return a sorted copy of `keys`.
#[inline(never)]
pub fn sort_keys(keys: &[u32]) -> Result<Vec<u32>, SortError> {
    let mut input = try_copy(keys)?;
    let mut output = try_zeroed(keys.len())?;

    let active = sort_keys_only(&mut input, &mut output, keys.len())?;
    Ok(match active {
        ActiveBuffer::Input => input,
        ActiveBuffer::Output => output,
    })
}

/// Return copies of `keys` and `values`, stably sorted by key.
pub fn sort_pairs(keys: &[u32], values: &[u32]) -> Result<(Vec<u32>, Vec<u32>), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::InvalidConfiguration(format!(
            "{} keys but {} values",
            keys.len(),
            values.len()
        )));
    }
    let count = keys.len();
    let mut keys_in = try_copy(keys)?;
    let mut values_in = try_copy(values)?;
    let mut keys_out = try_zeroed(count)?;
    let mut values_out = try_zeroed(count)?;

    let active = sort_keys_and_values(&mut keys_in, &mut values_in, &mut keys_out, &mut values_out, count)?;
    Ok(match active {
        ActiveBuffer::Input => (keys_in, values_in),
        ActiveBuffer::Output => (keys_out, values_out),
    })
}

/// Select roughly the `target` largest pairs with `selector` and return them sorted by key.
///
/// The length of the result only approximates `target`.
pub fn partial_sort_pairs(
    keys: &[u32],
    values: &[u32],
    target: usize,
    selector: &QuantileSelector,
) -> Result<(Vec<u32>, Vec<u32>), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::InvalidConfiguration(format!(
            "{} keys but {} values",
            keys.len(),
            values.len()
        )));
    }
    let count = keys.len();
    let mut tail_keys = try_zeroed(count)?;
    let mut tail_values = try_zeroed(count)?;

    let retained = selector.select(keys, values, &mut tail_keys, &mut tail_values, count, target)?;
    tail_keys.truncate(retained);
    tail_values.truncate(retained);

    sort_pairs(&tail_keys, &tail_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_keys() {
        assert_eq!(sort_keys(&[3, 1, 2]).unwrap(), vec![1, 2, 3]);
        assert!(sort_keys(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_sort_pairs_length_mismatch() {
        assert!(matches!(sort_pairs(&[1, 2], &[1]), Err(SortError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_partial_sort_pairs() {
        let keys = [10, 100, 40, 90, 50, 60, 70, 80, 30, 20];
        let values = (0..10).collect::<Vec<u32>>();
        let selector = QuantileSelector::new(1).unwrap();

        let (tail_keys, tail_values) = partial_sort_pairs(&keys, &values, 3, &selector).unwrap();

        assert_eq!(tail_keys, vec![80, 90, 100]);
        assert_eq!(tail_values, vec![7, 3, 1]);
    }
}
