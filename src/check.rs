/// Index of the first key that is smaller than its predecessor, if any.
pub fn first_unsorted(keys: &[u32]) -> Option<usize> {
    keys.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

pub fn is_sorted_keys(keys: &[u32]) -> bool {
    first_unsorted(keys).is_none()
}
