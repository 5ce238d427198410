use crate::SortError;

/// Identifies which of the two buffer pairs passed to a sort holds the result.
///
/// `Input` refers to the pair originally passed as input, `Output` to the pair
/// passed as output. The contents of the other pair are unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveBuffer {
    Input,
    Output,
}

impl ActiveBuffer {
    /// The side the next pass writes to.
    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            ActiveBuffer::Input => ActiveBuffer::Output,
            ActiveBuffer::Output => ActiveBuffer::Input,
        }
    }

    /// Select the active one of `input` and `output`.
    #[inline]
    pub fn pick<'a, T: ?Sized>(self, input: &'a T, output: &'a T) -> &'a T {
        match self {
            ActiveBuffer::Input => input,
            ActiveBuffer::Output => output,
        }
    }

    #[inline]
    pub fn pick_mut<'a, T: ?Sized>(self, input: &'a mut T, output: &'a mut T) -> &'a mut T {
        match self {
            ActiveBuffer::Input => input,
            ActiveBuffer::Output => output,
        }
    }

    /// Split a pair into `(source, destination)` for a pass reading from `self`.
    #[inline(always)]
    pub(crate) fn split<'a, T>(self, input: &'a mut [T], output: &'a mut [T]) -> (&'a [T], &'a mut [T]) {
        match self {
            ActiveBuffer::Input => (&*input, output),
            ActiveBuffer::Output => (&*output, input),
        }
    }
}

/// Fail unless `buffer` can hold `count` elements.
pub(crate) fn check_capacity<T>(name: &'static str, buffer: &[T], count: usize) -> Result<(), SortError> {
    if buffer.len() < count {
        return Err(SortError::Capacity {
            buffer: name,
            len: buffer.len(),
            count,
        });
    }
    Ok(())
}

/// Bucket offsets are kept as `u32`.
pub(crate) fn check_count(count: usize) -> Result<(), SortError> {
    if count > u32::MAX as usize {
        return Err(SortError::Capacity {
            buffer: "count",
            len: u32::MAX as usize,
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involution() {
        assert_eq!(ActiveBuffer::Input.flip(), ActiveBuffer::Output);
        assert_eq!(ActiveBuffer::Input.flip().flip(), ActiveBuffer::Input);
    }

    #[test]
    fn test_pick() {
        let a = [1, 2];
        let b = [3, 4];
        assert_eq!(ActiveBuffer::Input.pick(&a[..], &b[..]), &[1, 2]);
        assert_eq!(ActiveBuffer::Output.pick(&a[..], &b[..]), &[3, 4]);
    }

    #[test]
    fn test_capacity() {
        assert!(check_capacity("keys", &[0_u32; 3], 3).is_ok());
        match check_capacity("keys", &[0_u32; 2], 3) {
            Err(SortError::Capacity { buffer, len, count }) => {
                assert_eq!((buffer, len, count), ("keys", 2, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
