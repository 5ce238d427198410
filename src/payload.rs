use crate::ActiveBuffer;

/// Data moved in lockstep with the keys.
///
/// Keys-only sorting uses `()`, key-value sorting uses [`Values`]. The radix
/// passes are written once and monomorphized for both.
pub(crate) trait Payload {
    /// Value slices as `(source, destination)` for a pass reading from `source`,
    /// or `None` when there is nothing to carry.
    fn lanes(&mut self, source: ActiveBuffer) -> Option<(&[u32], &mut [u32])>;
}

impl Payload for () {
    #[inline(always)]
    fn lanes(&mut self, _source: ActiveBuffer) -> Option<(&[u32], &mut [u32])> {
        None
    }
}

/// A pair of value buffers parallel to the input and output key buffers.
#[derive(Debug)]
pub struct Values<'a> {
    pub input: &'a mut [u32],
    pub output: &'a mut [u32],
}

impl<'a> Values<'a> {
    pub fn new(input: &'a mut [u32], output: &'a mut [u32]) -> Self {
        Self { input, output }
    }

    /// Restrict both buffers to their first `count` elements.
    pub(crate) fn truncate(self, count: usize) -> Values<'a> {
        let Values { input, output } = self;
        Values {
            input: &mut input[..count],
            output: &mut output[..count],
        }
    }
}

impl Payload for Values<'_> {
    #[inline(always)]
    fn lanes(&mut self, source: ActiveBuffer) -> Option<(&[u32], &mut [u32])> {
        Some(source.split(self.input, self.output))
    }
}

/// Runtime selection of the payload mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKind {
    #[default]
    KeysOnly,
    KeysAndValues,
}
