/// Generator of stepped number series.
use crate::pattern::FieldValueType;

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct StepSeries {
    max: FieldValueType,
    step: FieldValueType,
    next: FieldValueType,
}

impl StepSeries {
    /// Yields `start, start + step, ...` while the value stays within `max`,
    /// so the series is empty when `start > max`.
    ///
    /// `step` must be non-zero, and the caller is responsible to ensure
    /// that the maximum serial value (`max + step`) fits the value type.
    #[inline]
    pub(crate) fn new(start: FieldValueType, max: FieldValueType, step: FieldValueType) -> Self {
        debug_assert!(step > 0, "step value is 0");

        Self { max, step, next: start }
    }
}

impl Iterator for StepSeries {
    type Item = FieldValueType;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.max {
            None
        } else {
            let current = self.next;
            self.next += self.step;
            Some(current)
        }
    }
}
