//! Split ratios and the drag arithmetic that moves them.

pub const MIN_SPLIT: f64 = 20.0;
pub const MAX_SPLIT: f64 = 80.0;

/// Keyboard resize step, in percent
pub const RESIZE_STEP: f64 = 5.0;

pub const DEFAULT_HORIZONTAL_SPLIT: f64 = 50.0;
pub const DEFAULT_VERTICAL_SPLIT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right split, driven by pointer column
    Horizontal,
    /// Editor/testcase split, driven by pointer row
    Vertical,
}

/// Percentage boundary between two adjacent panes.
///
/// Invariant: the value is always within `[MIN_SPLIT, MAX_SPLIT]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitRatio(f64);

impl SplitRatio {
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self(MIN_SPLIT);
        }
        Self(percent.clamp(MIN_SPLIT, MAX_SPLIT))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Share of the second pane
    pub fn complement(self) -> f64 {
        100.0 - self.0
    }

    pub fn step(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

/// Ratio after the pointer moved from `start_pos` to `pos` within a container
/// `extent` cells long. A zero extent counts as one cell.
pub fn ratio_after_drag(
    start_ratio: SplitRatio,
    start_pos: i32,
    pos: i32,
    extent: u16,
) -> SplitRatio {
    let extent = f64::from(extent.max(1));
    let delta = f64::from(pos - start_pos);
    let delta_percent = delta * 100.0 / extent;
    SplitRatio::new(start_ratio.get() + delta_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 50.0)]
    #[case(10.0, MIN_SPLIT)]
    #[case(-300.0, MIN_SPLIT)]
    #[case(95.0, MAX_SPLIT)]
    #[case(20.0, 20.0)]
    #[case(80.0, 80.0)]
    fn new_clamps_into_bounds(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(SplitRatio::new(input).get(), expected);
    }

    #[test]
    fn nan_falls_back_to_minimum() {
        assert_eq!(SplitRatio::new(f64::NAN).get(), MIN_SPLIT);
    }

    #[test]
    fn complement_is_remaining_share() {
        assert_eq!(SplitRatio::new(70.0).complement(), 30.0);
    }

    #[test]
    fn hundred_cells_right_of_thousand_adds_ten_percent() {
        let ratio = ratio_after_drag(SplitRatio::new(50.0), 400, 500, 1000);

        assert_eq!(ratio.get(), 60.0);
    }

    #[test]
    fn huge_move_clamps_to_maximum() {
        let ratio = ratio_after_drag(SplitRatio::new(50.0), 400, 400 + 5100, 1000);

        assert_eq!(ratio.get(), MAX_SPLIT);
    }

    #[test]
    fn huge_negative_move_clamps_to_minimum() {
        let ratio = ratio_after_drag(SplitRatio::new(50.0), 400, -10_000, 1000);

        assert_eq!(ratio.get(), MIN_SPLIT);
    }

    #[test]
    fn zero_extent_does_not_divide_by_zero() {
        let ratio = ratio_after_drag(SplitRatio::new(50.0), 0, 1, 0);

        assert_eq!(ratio.get(), MAX_SPLIT);
    }

    #[test]
    fn no_movement_keeps_start_ratio() {
        let ratio = ratio_after_drag(SplitRatio::new(37.5), 12, 12, 80);

        assert_eq!(ratio.get(), 37.5);
    }

    #[rstest]
    #[case(50.0, RESIZE_STEP, 55.0)]
    #[case(78.0, RESIZE_STEP, 80.0)]
    #[case(22.0, -RESIZE_STEP, 20.0)]
    fn step_moves_and_clamps(#[case] start: f64, #[case] delta: f64, #[case] expected: f64) {
        assert_eq!(SplitRatio::new(start).step(delta).get(), expected);
    }
}
