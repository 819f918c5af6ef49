use std::fmt::Display;

/// A closed range of real numbers `[low, high]`.
///
/// An interval is partial information about a number: the number is known to lie somewhere in
/// the range. A narrower interval is more informative, so the merge of two intervals is their
/// intersection.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates the interval `[low, high]`.
    ///
    /// Returns `None` if the bounds are out of order or either of them is NaN.
    pub fn new(low: f64, high: f64) -> Option<Interval> {
        if low.is_nan() || high.is_nan() || low > high {
            return None;
        }

        Some(Interval { low, high })
    }

    /// Creates the degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Option<Interval> {
        Interval::new(value, value)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    /// The largest interval contained in both `self` and `other`, or `None` if they are
    /// disjoint.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        Interval::new(self.low.max(other.low), self.high.min(other.high))
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        // The bounds are never NaN.
        self.low == other.low && self.high == other.high
    }
}

impl Eq for Interval {}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn bounds_out_of_order_are_rejected() {
        assert_eq!(Interval::new(3.0, 1.0), None);
        assert_eq!(Interval::new(f64::NAN, 1.0), None);
    }

    #[test]
    fn intersection_of_overlapping_intervals() {
        let a = Interval::new(1.0, 5.0).unwrap();
        let b = Interval::new(3.0, 8.0).unwrap();

        assert_eq!(a.intersect(&b), Interval::new(3.0, 5.0));
    }

    #[test]
    fn intersection_of_disjoint_intervals_is_empty() {
        let a = Interval::new(1.0, 2.0).unwrap();
        let b = Interval::new(3.0, 4.0).unwrap();

        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn touching_intervals_intersect_in_a_point() {
        let a = Interval::new(1.0, 2.0).unwrap();
        let b = Interval::new(2.0, 4.0).unwrap();

        let intersection = a.intersect(&b).unwrap();
        assert!(intersection.is_point());
        assert!(intersection.contains(2.0));
    }
}
