//! `Duration`: a signed number of days.

use hijri_core::Days;

/// A signed span of whole days.  Negative values point into the past.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    days: Days,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Duration = Duration { days: 0 };

    /// A duration of `days` days.
    pub const fn days(days: Days) -> Self {
        Duration { days }
    }

    /// A duration of `weeks` weeks.
    ///
    /// Panics on overflow; see [`Duration::checked_mul`].
    pub const fn weeks(weeks: Days) -> Self {
        match weeks.checked_mul(7) {
            Some(days) => Duration { days },
            None => panic!("overflow when building duration from weeks"),
        }
    }

    /// Number of days.
    pub fn num_days(&self) -> Days {
        self.days
    }

    /// Absolute value.  Panics for `i64::MIN` days; see
    /// [`Duration::checked_abs`].
    pub fn abs(self) -> Self {
        self.checked_abs().expect("overflow when taking absolute duration")
    }

    /// `true` for negative durations.
    pub fn is_negative(&self) -> bool {
        self.days < 0
    }

    /// `self / other` as a real number; `None` if `other` is zero.
    pub fn ratio(self, other: Duration) -> Option<f64> {
        if other.days == 0 {
            None
        } else {
            Some(self.days as f64 / other.days as f64)
        }
    }

    /// Addition returning `None` on overflow.
    pub fn checked_add(self, rhs: Duration) -> Option<Self> {
        self.days.checked_add(rhs.days).map(Duration::days)
    }

    /// Subtraction returning `None` on overflow.
    pub fn checked_sub(self, rhs: Duration) -> Option<Self> {
        self.days.checked_sub(rhs.days).map(Duration::days)
    }

    /// Negation returning `None` on overflow.
    pub fn checked_neg(self) -> Option<Self> {
        self.days.checked_neg().map(Duration::days)
    }

    /// Absolute value returning `None` on overflow.
    pub fn checked_abs(self) -> Option<Self> {
        self.days.checked_abs().map(Duration::days)
    }

    /// Scaling returning `None` on overflow.
    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.days.checked_mul(rhs).map(Duration::days)
    }

    /// Truncating division returning `None` for a zero divisor.
    pub fn checked_div(self, rhs: i64) -> Option<Self> {
        self.days.checked_div(rhs).map(Duration::days)
    }
}

impl From<Days> for Duration {
    fn from(days: Days) -> Self {
        Duration::days(days)
    }
}

/// Panics on overflow; see [`Duration::checked_add`].
impl std::ops::Add for Duration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

/// Panics on overflow; see [`Duration::checked_sub`].
impl std::ops::Sub for Duration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).expect("overflow when subtracting durations")
    }
}

/// Panics for `i64::MIN` days; see [`Duration::checked_neg`].
impl std::ops::Neg for Duration {
    type Output = Self;
    fn neg(self) -> Self {
        self.checked_neg().expect("overflow when negating duration")
    }
}

/// Panics on overflow; see [`Duration::checked_mul`].
impl std::ops::Mul<i64> for Duration {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        self.checked_mul(rhs).expect("overflow when multiplying duration")
    }
}

impl std::ops::Mul<Duration> for i64 {
    type Output = Duration;
    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

/// Truncates toward zero.  Panics on a zero divisor, like integer division;
/// see [`Duration::checked_div`].
impl std::ops::Div<i64> for Duration {
    type Output = Self;
    fn div(self, rhs: i64) -> Self {
        Duration::days(self.days / rhs)
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = if self.days.abs() == 1 { "day" } else { "days" };
        write!(f, "{} {unit}", self.days)
    }
}

impl std::fmt::Debug for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duration({}d)", self.days)
    }
}
