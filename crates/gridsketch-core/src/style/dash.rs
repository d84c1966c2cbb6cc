//! Periodic dash patterns for borders and lines.

/// A repeating run of `dash` visible cells followed by `gap` blank cells.
///
/// The pattern is evaluated over the 0-based index of a cell in a stroke's
/// traversal. `offset` shifts the phase: index `offset` is the first cell of
/// a dash.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::style::DashPattern;
/// let pattern = DashPattern::new(2, 1, 0);
/// let visible: String = (0..7)
///     .map(|i| if pattern.is_gap(i) { ' ' } else { '─' })
///     .collect();
/// assert_eq!(visible, "── ── ─");
/// assert!(!DashPattern::SOLID.is_gap(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashPattern {
    dash: u32,
    gap: u32,
    offset: i32,
}

impl Default for DashPattern {
    fn default() -> Self {
        Self::SOLID
    }
}

impl DashPattern {
    /// The pattern without gaps
    pub const SOLID: Self = Self {
        dash: 1,
        gap: 0,
        offset: 0,
    };

    /// Creates a pattern; a zero dash length is raised to 1
    pub fn new(dash: u32, gap: u32, offset: i32) -> Self {
        Self {
            dash: dash.max(1),
            gap,
            offset,
        }
    }

    pub fn dash(&self) -> u32 {
        self.dash
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns true if the pattern never produces a gap
    pub fn is_solid(&self) -> bool {
        self.gap == 0
    }

    /// Returns true if the cell at `index` falls into a gap
    pub fn is_gap(&self, index: usize) -> bool {
        if self.is_solid() {
            return false;
        }
        let period = i64::from(self.dash) + i64::from(self.gap);
        let phase = (index as i64 - i64::from(self.offset)).rem_euclid(period);
        phase >= i64::from(self.dash)
    }
}
