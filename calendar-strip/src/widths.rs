use crate::error::{Error, Result};

/// Pixel widths of the cells of a strip, filled as cells get laid out.
///
/// Measurements may arrive in any order. The map is *complete* once every
/// cell has been measured at least once, which never reverts: the number of
/// cells is fixed at creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidthMap {
    /// Width of each cell by index, if it has been measured yet
    widths: Vec<Option<f64>>,
    /// Number of `Some` values in `widths`
    measured: usize,
}

impl WidthMap {
    /// Create a map expecting `len` cells to be measured.
    pub fn new(len: usize) -> Self {
        Self { widths: vec![None; len], measured: 0 }
    }

    /// Store the width of a cell, overriding any previous measure. Return
    /// `true` only if this completed the map.
    ///
    /// ```
    /// use calendar_strip::widths::WidthMap;
    ///
    /// let mut widths = WidthMap::new(2);
    /// assert!(!widths.record(1, 40.0).unwrap());
    /// assert!(!widths.record(1, 42.0).unwrap());
    /// assert!(widths.record(0, 40.0).unwrap());
    /// assert!(!widths.record(0, 40.0).unwrap());
    /// assert_eq!(widths.total(), Some(82.0));
    ///
    /// assert!(widths.record(2, 40.0).is_err());
    /// assert!(widths.record(0, f64::NAN).is_err());
    /// ```
    pub fn record(&mut self, index: usize, width: f64) -> Result<bool> {
        let len = self.widths.len();

        let Some(slot) = self.widths.get_mut(index) else {
            return Err(Error::IndexOutOfRange { index, len });
        };

        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidWidth { index, width });
        }

        if slot.replace(width).is_some() {
            return Ok(false);
        }

        self.measured += 1;
        Ok(self.measured == len)
    }

    /// Number of cells expected in this map.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Number of distinct cells that have been measured.
    pub fn measured(&self) -> usize {
        self.measured
    }

    /// Check if every cell has been measured.
    pub fn is_complete(&self) -> bool {
        self.measured == self.widths.len()
    }

    /// Fail with [`Error::NotReady`] if the map is not complete.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(Error::NotReady { measured: self.measured, expected: self.widths.len() })
        }
    }

    /// Width of a single cell, if it has been measured.
    pub fn width(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied().flatten()
    }

    /// Iterate over all widths, in order of cells. Return `None` while the
    /// map is incomplete.
    pub fn iter(&self) -> Option<impl ExactSizeIterator<Item = f64> + '_> {
        self.is_complete()
            .then(|| self.widths.iter().map(|w| w.unwrap_or_default()))
    }

    /// Sum of the widths of all cells.
    pub fn total(&self) -> Option<f64> {
        Some(self.iter()?.sum())
    }

    /// Sum of the widths of cells `[0, index]`, that is the position of the
    /// right edge of cell `index`.
    ///
    /// ```
    /// use calendar_strip::widths::WidthMap;
    ///
    /// let mut widths = WidthMap::new(3);
    /// widths.record(0, 10.0).unwrap();
    /// widths.record(1, 20.0).unwrap();
    /// assert_eq!(widths.sum_through(1), None);
    ///
    /// widths.record(2, 30.0).unwrap();
    /// assert_eq!(widths.sum_through(1), Some(30.0));
    /// assert_eq!(widths.sum_through(2), Some(60.0));
    /// assert_eq!(widths.sum_through(3), None);
    /// ```
    pub fn sum_through(&self, index: usize) -> Option<f64> {
        if index >= self.widths.len() {
            return None;
        }

        Some(self.iter()?.take(index + 1).sum())
    }
}
