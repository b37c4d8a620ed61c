use chrono::{Local, NaiveDate};

use day_range::DayRange;

use crate::error::{Error, Result};
use crate::format::{DayFormat, English};
use crate::host::{NoHost, StripHost};
use crate::label::{fallback_label, format_range};
use crate::widths::WidthMap;

/// Width of the viewport when none is specified, which is the design width
/// of a phone screen.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 360.0;

/// Default number of days displayed on each side of the current date.
pub const DEFAULT_DAYS_AROUND: u32 = 5;

// --
// -- StripConfig
// --

/// Parameters of a strip, fixed for its whole lifetime.
///
/// ```
/// use calendar_strip::StripConfig;
/// use chrono::NaiveDate;
///
/// let config = StripConfig::default()
///     .with_current_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .with_days_after(30)
///     .with_viewport_width(420.0);
///
/// assert_eq!(config.days_before, 5);
/// assert_eq!(config.days_after, 30);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StripConfig {
    /// Day the strip is built around, today if unspecified
    pub current_date: Option<NaiveDate>,
    /// Number of days displayed before the current date
    pub days_before: u32,
    /// Number of days displayed after the current date
    pub days_after: u32,
    /// Width of the visible part of the strip, in pixels
    pub viewport_width: f64,
}

impl StripConfig {
    /// Build a configuration from signed day counts, as a host may hold them.
    ///
    /// ```
    /// use calendar_strip::StripConfig;
    ///
    /// assert!(StripConfig::from_signed(3, 0).is_ok());
    /// assert!(StripConfig::from_signed(-1, 5).is_err());
    /// assert!(StripConfig::from_signed(5, i64::MAX).is_err());
    /// ```
    pub fn from_signed(days_before: i64, days_after: i64) -> Result<Self> {
        let convert = |value: i64| {
            u32::try_from(value).map_err(|_| {
                if value < 0 {
                    Error::InvalidRange("number of days can't be negative")
                } else {
                    Error::InvalidRange("number of days is too large")
                }
            })
        };

        Ok(Self {
            days_before: convert(days_before)?,
            days_after: convert(days_after)?,
            ..Self::default()
        })
    }

    /// Build the strip around a specific day instead of today.
    pub fn with_current_date(self, current_date: NaiveDate) -> Self {
        Self { current_date: Some(current_date), ..self }
    }

    /// Set the number of days displayed before the current date.
    pub fn with_days_before(self, days_before: u32) -> Self {
        Self { days_before, ..self }
    }

    /// Set the number of days displayed after the current date.
    pub fn with_days_after(self, days_after: u32) -> Self {
        Self { days_after, ..self }
    }

    /// Set the width of the visible part of the strip.
    pub fn with_viewport_width(self, viewport_width: f64) -> Self {
        Self { viewport_width, ..self }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            current_date: None,
            days_before: DEFAULT_DAYS_AROUND,
            days_after: DEFAULT_DAYS_AROUND,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

// --
// -- Cell
// --

/// Everything a host needs to render a single day of the strip.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Cell {
    /// Position of the cell in the strip
    pub index: usize,
    /// Day represented by this cell
    pub day: NaiveDate,
    /// Uppercase short name of the weekday, eg. "SAT"
    pub weekday: String,
    /// Two-digits day of the month
    pub day_number: String,
    /// True if this is the selected day
    pub is_active: bool,
}

// --
// -- DayStrip
// --

/// Progress of the layout of a strip.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum StripState {
    /// No cell reported its width yet.
    Unmeasured,
    /// Some cells reported their width, layout computations are disabled.
    Measuring,
    /// All cells reported their width. This state is never left.
    Ready,
}

/// A horizontally scrolling row of selectable days.
///
/// The strip is driven by three notifications coming from its host: cell
/// widths as they get measured, scroll offsets and user selections. It keeps
/// the header label in sync and scrolls the selected day to the center of the
/// viewport through the [`StripHost`].
///
/// Any computation depending on layout is suppressed until every cell has been
/// measured.
///
/// ```
/// use calendar_strip::{DayStrip, StripConfig};
/// use calendar_strip::host::Recorder;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let config = StripConfig::default()
///     .with_current_date(today)
///     .with_viewport_width(300.0);
///
/// let mut strip = DayStrip::with_host(config, Recorder::default()).unwrap();
/// assert_eq!(strip.label(), "June, 2024");
///
/// for index in 0..strip.len() {
///     strip.record_cell_width(index, 60.0).unwrap();
/// }
///
/// assert_eq!(strip.host().last_scroll(), Some(180.0));
/// assert_eq!(strip.label(), "June,  2024");
/// ```
#[derive(Clone, Debug)]
pub struct DayStrip<H: StripHost = NoHost, F: DayFormat = English> {
    days: DayRange,
    widths: WidthMap,
    viewport_width: f64,
    scroll_offset: f64,
    selected: usize,
    label: String,
    host: H,
    fmt: F,
}

impl DayStrip<NoHost, English> {
    /// Create a strip that is not attached to any host.
    pub fn new(config: StripConfig) -> Result<Self> {
        Self::with_host(config, NoHost)
    }
}

impl<H: StripHost> DayStrip<H, English> {
    /// Create a strip sending its commands to given host.
    pub fn with_host(config: StripConfig, host: H) -> Result<Self> {
        Self::with_host_and_format(config, host, English)
    }
}

impl<H: StripHost, F: DayFormat> DayStrip<H, F> {
    /// Create a strip with custom formatting of days.
    pub fn with_host_and_format(config: StripConfig, host: H, fmt: F) -> Result<Self> {
        if !config.viewport_width.is_finite() || config.viewport_width <= 0.0 {
            return Err(Error::InvalidRange("viewport width must be a positive number"));
        }

        let current_date = config
            .current_date
            .unwrap_or_else(|| Local::now().date_naive());

        let days = DayRange::new(current_date, config.days_before, config.days_after)
            .ok_or(Error::InvalidRange("days are out of the supported calendar"))?;

        let label = fallback_label(&fmt, days.first());

        Ok(Self {
            widths: WidthMap::new(days.len()),
            selected: days.current_index(),
            viewport_width: config.viewport_width,
            scroll_offset: 0.0,
            days,
            label,
            host,
            fmt,
        })
    }

    // --
    // -- Accessors
    // --

    /// Number of days in the strip.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// All days of the strip, in order.
    pub fn days(&self) -> &DayRange {
        &self.days
    }

    /// Measured widths of the cells.
    pub fn widths(&self) -> &WidthMap {
        &self.widths
    }

    /// Index of the selected day.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected day.
    pub fn selected_day(&self) -> NaiveDate {
        self.days[self.selected]
    }

    /// Latest scroll offset reported by the host.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Width of the visible part of the strip.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Text to display above the strip.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Progress of the layout.
    pub fn state(&self) -> StripState {
        match self.widths.measured() {
            0 => StripState::Unmeasured,
            _ if self.widths.is_complete() => StripState::Ready,
            _ => StripState::Measuring,
        }
    }

    /// Host receiving the commands of this strip.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, eg. to consume recorded commands.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Drop the strip and give back its host.
    ///
    /// ```
    /// use calendar_strip::{DayStrip, StripConfig};
    /// use calendar_strip::host::{HostCommand, Recorder};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let config = StripConfig::default().with_current_date(today);
    /// let mut strip = DayStrip::with_host(config, Recorder::default()).unwrap();
    /// strip.select_day(4).unwrap();
    ///
    /// let host = strip.into_host();
    /// assert_eq!(
    ///     host.commands(),
    ///     [HostCommand::SelectDate(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())],
    /// );
    /// ```
    pub fn into_host(self) -> H {
        self.host
    }

    /// View model for the cell at given index.
    ///
    /// ```
    /// use calendar_strip::{DayStrip, StripConfig};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let strip = DayStrip::new(StripConfig::default().with_current_date(today)).unwrap();
    /// let cell = strip.cell(5).unwrap();
    ///
    /// assert_eq!(cell.weekday, "SAT");
    /// assert_eq!(cell.day_number, "15");
    /// assert!(cell.is_active);
    /// assert!(!strip.cell(4).unwrap().is_active);
    /// assert!(strip.cell(11).is_none());
    /// ```
    pub fn cell(&self, index: usize) -> Option<Cell> {
        let day = self.days.get(index)?;

        Some(Cell {
            index,
            day,
            weekday: self.fmt.weekday_abbrev(day).to_uppercase(),
            day_number: self.fmt.day_number(day),
            is_active: index == self.selected,
        })
    }

    /// View models for all cells of the strip, in order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).filter_map(|index| self.cell(index))
    }

    // --
    // -- Notifications from the host
    // --

    /// Store the measured width of a cell.
    ///
    /// When this is the last missing width, the selected day is scrolled to
    /// the center of the viewport and the label is refreshed. Later
    /// measurements only refresh the label.
    pub fn record_cell_width(&mut self, index: usize, width: f64) -> Result<()> {
        let was_complete = self.widths.is_complete();

        let completed = self.widths.record(index, width).inspect_err(|_err| {
            #[cfg(feature = "log")]
            log::warn!("Ignored measure of cell {index}: {_err}");
        })?;

        if completed {
            #[cfg(feature = "log")]
            log::debug!("All {} cells of the strip have been measured", self.len());

            self.scroll_to_selected()?;
            self.refresh_label();
        } else if was_complete {
            self.refresh_label();
        }

        Ok(())
    }

    /// Store the latest scroll offset, refreshing the label if the layout is
    /// known. The selection is left unchanged.
    pub fn set_scroll_offset(&mut self, x: f64) {
        self.scroll_offset = x;

        if self.widths.is_complete() {
            self.refresh_label();
        }
    }

    /// Select the day at given index, notify the host and scroll to this day
    /// if the layout is known.
    pub fn select_day(&mut self, index: usize) -> Result<NaiveDate> {
        let Some(day) = self.days.get(index) else {
            return Err(Error::IndexOutOfRange { index, len: self.len() });
        };

        self.selected = index;
        self.host.on_select_date(day);

        if self.widths.is_complete() {
            self.scroll_to_selected()?;
        }

        Ok(day)
    }

    /// Select a day by date, see [`DayStrip::select_day`]. Return `None` if
    /// the date is not displayed in the strip.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<usize> {
        let index = self.days.position(date)?;
        self.select_day(index).ok()?;
        Some(index)
    }

    // --
    // -- Layout
    // --

    /// Scroll offset that puts the cell at given index as close to the center
    /// of the viewport as possible without scrolling past the edges of the
    /// strip.
    pub fn centering_offset(&self, index: usize) -> Result<f64> {
        self.widths.ensure_complete()?;

        let out_of_range = || Error::IndexOutOfRange { index, len: self.len() };
        let before = self.widths.sum_through(index).ok_or_else(out_of_range)?;
        let width = self.widths.width(index).ok_or_else(out_of_range)?;
        let total = self.widths.total().unwrap_or_default();

        let max_x = (total - self.viewport_width).max(0.0);
        let target = before - self.viewport_width / 2.0 - width / 2.0;
        Ok(target.clamp(0.0, max_x))
    }

    /// Days whose cells are currently in sight, or `None` while the layout is
    /// unknown.
    ///
    /// The leading day is the one preceding the first cell starting after the
    /// scroll offset, which may be partially visible. The range ends before
    /// the first cell starting after the right edge of the viewport, or after
    /// the last day if the strip ends before that.
    pub fn visible_range(&self) -> Option<&[NaiveDate]> {
        let widths = self.widths.iter()?;
        let right_edge = self.scroll_offset + self.viewport_width;
        let mut start = None;
        let mut end = None;
        let mut cell_x = 0.0;

        for (index, width) in widths.enumerate() {
            if start.is_none() && cell_x >= self.scroll_offset {
                start = Some(index.saturating_sub(1));
            }

            if cell_x >= right_edge {
                end = Some(index);
                break;
            }

            cell_x += width;
        }

        // Scrolled past the left edge of the last cell: only this one remains.
        let start = start.unwrap_or(self.len() - 1);
        let end = end.unwrap_or(self.len()).max(start);
        Some(&self.days.as_slice()[start..end])
    }

    /// Emit a scroll command centering the selected day.
    fn scroll_to_selected(&mut self) -> Result<()> {
        let x = self.centering_offset(self.selected)?;

        #[cfg(feature = "log")]
        log::debug!("Scroll strip to x={x} to center cell {}", self.selected);

        self.host.scroll_to(x);
        Ok(())
    }

    /// Recompute the label from the visible range, notifying the host if it
    /// changed.
    fn refresh_label(&mut self) {
        let label = self
            .visible_range()
            .and_then(|days| format_range(&self.fmt, days))
            .unwrap_or_else(|| fallback_label(&self.fmt, self.days.first()));

        if label != self.label {
            #[cfg(feature = "log")]
            log::trace!("Strip label changed from {:?} to {label:?}", self.label);

            self.host.on_label_change(&label);
            self.label = label;
        }
    }
}
