//! Side effects a [`DayStrip`](crate::DayStrip) issues towards the surface
//! rendering it.

use chrono::NaiveDate;

/// The surface hosting a strip: a horizontal scroll view, the header
/// displaying the label and whoever listens to date selection.
///
/// All commands are fire-and-forget, a strip never waits for the host to
/// complete one of them. A newer `scroll_to` simply supersedes the previous
/// one and it is up to the host to coalesce them if needed.
pub trait StripHost {
    /// Scroll the strip so that its left edge is at `x` pixels.
    fn scroll_to(&mut self, _x: f64) {}

    /// The user picked a new day.
    fn on_select_date(&mut self, _day: NaiveDate) {}

    /// The header text changed.
    fn on_label_change(&mut self, _label: &str) {}
}

impl<H: StripHost + ?Sized> StripHost for &mut H {
    fn scroll_to(&mut self, x: f64) {
        (**self).scroll_to(x)
    }

    fn on_select_date(&mut self, day: NaiveDate) {
        (**self).on_select_date(day)
    }

    fn on_label_change(&mut self, label: &str) {
        (**self).on_label_change(label)
    }
}

/// A host that ignores every command.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoHost;

impl StripHost for NoHost {}

/// A command received by a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostCommand {
    ScrollTo(f64),
    SelectDate(NaiveDate),
    Label(String),
}

/// A host that keeps track of all received commands, in order.
///
/// ```
/// use calendar_strip::host::{HostCommand, Recorder, StripHost};
///
/// let mut host = Recorder::default();
/// host.scroll_to(12.0);
/// host.on_label_change("June,  2024");
///
/// assert_eq!(host.last_scroll(), Some(12.0));
/// assert_eq!(host.last_label(), Some("June,  2024"));
/// assert_eq!(host.take().len(), 2);
/// assert!(host.commands().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    commands: Vec<HostCommand>,
}

impl Recorder {
    /// All commands received since creation or since last call to
    /// [`Recorder::take`].
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Consume recorded commands.
    pub fn take(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Position of the latest scroll command.
    pub fn last_scroll(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            HostCommand::ScrollTo(x) => Some(*x),
            _ => None,
        })
    }

    /// Latest label pushed to the header.
    pub fn last_label(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            HostCommand::Label(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// Number of scroll commands received.
    pub fn count_scrolls(&self) -> usize {
        (self.commands.iter())
            .filter(|cmd| matches!(cmd, HostCommand::ScrollTo(_)))
            .count()
    }
}

impl StripHost for Recorder {
    fn scroll_to(&mut self, x: f64) {
        self.commands.push(HostCommand::ScrollTo(x))
    }

    fn on_select_date(&mut self, day: NaiveDate) {
        self.commands.push(HostCommand::SelectDate(day))
    }

    fn on_label_change(&mut self, label: &str) {
        self.commands.push(HostCommand::Label(label.to_string()))
    }
}
