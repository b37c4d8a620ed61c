use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Misuse of a [`DayStrip`](crate::DayStrip) by its host.
///
/// None of these are expected from a well-behaved host: they signal a bug on
/// the caller side rather than a condition worth retrying.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The strip configuration can't describe a valid range of days.
    InvalidRange(&'static str),
    /// A cell index doesn't belong to the strip.
    IndexOutOfRange { index: usize, len: usize },
    /// Layout was requested before every cell reported its width.
    NotReady { measured: usize, expected: usize },
    /// A measured width is negative or not a finite number.
    InvalidWidth { index: usize, width: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange(desc) => write!(f, "invalid range of days: {desc}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "cell index {index} is out of range: expected less than {len}")
            }
            Self::NotReady { measured, expected } => {
                write!(f, "only {measured} out of {expected} cells have been measured")
            }
            Self::InvalidWidth { index, width } => {
                write!(f, "invalid width {width} for cell {index}")
            }
        }
    }
}

impl std::error::Error for Error {}
