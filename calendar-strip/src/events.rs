//! Events listed below the strip for the selected day.

use chrono::{NaiveDate, NaiveDateTime};

/// Something happening at a given time.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDateTime,
    pub title: String,
    pub description: String,
    /// URI of an illustration
    pub image: String,
}

impl Event {
    /// Small helper to create a new event without illustration.
    pub fn new(
        date: NaiveDateTime,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            title: title.into(),
            description: description.into(),
            image: String::new(),
        }
    }

    /// Attach an illustration to this event.
    pub fn with_image(self, image: impl Into<String>) -> Self {
        Self { image: image.into(), ..self }
    }

    /// Check if this event happens during given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.date() == day
    }
}

/// Events happening during given calendar day, in their original order.
///
/// ```
/// use calendar_strip::events::{events_on, Event};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let events = [
///     Event::new(day.and_hms_opt(20, 0, 0).unwrap(), "Concert", "Open air"),
///     Event::new(day.succ_opt().unwrap().and_hms_opt(9, 0, 0).unwrap(), "Market", ""),
///     Event::new(day.and_hms_opt(8, 30, 0).unwrap(), "Run", "5k"),
/// ];
///
/// let titles: Vec<_> = events_on(&events, day).map(|e| e.title.as_str()).collect();
/// assert_eq!(titles, ["Concert", "Run"]);
/// ```
pub fn events_on(events: &[Event], day: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
    events.iter().filter(move |event| event.is_on(day))
}
