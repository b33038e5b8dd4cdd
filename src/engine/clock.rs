//! Clock label: local time formatted once per redraw cycle.

use jiff::Zoned;

/// `hour:minute:second month/day/year`, 12-hour clock, every field zero padded.
pub const CLOCK_FORMAT: &str = "%I:%M:%S %m/%d/%Y";

/// Format `now` for the clock label.
pub fn format_clock(now: &Zoned) -> String {
    now.strftime(CLOCK_FORMAT).to_string()
}

/// The text bound to the clock label. Recomputed every cycle, never stored
/// beyond it.
#[derive(Debug, Default, Clone)]
pub struct Clock {
    text: String,
}

impl Clock {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn refresh(&mut self, now: &Zoned) {
        self.text = format_clock(now);
    }

    /// Refresh from the system clock in the local time zone.
    pub fn refresh_now(&mut self) {
        self.refresh(&Zoned::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{civil::date, tz::TimeZone};

    fn at(y: i16, mo: i8, d: i8, h: i8, mi: i8, s: i8) -> Zoned {
        date(y, mo, d)
            .at(h, mi, s, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn pads_every_field_to_two_digits() {
        assert_eq!(format_clock(&at(2024, 3, 5, 7, 4, 9)), "07:04:09 03/05/2024");
    }

    #[test]
    fn uses_twelve_hour_clock() {
        assert_eq!(format_clock(&at(2023, 12, 31, 15, 30, 0)), "03:30:00 12/31/2023");
        assert_eq!(format_clock(&at(2023, 12, 31, 0, 0, 59)), "12:00:59 12/31/2023");
        assert_eq!(format_clock(&at(2023, 12, 31, 12, 0, 0)), "12:00:00 12/31/2023");
    }

    #[test]
    fn live_text_has_fixed_shape() {
        let mut clock = Clock::default();
        assert!(clock.text().is_empty());
        clock.refresh_now();

        let text = clock.text();
        assert_eq!(text.len(), "HH:MM:SS MM/DD/YYYY".len());
        let bytes = text.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match i {
                2 | 5 => assert_eq!(*b, b':'),
                8 => assert_eq!(*b, b' '),
                11 | 14 => assert_eq!(*b, b'/'),
                _ => assert!(b.is_ascii_digit(), "unexpected {text:?}"),
            }
        }
    }
}
