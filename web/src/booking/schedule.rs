use chrono::{Datelike, NaiveDate, Weekday};

/// Fixed start times offered every working day. This is a static allow-list,
/// not an availability calendar.
pub const TIME_SLOTS: [&str; 7] = [
    "10:00", "11:30", "13:00", "14:30", "16:00", "17:30", "19:00",
];

/// The consultancy does not take bookings on Sundays.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Sun;

/// A date can be booked when it is not in the past and not on the weekly
/// closed day.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date.weekday() != CLOSED_WEEKDAY
}

/// Day/month/year formatting used on the wire and in the UI.
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_dates_are_not_selectable() {
        let today = date(2025, 1, 20);
        assert!(!is_selectable(date(2025, 1, 17), today));
        assert!(!is_selectable(date(2024, 12, 31), today));
    }

    #[test]
    fn today_and_future_weekdays_are_selectable() {
        let today = date(2025, 1, 20); // a Monday
        assert!(is_selectable(today, today));
        assert!(is_selectable(date(2025, 1, 21), today));
        assert!(is_selectable(date(2025, 2, 14), today));
    }

    #[test]
    fn sundays_are_closed_even_in_the_future() {
        let today = date(2025, 1, 20);
        assert!(!is_selectable(date(2025, 1, 26), today)); // Sunday
        assert!(!is_selectable(date(2025, 2, 2), today)); // Sunday
        assert!(is_selectable(date(2025, 1, 25), today)); // Saturday
    }

    #[test]
    fn dates_format_as_day_month_year() {
        assert_eq!(format_booking_date(date(2025, 1, 5)), "05.01.2025");
        assert_eq!(format_booking_date(date(2025, 11, 30)), "30.11.2025");
    }
}
