use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::booking::schedule;

#[component]
pub fn BookingCalendar(
    selected: Signal<Option<NaiveDate>>,
    on_pick: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let month_offset = RwSignal::new(0i32);

    view! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        month_offset.update(|v| *v -= 1);
                    }
                    disabled=Signal::derive(move || month_offset.get() <= 0)
                >
                    "←"
                </Button>

                <div class="month-label">
                    {move || {
                        let (year, month) = month_at(today(), month_offset.get());
                        format!("{} {}", month_name(month), year)
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        month_offset.update(|v| *v += 1);
                    }
                    disabled=Signal::derive(move || month_offset.get() >= 3)
                >
                    "→"
                </Button>
            </div>

            <div class="weekday-headers">
                <div class="weekday-header">"Пн"</div>
                <div class="weekday-header">"Вт"</div>
                <div class="weekday-header">"Ср"</div>
                <div class="weekday-header">"Чт"</div>
                <div class="weekday-header">"Пт"</div>
                <div class="weekday-header">"Сб"</div>
                <div class="weekday-header">"Вс"</div>
            </div>

            {move || {
                let today = today();
                let (year, month) = month_at(today, month_offset.get());

                let mut cells = Vec::new();
                for _ in 0..first_weekday(year, month) {
                    cells.push(view! { <div class="calendar-day empty"></div> }.into_any());
                }
                for day in 1..=days_in_month(year, month) {
                    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                        let selectable = schedule::is_selectable(date, today);
                        cells.push(view! {
                            <button
                                type="button"
                                class="calendar-day"
                                class:unavailable=!selectable
                                class:selected=move || selected.get() == Some(date)
                                disabled=!selectable
                                on:click=move |_| {
                                    if selectable {
                                        on_pick(date);
                                    }
                                }
                            >
                                {day}
                            </button>
                        }.into_any());
                    }
                }

                view! { <div class="calendar-days">{cells}</div> }
            }}

            <div class="calendar-footer">
                {move || {
                    match selected.get() {
                        None => view! {
                            <p class="no-selection">"Выберите доступную дату"</p>
                        }.into_any(),
                        Some(date) => view! {
                            <p class="selected-info">
                                "Выбрано: " {schedule::format_booking_date(date)}
                            </p>
                        }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn month_at(today: NaiveDate, offset: i32) -> (i32, u32) {
    let months = today.year() * 12 + today.month0() as i32 + offset;
    (months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

// Monday-first, matching the header row
fn first_weekday(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday() as usize)
        .unwrap_or(0)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Январь",
        2 => "Февраль",
        3 => "Март",
        4 => "Апрель",
        5 => "Май",
        6 => "Июнь",
        7 => "Июль",
        8 => "Август",
        9 => "Сентябрь",
        10 => "Октябрь",
        11 => "Ноябрь",
        12 => "Декабрь",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_offsets_wrap_across_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        assert_eq!(month_at(today, 0), (2025, 11));
        assert_eq!(month_at(today, 1), (2025, 12));
        assert_eq!(month_at(today, 2), (2026, 1));
        assert_eq!(month_at(today, 3), (2026, 2));
    }

    #[test]
    fn february_length_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn first_weekday_is_monday_based() {
        // September 2025 starts on a Monday
        assert_eq!(first_weekday(2025, 9), 0);
        // June 2025 starts on a Sunday
        assert_eq!(first_weekday(2025, 6), 6);
    }
}
