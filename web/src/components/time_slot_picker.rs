use leptos::prelude::*;

use crate::booking::schedule;

/// Fixed grid of daily start times. Slots are a static allow-list; nothing
/// here checks them against existing reservations.
#[component]
pub fn TimeSlotPicker(
    selected: Signal<String>,
    on_pick: impl Fn(&'static str) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="time-slot-picker">
            <div class="time-slot-grid">
                {schedule::TIME_SLOTS
                    .iter()
                    .map(|&slot| {
                        view! {
                            <button
                                type="button"
                                class="time-slot-button"
                                class:selected=move || selected.get() == slot
                                on:click=move |_| on_pick(slot)
                            >
                                {slot}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
