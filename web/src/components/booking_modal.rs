use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::booking::form::{outcome, BookingForm, SubmitOutcome};
use crate::catalog;
use crate::components::{BookingCalendar, TimeSlotPicker};
use crate::server::submit_booking;

pub const SUCCESS_MESSAGE: &str =
    "Заявка успешно отправлена! Специалист свяжется с вами в ближайшее время.";

#[component]
pub fn BookingModal(form: RwSignal<BookingForm>) -> impl IntoView {
    let selected_date = Signal::derive(move || form.with(|f| f.date));
    let selected_slot = Signal::derive(move || form.with(|f| f.time_slot.clone()));

    let handle_submit = move || {
        // Guard check, submitting flip and request construction happen in
        // one update, so a rapid double submit cannot dispatch twice.
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => {
                spawn_local(async move {
                    let result = submit_booking(request).await;
                    if let Err(e) = &result {
                        leptos::logging::error!("Booking submission failed: {}", e);
                    }
                    let outcome = outcome(result);
                    form.update(|f| f.finish_submit(&outcome));
                    match outcome {
                        SubmitOutcome::Accepted => notify(SUCCESS_MESSAGE),
                        SubmitOutcome::Rejected(message) => notify(&message),
                    }
                });
            }
            Some(Err(e)) => notify(&e.to_string()),
            None => {}
        }
    };

    let is_button_disabled = Memo::new(move |_| !form.with(|f| f.is_submittable()));

    view! {
        <div class=move || {
            if form.with(|f| f.dialog_open) {
                "booking-modal-overlay show"
            } else {
                "booking-modal-overlay"
            }
        }>
            <div class="booking-modal">
                <div class="modal-header">
                    <h2>"Запись на консультацию"</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| form.update(|f| f.close())
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <form class="booking-form" on:submit=move |ev| {
                    ev.prevent_default();
                    handle_submit();
                }>
                    <div class="booking-columns">
                        <div class="booking-column">
                            <h4>"Выберите услугу"</h4>
                            <select
                                class="form-select"
                                on:change=move |ev| {
                                    form.update(|f| f.set_service(event_target_value(&ev)))
                                }
                            >
                                <option value="" selected=move || {
                                    form.with(|f| f.service_id.is_empty())
                                }>
                                    "Выберите услугу"
                                </option>
                                {catalog::SERVICES
                                    .iter()
                                    .map(|service| {
                                        let id = service.id;
                                        view! {
                                            <option
                                                value=id
                                                selected=move || form.with(|f| f.service_id == id)
                                            >
                                                {format!("{} - {}", service.title, service.price)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>

                            <h4>"Выберите время"</h4>
                            <TimeSlotPicker
                                selected=selected_slot
                                on_pick=move |slot| {
                                    form.update(|f| f.set_time_slot(slot.to_string()))
                                }
                            />
                        </div>

                        <div class="booking-column">
                            <h4>"Выберите дату"</h4>
                            <BookingCalendar
                                selected=selected_date
                                on_pick=move |date| form.update(|f| f.set_date(date))
                            />
                        </div>
                    </div>

                    <div class="contact-fields">
                        <h4>"Ваши контактные данные"</h4>
                        <div class="form-row">
                            <input
                                class="form-input"
                                placeholder="Ваше имя *"
                                prop:value=move || form.with(|f| f.client_name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_client_name(event_target_value(&ev)))
                                }
                            />
                            <input
                                class="form-input"
                                type="tel"
                                placeholder="Телефон *"
                                prop:value=move || form.with(|f| f.client_phone.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_client_phone(event_target_value(&ev)))
                                }
                            />
                        </div>
                        <input
                            class="form-input"
                            type="email"
                            placeholder="Email (необязательно)"
                            prop:value=move || form.with(|f| f.client_email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_client_email(event_target_value(&ev)))
                            }
                        />
                        <textarea
                            class="form-textarea"
                            placeholder="Дополнительное сообщение (необязательно)"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_message(event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.update(|f| f.close())
                        >
                            "Отмена"
                        </Button>
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::from(is_button_disabled)
                            loading=Signal::derive(move || form.with(|f| f.submitting))
                        >
                            {move || {
                                if form.with(|f| f.submitting) {
                                    "Отправка..."
                                } else {
                                    "Записаться"
                                }
                            }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

// Blocking notification; window is absent during server rendering, but this
// only runs from client event handlers.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
