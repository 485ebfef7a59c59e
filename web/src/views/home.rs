use leptos::prelude::*;
use thaw::*;

use crate::booking::BookingForm;
use crate::catalog;
use crate::components::BookingModal;

struct Testimonial {
    name: &'static str,
    text: &'static str,
    rating: usize,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Елена М.",
        text: "Матрица судьбы открыла мне глаза на мое истинное предназначение. Теперь я живу в гармонии с собой.",
        rating: 5,
    },
    Testimonial {
        name: "Дмитрий К.",
        text: "Консультация помогла понять корни многих проблем. Рекомендации работают, жизнь меняется к лучшему.",
        rating: 5,
    },
    Testimonial {
        name: "Анна С.",
        text: "Анализ совместимости с мужем дал понимание наших отношений. Стали ближе друг к другу.",
        rating: 5,
    },
];

/// The whole site is one page; the booking dialog state lives here and is
/// shared by every "book" affordance.
#[component]
pub fn HomePage() -> impl IntoView {
    let form = RwSignal::new(BookingForm::new());

    view! {
        <div class="site">
            <SiteHeader form=form/>
            <HeroSection form=form/>
            <AboutSection/>
            <ServicesSection form=form/>
            <SpecialistSection/>
            <TestimonialsSection/>
            <ContactSection/>
            <SiteFooter/>
            <BookingModal form=form/>
        </div>
    }
}

#[component]
fn SiteHeader(form: RwSignal<BookingForm>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-mark">"✦"</span>
                    <span class="brand-name">"Матрица Судьбы"</span>
                </div>
                <nav class="site-nav">
                    <a href="#about">"О матрице"</a>
                    <a href="#services">"Услуги"</a>
                    <a href="#specialist">"Специалист"</a>
                    <a href="#testimonials">"Отзывы"</a>
                    <a href="#contact">"Контакты"</a>
                </nav>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form.update(|f| f.open())
                >
                    "Записаться"
                </Button>
            </div>
        </header>
    }
}

#[component]
fn HeroSection(form: RwSignal<BookingForm>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>
                "Откройте свою " <span class="accent">"Матрицу Судьбы"</span>
            </h1>
            <p class="hero-subtitle">
                "Древняя мудрость нумерологии поможет раскрыть ваше истинное предназначение, кармические задачи и путь к гармонии"
            </p>
            <div class="hero-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Large
                    on_click=move |_| form.update(|f| f.open())
                >
                    "Получить консультацию"
                </Button>
                <a class="hero-secondary" href="#about">"Узнать подробнее"</a>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2>"Что такое Матрица Судьбы?"</h2>
            <p class="section-subtitle">
                "Это мощный инструмент самопознания, основанный на древних знаниях арканов Таро и нумерологических расчетов по дате рождения"
            </p>
            <div class="card-grid">
                <div class="info-card">
                    <h3>"Личность"</h3>
                    <p>"Раскройте свои скрытые таланты, сильные стороны и области для развития"</p>
                </div>
                <div class="info-card">
                    <h3>"Отношения"</h3>
                    <p>"Поймите динамику ваших отношений и найдите гармонию с близкими"</p>
                </div>
                <div class="info-card">
                    <h3>"Предназначение"</h3>
                    <p>"Откройте свою жизненную миссию и найдите путь к истинному счастью"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection(form: RwSignal<BookingForm>) -> impl IntoView {
    view! {
        <section id="services" class="services">
            <h2>"Наши Услуги"</h2>
            <p class="section-subtitle">
                "Выберите подходящий формат работы с вашей матрицей судьбы"
            </p>
            <div class="card-grid">
                {catalog::SERVICES
                    .iter()
                    .map(|service| {
                        let id = service.id;
                        view! {
                            <div class="service-card">
                                <div class="service-card-header">
                                    <h3>{service.title}</h3>
                                    <span class="service-price">{service.price}</span>
                                </div>
                                <p class="service-description">{service.description}</p>
                                <p class="service-duration">{service.duration}</p>
                                <ul class="service-features">
                                    {service
                                        .features
                                        .iter()
                                        .map(|&feature| view! { <li>{feature}</li> })
                                        .collect_view()}
                                </ul>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    class="service-choose"
                                    on_click=move |_| {
                                        form.update(|f| f.open_with_service(id))
                                    }
                                >
                                    "Выбрать услугу"
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SpecialistSection() -> impl IntoView {
    view! {
        <section id="specialist" class="specialist">
            <h2>"Анна Светлова"</h2>
            <p class="specialist-lead">
                "Сертифицированный специалист по матрице судьбы с 8-летним опытом работы."
            </p>
            <ul class="specialist-facts">
                <li>"Более 2000 проведенных консультаций"</li>
                <li>"Обучение в Международной Академии Нумерологии"</li>
                <li>"Индивидуальный подход к каждому клиенту"</li>
            </ul>
            <p class="specialist-quote">
                "«Моя миссия — помочь людям найти свой истинный путь и жить в гармонии со своей природой»"
            </p>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <h2>"Отзывы клиентов"</h2>
            <p class="section-subtitle">
                "Что говорят люди, познавшие свою матрицу судьбы"
            </p>
            <div class="card-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <div class="testimonial-card">
                                <div class="stars">{"★".repeat(testimonial.rating)}</div>
                                <p class="testimonial-text">{format!("«{}»", testimonial.text)}</p>
                                <div class="testimonial-name">{format!("— {}", testimonial.name)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2>"Контакты"</h2>
            <p class="section-subtitle">"Свяжитесь со мной для записи на консультацию"</p>
            <div class="contact-grid">
                <div class="contact-details">
                    <div class="contact-item">
                        <div class="contact-label">"Телефон"</div>
                        <div class="contact-value">"+7 (999) 123-45-67"</div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-label">"Email"</div>
                        <div class="contact-value">"info@matrix-destiny.ru"</div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-label">"Telegram"</div>
                        <div class="contact-value">"@matrix_destiny"</div>
                    </div>
                </div>
                // Decorative quick-contact card; no submission is wired up.
                <div class="quick-contact">
                    <h3>"Быстрая связь"</h3>
                    <input class="form-input" placeholder="Ваше имя"/>
                    <input class="form-input" type="email" placeholder="Email"/>
                    <input class="form-input" placeholder="Телефон"/>
                    <textarea class="form-textarea" placeholder="Сообщение или вопрос"></textarea>
                    <Button appearance=ButtonAppearance::Primary class="quick-contact-send">
                        "Отправить сообщение"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="brand">
                <span class="brand-mark">"✦"</span>
                <span class="brand-name">"Матрица Судьбы"</span>
            </div>
            <p>"© 2024 Матрица Судьбы. Откройте путь к гармонии и самопознанию."</p>
        </footer>
    }
}
