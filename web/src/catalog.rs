/// A bookable offering. The catalog is fixed at compile time; nothing is
/// created or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "matrix-basic",
        title: "Базовая матрица судьбы",
        description: "Полный расчет вашей матрицы судьбы с расшифровкой основных энергий",
        duration: "60 минут",
        price: "5 000 ₽",
        features: &[
            "Расчет личных энергий",
            "Кармические задачи",
            "Талант и предназначение",
            "Письменная расшифровка",
        ],
    },
    Service {
        id: "consultation",
        title: "Личная консультация",
        description: "Индивидуальная работа с разбором вашей матрицы и ответами на вопросы",
        duration: "90 минут",
        price: "8 000 ₽",
        features: &[
            "Детальный разбор матрицы",
            "Ответы на личные вопросы",
            "Рекомендации по развитию",
            "Аудиозапись консультации",
        ],
    },
    Service {
        id: "compatibility",
        title: "Матрица совместимости",
        description: "Анализ совместимости партнеров через матрицу судьбы",
        duration: "75 минут",
        price: "7 000 ₽",
        features: &[
            "Анализ двух матриц",
            "Совместимость по энергиям",
            "Рекомендации для отношений",
            "Совместные кармические задачи",
        ],
    },
];

/// Display title for a service id, if the id is in the catalog.
pub fn title_for(id: &str) -> Option<&'static str> {
    SERVICES
        .iter()
        .find(|service| service.id == id)
        .map(|service| service.title)
}
