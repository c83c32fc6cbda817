//! Static copy rendered by the landing page.

#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Menu shared by the header and the footer.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: "services", label: "Услуги" },
    NavItem { anchor: "cases", label: "Кейсы" },
    NavItem { anchor: "testimonials", label: "Отзывы" },
    NavItem { anchor: "contact", label: "Контакты" },
];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    /// Price and duration lines, one per package.
    pub terms: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Рентген продаж",
        summary: "Быстрая диагностика за 3 дня: CRM, воронка, звонки → 3–5 точек роста.",
        highlights: &[
            "Анализ CRM и этапов воронки",
            "Прослушка звонков и переписок",
            "Выводы и план действий",
        ],
        terms: &["Срок: 3 дня · Цена: 35 000 ₽"],
    },
    Service {
        title: "Разбор по косточкам",
        summary: "Глубокий аудит по 8 блокам: воронка, CRM, скрипты, найм, отчёты и др.",
        highlights: &[
            "Подключение к CRM, интервью",
            "2 недели анализа, финальный Zoom",
            "Документ с проблемами и решениями",
        ],
        terms: &["Срок: 2 недели · Цена: 100 000 ₽"],
    },
    Service {
        title: "РОП на подряде",
        summary: "30 часов управления в месяц без найма в штат: контроль, отчёты, рост.",
        highlights: &[
            "Планёрки и разборы",
            "Проверка звонков и переписок",
            "Ответственность за результат",
        ],
        terms: &["Срок: 1–3 месяца · Цена: 90 000 ₽/мес"],
    },
    Service {
        title: "SiOP — Системный отдел продаж",
        summary: "Целостная система из 43 элементов: стратегия, CRM, команда, контроль.",
        highlights: &[
            "Аудит → Проектирование → Внедрение",
            "Найм, обучение и мотивация",
            "Прозрачные метрики и отчётность",
        ],
        terms: &[
            "Лайт: 600 000 ₽ · 6–8 недель",
            "Полный цикл: 1 000 000 ₽ · 10–14 недель",
            "Под ключ (VIP): 1 500 000 ₽ · 12–16 недель",
        ],
    },
    Service {
        title: "Рука на пульсе",
        summary: "Трекинг с личным участием: еженедельные созвоны, корректировки, фокус.",
        highlights: &[
            "8 часов в месяц",
            "Разбор проблем и корректировка плана",
            "Постоянный контакт в мессенджере",
        ],
        terms: &["Цена: 60 000 ₽/мес"],
    },
    Service {
        title: "Продажный Zoom",
        summary: "Индивидуальная консультация за 60 минут — 1–3 шага, которые дадут результат.",
        highlights: &[
            "Разбор текущей ситуации",
            "Точные вопросы и рекомендации",
            "Список решений «на завтра»",
        ],
        terms: &["Онлайн · Запись встречи · 10 000 ₽"],
    },
];

#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub highlights: &'static [&'static str],
    pub result: &'static str,
}

pub const CASES: &[CaseStudy] = &[
    CaseStudy {
        title: "Производство наградной продукции",
        highlights: &[
            "Внедрили CRM, регламенты, роли (хантер/фермер)",
            "KPI, мотивация, отчётность, рост команды до 4",
        ],
        result: "Результат: выручка с 2,2 → 5,6 млн ₽/мес (+154%), конверсия 3% → 7,6%.",
    },
    CaseStudy {
        title: "Продажа модульных домов",
        highlights: &[
            "Программа «Рука на пульсе», 2 месяца",
            "Контроль сделок, обучение РОПа, дисциплина",
        ],
        result: "Результат: план 27 млн ₽ → факт 47 млн ₽ за декабрь (+74%).",
    },
    CaseStudy {
        title: "BFL — банкротство физлиц",
        highlights: &[
            "С нуля: воронка 6 этапов, CRM, шаблоны, отчёты",
            "3 менеджера + РОП, обучение и контроль",
        ],
        result: "Результат: +40% к выручке, конверсия 4% → 6,7%, заполнение CRM 100%.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: Option<&'static str>,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Сегодня была на консультации у @storypavel по построению отдела продаж! Четко разложил всю информацию, закрыл все мои вопросы и подсветил, в каком направлении двигаться. Определили ветку дальнейшего взаимодействия 🚀 Паша, благодарю тебя!",
        author: "Татьяна Моргулец",
        role: Some("Клиент"),
    },
    Testimonial {
        quote: "Я в восторге, Павел профи. Консультация свелась к менеджменту. В котором в принципе я профи, но такой чистый трезвый взгляд со стороны молодого поколения очень даже нужен был. Ничего лишнего, ничего не надумано, все четко. Пришли к выводам, которые сами понимали, а это значит Павел чётко чувствует процессы. Ему ‘позвонили’ во время разговора, это хороший знак, что он в потоке.",
        author: "Юлия Мельник",
        role: Some("Клиент"),
    },
    Testimonial {
        quote: "Спасибо за консультацию нашей команды по поиску лидов и аудит нашей продающей воронки. Куча инсайдов, фишек и идей. Ушли реализовывать всё. Долго не решался связаться, но супер доволен встречей.",
        author: "Юрий Глазков",
        role: Some("Клиент"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_point_at_in_page_anchors() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, ["#services", "#cases", "#testimonials", "#contact"]);
    }

    #[test]
    fn every_service_has_pricing_terms() {
        assert_eq!(SERVICES.len(), 6);
        for service in SERVICES {
            assert!(!service.terms.is_empty(), "{} has no terms", service.title);
            assert!(!service.highlights.is_empty());
        }
    }

    #[test]
    fn three_testimonials_with_authors() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| !t.author.is_empty()));
    }
}
