//! Static topic catalog, grouped by language and category.

use rand::seq::IndexedRandom;

/// One category with its topic titles.
pub struct CategoryTopics {
    pub category: &'static str,
    pub topics: &'static [&'static str],
}

const UA_CATALOG: &[CategoryTopics] = &[
    CategoryTopics {
        category: "обладнання",
        topics: &[
            "Вибір тактичного жилета для страйкболу",
            "Захисне спорядження для новачків",
            "Модернізація газових приводів",
            "Вибір оптичного прицілу",
            "Догляд за акумуляторами LiPo",
            "Системи розвантаження та носіння спорядження",
            "Вибір правильного шолома та захисту голови",
        ],
    },
    CategoryTopics {
        category: "технічне",
        topics: &[
            "Налаштування hop-up в електроприводах",
            "Тюнінг внутрішніх деталей приводу",
            "Діагностика несправностей приводів",
            "Модернізація ствола та резинки hop-up",
            "Налаштування регулятора тиску в HPA системах",
        ],
    },
    CategoryTopics {
        category: "тактика",
        topics: &[
            "Тактика ведення бою в CQB",
            "Камуфляж для лісових ігор",
            "Снайперська стрільба в страйкболі",
            "Командна робота та зв'язок",
            "Позиціонування та переміщення в команді",
            "Планування та виконання тактичних операцій",
        ],
    },
];

const RU_CATALOG: &[CategoryTopics] = &[
    CategoryTopics {
        category: "снаряжение",
        topics: &[
            "Выбор тактического жилета для страйкбола",
            "Защитное снаряжение для новичков",
            "Модернизация газовых приводов",
            "Выбор оптического прицела",
            "Уход за аккумуляторами LiPo",
            "Системы разгрузки и ношения снаряжения",
            "Выбор правильного шлема и защиты головы",
        ],
    },
    CategoryTopics {
        category: "техническое",
        topics: &[
            "Настройка hop-up в электроприводах",
            "Тюнинг внутренних деталей привода",
            "Диагностика неисправностей приводов",
            "Модернизация ствола и резинки hop-up",
            "Настройка регулятора давления в HPA системах",
        ],
    },
    CategoryTopics {
        category: "тактика",
        topics: &[
            "Тактика ведения боя в CQB",
            "Камуфляж для лесных игр",
            "Снайперская стрельба в страйкболе",
            "Командная работа и связь",
            "Позиционирование и перемещение в команде",
            "Планирование и выполнение тактических операций",
        ],
    },
];

const CATEGORY_TRANSLATIONS: &[(&str, &str)] = &[
    ("обладнання", "снаряжение"),
    ("технічне", "техническое"),
    ("тактика", "тактика"),
];

/// The catalog for one language code; Ukrainian for `ua`/`uk`, Russian
/// otherwise.
pub fn categories(language: &str) -> &'static [CategoryTopics] {
    match language {
        "ua" | "uk" => UA_CATALOG,
        _ => RU_CATALOG,
    }
}

/// Pick a random (topic, category) pair for one language.
pub fn pick_random(language: &str) -> Option<(&'static str, &'static str)> {
    let mut rng = rand::rng();
    let group = categories(language).choose(&mut rng)?;
    let topic = group.topics.choose(&mut rng)?;
    Some((topic, group.category))
}

/// The Russian counterpart of a Ukrainian topic. Both catalogs list topics
/// in the same order, so the translation is positional.
pub fn translate_topic(ua_topic: &str) -> Option<&'static str> {
    for (ua_group, ru_group) in UA_CATALOG.iter().zip(RU_CATALOG) {
        if let Some(index) = ua_group.topics.iter().position(|t| *t == ua_topic) {
            return ru_group.topics.get(index).copied();
        }
    }
    None
}

/// Unknown categories pass through unchanged, as the original did.
pub fn translate_category<'a>(ua_category: &'a str) -> &'a str {
    CATEGORY_TRANSLATIONS
        .iter()
        .find(|(ua, _)| *ua == ua_category)
        .map(|(_, ru)| *ru)
        .unwrap_or(ua_category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ukrainian_topic_has_a_russian_counterpart() {
        for group in UA_CATALOG {
            for topic in group.topics {
                assert!(
                    translate_topic(topic).is_some(),
                    "no translation for {topic}"
                );
            }
        }
    }

    #[test]
    fn catalogs_are_structurally_parallel() {
        assert_eq!(UA_CATALOG.len(), RU_CATALOG.len());
        for (ua, ru) in UA_CATALOG.iter().zip(RU_CATALOG) {
            assert_eq!(ua.topics.len(), ru.topics.len());
        }
    }

    #[test]
    fn random_pick_stays_inside_the_catalog() {
        let (topic, category) = pick_random("ru").unwrap();
        let group = categories("ru")
            .iter()
            .find(|g| g.category == category)
            .unwrap();
        assert!(group.topics.contains(&topic));
    }

    #[test]
    fn category_translation_covers_the_catalog() {
        assert_eq!(translate_category("обладнання"), "снаряжение");
        assert_eq!(translate_category("тактика"), "тактика");
    }
}
