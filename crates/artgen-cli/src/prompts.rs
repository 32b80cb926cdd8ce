//! Prompt assembly for article generation.

const UA_SYSTEM_PROMPT: &str = "\
Ти експерт зі страйкболу з 15-річним досвідом. Пишеш високоякісні статті українською мовою.

ОБОВ'ЯЗКОВІ ПРАВИЛА:
1. Пиши ТІЛЬКИ про страйкбол (airsoft), НІ В ЯКОМУ РАЗІ не про пейнтбол
2. Використовуй правильну українську термінологію:
   - Привод = airsoft gun/replica (автомат, пістолет, кулемет)
   - Захист = protection/armor (броня, жилет, маска)
   - Розвантаження = chest rig/battle belt (система носіння спорядження)
   - Тактичний жилет = plate carrier/tactical vest
   - Hop-up = система підкручування кульки
   - Кулечки 6мм = 6mm BBs (боєприпаси)
   - Магазин = magazine (не обойма!)
   - Цівка = handguard/rail system

3. Технічні характеристики:
   - Кулечки: 6мм (0.20г-0.43г)
   - Швидкість: до 1.5 Дж для CQB, до 2.5 Дж для відкритих ігор
   - Акумулятори: LiPo 7.4V, 11.1V, LiFe 9.9V
   - Популярні платформи: М4, АК, G36, MP5, P90

4. Структура статті:
   - Заголовок (привабливий, без слова \"стаття\")
   - Вступ (2-3 речення, чіткий хук)
   - 4-6 розділів з підзаголовками
   - Практичні поради з нумерованими списками
   - Висновок з основними тезами
   - Обсяг: 900-1200 слів";

const RU_SYSTEM_PROMPT: &str = "\
Ты эксперт по страйкболу с 15-летним опытом. Пишешь качественные статьи на русском языке.

ОБЯЗАТЕЛЬНЫЕ ПРАВИЛА:
1. Пиши ТОЛЬКО о страйкболе (airsoft), НИ В КОЕМ СЛУЧАЕ не о пейнтболе
2. Используй правильную русскую терминологию:
   - Привод = airsoft gun/replica (автомат, пистолет, пулемет)
   - Защита = protection/armor (броня, жилет, маска)
   - Разгрузка = chest rig/battle belt (система ношения снаряжения)
   - Тактический жилет = plate carrier/tactical vest
   - Hop-up = система подкрутки шарика
   - Шарики 6мм = 6mm BBs (боеприпасы)
   - Магазин = magazine (не обойма!)
   - Цевье = handguard/rail system

3. Технические характеристики:
   - Шарики: 6мм (0.20г-0.43г)
   - Скорость: до 1.5 Дж для CQB, до 3 Дж для открытых игр
   - Аккумуляторы: LiPo 7.4V, 11.1V, LiFe 9.9V
   - Популярные платформы: М4, АК, G36, MP5, P90

4. Структура статьи:
   - Заголовок (привлекательный, без слова \"статья\")
   - Вступление (2-3 предложения, четкий хук)
   - 4-6 разделов с подзаголовками
   - Практические советы с нумерованными списками
   - Заключение с основными тезисами
   - Объем: 900-1200 слов";

const CATEGORY_FOCUS: &[(&str, &str)] = &[
    (
        "обладнання",
        "\n\nФОКУС НА ОБЛАДНАННІ:\n- Детальні характеристики типів спорядження\n- Критерії вибору для різних умов гри\n- Поради з підгонки та налаштування\n- Співвідношення ціна/якість без згадки брендів",
    ),
    (
        "снаряжение",
        "\n\nФОКУС НА СНАРЯЖЕНИИ:\n- Детальные характеристики типов снаряжения\n- Критерии выбора для разных условий игры\n- Советы по подгонке и настройке\n- Соотношение цена/качество без упоминания брендов",
    ),
    (
        "технічне",
        "\n\nТЕХНІЧНИЙ ФОКУС:\n- Покрокові інструкції налаштування\n- Діагностика проблем та їх вирішення\n- Безпека при роботі з технікою\n- Інструменти та матеріали для робіт",
    ),
    (
        "техническое",
        "\n\nТЕХНИЧЕСКИЙ ФОКУС:\n- Пошаговые инструкции настройки\n- Диагностика проблем и их решение\n- Безопасность при работе с техникой\n- Инструменты и материалы для работ",
    ),
    (
        "тактика",
        "\n\nТАКТИЧНИЙ ФОКУС:\n- Практичні сценарії та ситуації\n- Командна взаємодія\n- Адаптація до різних типів місцевості\n- Психологічні аспекти гри",
    ),
];

/// System prompt for one language, optionally sharpened towards a category.
pub fn build_system_prompt(language: &str, category: Option<&str>) -> String {
    let base = match language {
        "ua" | "uk" => UA_SYSTEM_PROMPT,
        _ => RU_SYSTEM_PROMPT,
    };
    let mut prompt = base.to_string();
    if let Some(category) = category {
        if let Some((_, focus)) = CATEGORY_FOCUS.iter().find(|(name, _)| *name == category) {
            prompt.push_str(focus);
        }
    }
    prompt
}

/// User prompt carrying the topic and the content checklist.
pub fn build_user_prompt(topic: &str, language: &str) -> String {
    match language {
        "ua" | "uk" => format!(
            "Напиши детальну та захоплюючу статтю на тему: \"{topic}\"

Обов'язково включи:
- Цікавий вступ, який зацікавить читача
- Детальні технічні аспекти з конкретними параметрами
- Практичні поради у вигляді нумерованих списків
- Реальні приклади ситуацій та рішень
- Поради для початківців та досвідчених гравців
- Аспекти безпеки та правильного використання
- Висновок з ключовими тезами

Пиши професійно, але доступно. Використовуй підзаголовки для структурування."
        ),
        _ => format!(
            "Напиши подробную и увлекательную статью на тему: \"{topic}\"

Обязательно включи:
- Интересное вступление, которое заинтересует читателя
- Подробные технические аспекты с конкретными параметрами
- Практические советы в виде нумерованных списков
- Реальные примеры ситуаций и решений
- Советы для новичков и опытных игроков
- Аспекты безопасности и правильного использования
- Заключение с ключевыми тезисами

Пиши профессионально, но доступно. Используй подзаголовки для структурирования."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_focus_is_appended() {
        let plain = build_system_prompt("ua", None);
        let focused = build_system_prompt("ua", Some("тактика"));
        assert!(focused.len() > plain.len());
        assert!(focused.starts_with(&plain));
        assert!(focused.contains("ТАКТИЧНИЙ ФОКУС"));
    }

    #[test]
    fn unknown_category_leaves_prompt_unchanged() {
        let plain = build_system_prompt("ru", None);
        let focused = build_system_prompt("ru", Some("несуществующая"));
        assert_eq!(plain, focused);
    }

    #[test]
    fn user_prompt_carries_the_topic() {
        let prompt = build_user_prompt("Выбор оптического прицела", "ru");
        assert!(prompt.contains("Выбор оптического прицела"));
    }

    #[test]
    fn unknown_language_defaults_to_russian() {
        assert_eq!(
            build_system_prompt("xx", None),
            build_system_prompt("ru", None)
        );
    }
}
