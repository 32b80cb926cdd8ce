//! End-to-end quality checks over synthetic article texts.

use artgen_core::types::QualityThresholds;
use artgen_core::QualityChecker;

/// Six-letter, three-syllable Russian nouns; cycling through the pool keeps
/// every density well under the overuse threshold.
static POOL: [&str; 24] = [
    "машина", "дорога", "корова", "погода", "минута", "работа", "газета", "монета", "ракета",
    "берёза", "долина", "камера", "лагуна", "бумага", "ворота", "гитара", "канава", "лопата",
    "палата", "кабина", "малина", "рябина", "солома", "резина",
];

/// Builds a well-formed article: six paragraphs, four markdown headings,
/// twelve-word sentences, roughly six hundred words.
fn passing_article() -> String {
    let mut pool = POOL.iter().cycle();
    let mut next_word = || *pool.next().unwrap();

    let mut paragraphs = Vec::new();
    for section in 0..6 {
        let mut block = String::new();
        if section < 4 {
            block.push_str(&format!("## {} {}\n", next_word(), next_word()));
        }
        let sentences: Vec<String> = (0..8)
            .map(|_| {
                let words: Vec<&str> = (0..12).map(|_| next_word()).collect();
                format!("{}.", words.join(" "))
            })
            .collect();
        block.push_str(&sentences.join(" "));
        paragraphs.push(block);
    }
    paragraphs.join("\n\n")
}

#[test]
fn well_formed_article_passes_default_thresholds() {
    let checker = QualityChecker::new(QualityThresholds::default());
    let article = passing_article();
    let (passed, report) = checker.check(&article, "ru");

    assert!(passed, "expected pass, errors: {:?}", report.errors);
    assert!(report.errors.is_empty());
    assert!(report.word_count >= 500);
    assert_eq!(report.paragraph_count, 6);
    assert_eq!(report.heading_count, 4);
    assert!(report.readability_score >= 5.0);
    assert!(report.overused_words.is_empty());
}

#[test]
fn short_headingless_text_reports_length_before_headings() {
    let checker = QualityChecker::new(QualityThresholds::default());
    let mut pool = POOL.iter().cycle();
    let sentences: Vec<String> = (0..5)
        .map(|_| {
            let words: Vec<&str> = (0..10).map(|_| *pool.next().unwrap()).collect();
            format!("{}.", words.join(" "))
        })
        .collect();
    let text = sentences.join(" ");

    let (passed, report) = checker.check(&text, "ru");
    assert!(!passed);

    let length_position = report
        .errors
        .iter()
        .position(|e| e.contains("word count"))
        .expect("length violation missing");
    let heading_position = report
        .errors
        .iter()
        .position(|e| e.contains("headings"))
        .expect("heading violation missing");
    assert!(length_position < heading_position);
}

#[test]
fn check_is_idempotent() {
    let checker = QualityChecker::new(QualityThresholds::default());
    let article = passing_article();
    let (first_passed, first) = checker.check(&article, "ru");
    let (second_passed, second) = checker.check(&article, "ru");
    assert_eq!(first_passed, second_passed);
    assert_eq!(first, second);
}

#[test]
fn keywords_are_bounded_and_sorted() {
    let checker = QualityChecker::new(QualityThresholds::default());
    let (_, report) = checker.check(&passing_article(), "ru");

    assert!(report.keywords.len() <= 20);
    for pair in report.keywords.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[test]
fn repeated_word_is_flagged_as_overused() {
    let checker = QualityChecker::new(QualityThresholds::default());
    // "машина" takes 2 of 20 filtered tokens: 10% of the text.
    let text = "машина дорога корова погода минута работа газета монета \
                ракета долина камера лагуна бумага ворота гитара канава \
                лопата палата кабина машина";
    let (_, report) = checker.check(text, "ru");
    assert_eq!(report.overused_words, ["машина"]);
    assert!(report.errors.iter().any(|e| e.contains("машина")));
}

#[test]
fn verdict_is_locale_fallback_stable() {
    let checker = QualityChecker::new(QualityThresholds::default());
    let article = passing_article();
    let (_, with_unknown) = checker.check(&article, "de");
    let (_, with_primary) = checker.check(&article, "ru");
    assert_eq!(with_unknown, with_primary);
}
