//! Terminal presentation of quality reports.

use colored::*;

use artgen_core::types::AnalysisReport;

/// Keywords shown on the terminal.
const DISPLAY_KEYWORDS: usize = 5;

pub fn print_report(report: &AnalysisReport) {
    let verdict = if report.passed {
        "passed".green().bold()
    } else {
        "failed".red().bold()
    };
    println!("Quality check {verdict}");
    println!(
        "  words: {}  sentences: {}  paragraphs: {}",
        report.word_count, report.sentence_count, report.paragraph_count
    );
    println!(
        "  headings: {}  list items: {}  bold spans: {}",
        report.heading_count, report.list_item_count, report.bold_count
    );
    println!("  readability: {:.2}/10", report.readability_score);

    if !report.keywords.is_empty() {
        println!("  top keywords:");
        for keyword in report.keywords.iter().take(DISPLAY_KEYWORDS) {
            println!(
                "    {} ({} uses, {:.1}%)",
                keyword.word,
                keyword.count,
                keyword.density * 100.0
            );
        }
    }

    if !report.overused_words.is_empty() {
        println!(
            "  {} {}",
            "overused:".yellow(),
            report.overused_words.join(", ")
        );
    }

    for error in &report.errors {
        println!("  {} {}", "•".red(), error);
    }
}
