//! HTML rendering of analysis reports.
//!
//! Rendering sits outside the decision logic: it only reads public report
//! fields, and nothing in the pipeline depends on its output.

use crate::types::AnalysisReport;

/// Keywords shown in the rendered report; the report itself may carry more.
const DISPLAY_KEYWORDS: usize = 10;

/// Render one report as an HTML fragment, matching the shape the web layer
/// embeds directly.
pub fn render_html(report: &AnalysisReport) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("<div class='quality-report'>".to_string());

    let verdict = if report.passed { "passed" } else { "failed" };
    out.push(format!("<p class='verdict'>Check {verdict}</p>"));

    out.push("<h3>Readability</h3>".to_string());
    out.push(format!(
        "<p>Score: {:.2}/10 ({} words, {} sentences, {} paragraphs)</p>",
        report.readability_score, report.word_count, report.sentence_count, report.paragraph_count
    ));

    out.push("<h3>Keywords</h3>".to_string());
    if report.keywords.is_empty() {
        out.push("<p>No keywords found</p>".to_string());
    } else {
        out.push("<ul>".to_string());
        for keyword in report.keywords.iter().take(DISPLAY_KEYWORDS) {
            out.push(format!(
                "<li>{}: {:.2}%</li>",
                keyword.word,
                keyword.density * 100.0
            ));
        }
        out.push("</ul>".to_string());
    }

    if !report.overused_words.is_empty() {
        out.push("<h3>Overused words</h3>".to_string());
        out.push("<ul>".to_string());
        for word in &report.overused_words {
            out.push(format!("<li>{word}</li>"));
        }
        out.push("</ul>".to_string());
    }

    if !report.errors.is_empty() {
        out.push("<h3>Violations</h3>".to_string());
        out.push("<ul>".to_string());
        for error in &report.errors {
            out.push(format!("<li>{error}</li>"));
        }
        out.push("</ul>".to_string());
    }

    out.push("</div>".to_string());
    out.join("\n")
}
