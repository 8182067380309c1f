//! HTML page generator.
//!
//! Every page is self-contained, with CSS inlined. All record text goes
//! through [`html_escape`] before insertion.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

use termbook_core::model::{
    NumberedTerm, NumberedText, Question, QuizOutcome, StatsSnapshot, SubmissionOutcome,
};

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const NAV: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("terms.html", "Terms"),
    ("texts.html", "Texts"),
    ("quiz.html", "Quiz"),
    ("add-term.html", "Add a term"),
    ("stats.html", "Statistics"),
];

fn layout(title: &str, body: &str, generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>termbook — {}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<nav>\n");
    for (href, label) in NAV {
        html.push_str(&format!("<a href=\"{href}\">{label}</a>\n"));
    }
    html.push_str("</nav>\n");

    html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
    html.push_str(body);

    html.push_str(&format!(
        "<footer class=\"meta\">Generated {}</footer>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Landing page.
pub fn render_index() -> String {
    let mut body = String::from("<section>\n<p>A glossary of terms, a reading list of texts, and a short quiz.</p>\n<ul>\n");
    for (href, label) in NAV.iter().skip(1) {
        body.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
    }
    body.push_str("</ul>\n</section>\n");
    layout("termbook", &body, Utc::now())
}

/// Table of glossary terms.
pub fn render_terms(terms: &[NumberedTerm]) -> String {
    let mut body = String::from("<table>\n");
    body.push_str("<thead><tr><th>#</th><th>Term</th><th>Definition</th></tr></thead>\n<tbody>\n");
    for t in terms {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            t.index,
            html_escape(&t.term),
            html_escape(&t.definition)
        ));
    }
    body.push_str("</tbody></table>\n");
    layout("Terms", &body, Utc::now())
}

/// Table of texts with translations.
pub fn render_texts(texts: &[NumberedText]) -> String {
    let mut body = String::from("<table>\n");
    body.push_str(
        "<thead><tr><th>#</th><th>Text</th><th>Translation</th></tr></thead>\n<tbody>\n",
    );
    for t in texts {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            t.index,
            html_escape(&t.text),
            html_escape(&t.translation)
        ));
    }
    body.push_str("</tbody></table>\n");
    layout("Texts", &body, Utc::now())
}

/// Statistics page, or a notice when there are no terms yet.
pub fn render_stats(stats: Option<&StatsSnapshot>) -> String {
    let Some(stats) = stats else {
        return layout(
            "Statistics",
            "<p class=\"notice\">No terms yet.</p>\n",
            Utc::now(),
        );
    };

    let mut body = String::from("<table class=\"summary\">\n<tbody>\n");
    let rows = [
        ("Terms in total", stats.terms_all.to_string()),
        ("Pre-seeded terms", stats.terms_own.to_string()),
        ("Added by readers", stats.terms_added.to_string()),
        ("Unclassified", stats.terms_other.to_string()),
        ("Average words per definition", format!("{:.2}", stats.words_avg)),
        ("Longest definition (words)", stats.words_max.to_string()),
        ("Shortest definition (words)", stats.words_min.to_string()),
    ];
    for (label, value) in rows {
        body.push_str(&format!("<tr><th>{label}</th><td>{value}</td></tr>\n"));
    }
    body.push_str("</tbody></table>\n");
    body.push_str(&generate_bar_chart(&[
        ("Pre-seeded", stats.terms_own),
        ("Added by readers", stats.terms_added),
    ]));
    layout("Statistics", &body, Utc::now())
}

/// Quiz questions with the command that grades them.
///
/// The site is static, so answers are submitted through `termbook quiz`.
pub fn render_quiz_questions(questions: &[Question]) -> String {
    let mut body = String::from("<table>\n");
    body.push_str("<thead><tr><th>#</th><th>Text</th></tr></thead>\n<tbody>\n");
    for q in questions {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            q.index,
            html_escape(&q.prompt)
        ));
    }
    body.push_str("</tbody></table>\n");

    let example = questions
        .iter()
        .take(2)
        .map(|q| format!("-a {}=ANSWER", q.index))
        .collect::<Vec<_>>()
        .join(" ");
    body.push_str(&format!(
        "<p>Grade your answers with:</p>\n<pre>termbook quiz {}</pre>\n",
        html_escape(&example)
    ));
    layout("Quiz", &body, Utc::now())
}

/// Graded quiz with per-question verdicts and the score.
pub fn render_quiz_result(outcome: &QuizOutcome) -> String {
    let mut body = format!(
        "<p class=\"score\">Score: <strong>{:.1}%</strong> ({}/{})</p>\n",
        outcome.score,
        outcome.correct_count(),
        outcome.answers.len()
    );
    body.push_str("<table>\n");
    body.push_str("<thead><tr><th>#</th><th>Text</th><th>Your answer</th><th>Expected</th></tr></thead>\n<tbody>\n");
    for a in &outcome.answers {
        let class = if a.correct { "pass" } else { "fail" };
        body.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            a.index,
            html_escape(&a.prompt),
            html_escape(&a.submitted),
            html_escape(&a.expected)
        ));
    }
    body.push_str("</tbody></table>\n");
    layout("Quiz results", &body, Utc::now())
}

/// How to contribute a new term.
pub fn render_add_term_help() -> String {
    let body = "<p>New terms are added from the command line:</p>\n\
<pre>termbook add-term --term TERM --definition DEFINITION [--name NAME] --site DIR</pre>\n\
<p>Passing <code>--site</code> clears this site so the next render picks up the new term.</p>\n";
    layout("Add a term", body, Utc::now())
}

/// Result of a term submission.
pub fn render_submission(outcome: &SubmissionOutcome) -> String {
    let (name, class) = match outcome {
        SubmissionOutcome::Added { name, .. } => (name, "pass"),
        SubmissionOutcome::Rejected { name, .. } => (name, "fail"),
    };
    let mut body = String::new();
    if let Some(name) = name {
        body.push_str(&format!("<p>Thank you, {}.</p>\n", html_escape(name)));
    }
    body.push_str(&format!(
        "<p class=\"{class}\">{}</p>\n",
        html_escape(outcome.comment())
    ));
    if let SubmissionOutcome::Added { record, .. } = outcome {
        body.push_str(&format!(
            "<dl><dt>{}</dt><dd>{}</dd></dl>\n",
            html_escape(&record.term),
            html_escape(&record.definition)
        ));
    }
    body.push_str("<p><a href=\"add-term.html\">Add another term</a></p>\n");
    layout("Add a term", &body, Utc::now())
}

/// Write a rendered page to a file, creating parent directories.
pub fn write_page(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(bars: &[(&str, usize)]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let max_value = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let total_height = bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, value)) in bars.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = value * max_width / max_value;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#3b82f6\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            value
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
nav a { margin-right: 1rem; }
h1 { margin-top: 1.5rem; }
.meta { color: #6b7280; margin-top: 2rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { padding: 0.5rem 1rem; border: 1px solid var(--border); }
svg { margin: 1rem 0; }
"#;
