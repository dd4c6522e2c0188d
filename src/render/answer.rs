// file: src/render/answer.rs
// description: formats the generated answer panel

use colored::Colorize;

pub const NO_CONTENT: &str = "No content generated.";

const RULE_WIDTH: usize = 80;

/// Render the generated-answer panel. Empty or absent content shows the
/// literal fallback line.
pub fn format_answer(answer: Option<&str>) -> String {
    let body = match answer {
        Some(text) if !text.is_empty() => text,
        _ => NO_CONTENT,
    };

    format!(
        "\n{}\n{}\n{}\n",
        "Generated Answer".bold().underline(),
        "-".repeat(RULE_WIDTH),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_rendered_verbatim() {
        colored::control::set_override(false);
        let output = format_answer(Some("Expenses are reimbursed within 30 days."));
        assert!(output.contains("Expenses are reimbursed within 30 days."));
        assert!(!output.contains(NO_CONTENT));
    }

    #[test]
    fn test_absent_answer_falls_back() {
        let output = format_answer(None);
        assert!(output.contains(NO_CONTENT));
    }

    #[test]
    fn test_empty_answer_falls_back() {
        let output = format_answer(Some(""));
        assert!(output.contains(NO_CONTENT));
    }
}
