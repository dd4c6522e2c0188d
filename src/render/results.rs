// file: src/render/results.rs
// description: formats search hits as terminal result cards

use crate::config::DisplayConfig;
use crate::models::DocumentHit;
use crate::utils::Validator;
use colored::Colorize;
use std::fmt::Write;

pub const NO_RESULTS: &str = "No results found.";
pub const NO_INFORMATION: &str = "No information available regarding the query.";

const RULE_WIDTH: usize = 80;

pub struct ResultRenderer {
    max_summary_chars: usize,
    show_scores: bool,
}

impl ResultRenderer {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            max_summary_chars: config.max_summary_chars,
            show_scores: config.show_scores,
        }
    }

    /// Render the result section for a present document list. One card per
    /// hit; an empty list renders the no-results line.
    pub fn format_documents(&self, query: &str, documents: &[DocumentHit]) -> String {
        if documents.is_empty() {
            return format!("\n{}\n", NO_RESULTS);
        }

        let mut out = String::new();
        let _ = writeln!(out, "\nSearch Results for: \"{}\"", query);
        let _ = writeln!(out, "Found {} result(s)\n", documents.len());
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

        for (idx, document) in documents.iter().enumerate() {
            out.push('\n');
            out.push_str(&self.format_card(idx + 1, document));
        }

        let _ = write!(out, "\n{}", "=".repeat(RULE_WIDTH));
        out
    }

    fn format_card(&self, position: usize, document: &DocumentHit) -> String {
        let mut card = String::new();

        let title = format!("{}. {}", position, document.file_name);
        let _ = writeln!(card, "{}", title.bold());

        if self.show_scores {
            let _ = writeln!(card, "   Score: {:.4}", document.score);
        }

        let summary = Validator::truncate_text(&document.summary, self.max_summary_chars);
        for line in summary.lines() {
            let _ = writeln!(card, "   {}", line);
        }

        let _ = writeln!(card, "   {} {}", "Download:".cyan(), document.file_download_url);
        card
    }
}
