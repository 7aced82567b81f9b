// Colored terminal output for spam score reports.
//
// This module handles all terminal-specific formatting: colors, the ranked
// table, the most/least spammy summary. The main.rs command handlers
// delegate here.

use colored::Colorize;

use crate::scoring::{least_spammy, most_spammy, ScoredMessage};

/// Display the scored batch as a ranked report.
///
/// Messages are listed from highest to lowest score; entries at or above
/// `spam_threshold` are flagged. The summary names the most and least
/// spammy message, ties going to the earliest batch position.
pub fn display_score_report(scores: &[ScoredMessage], spam_threshold: f64) {
    if scores.is_empty() {
        println!("No messages to score.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Spam Report ({} messages) ===", scores.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:>6}  {}",
        "Pos".dimmed(),
        "Score".dimmed(),
        "Message".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    // Rank by score descending; equal scores keep batch order
    let mut ranked: Vec<&ScoredMessage> = scores.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for scored in &ranked {
        let score_str = format!("{:.3}", scored.score);
        let colored_score = if scored.score >= spam_threshold {
            score_str.red().bold()
        } else if scored.score >= spam_threshold / 2.0 {
            score_str.yellow()
        } else {
            score_str.green()
        };

        println!(
            "  {:>4}  {:>6}  {}",
            scored.index,
            colored_score,
            truncate(&scored.text, 60),
        );
    }

    println!();

    let flagged = scores.iter().filter(|s| s.score >= spam_threshold).count();
    if flagged > 0 {
        println!(
            "  {} {} message(s) at or above the {spam_threshold:.2} spam threshold",
            "!".red().bold(),
            flagged
        );
        println!();
    }

    if let Some(top) = most_spammy(scores) {
        println!(
            "  Most spammy:  {} ({:.3})",
            format!("\"{}\"", top.text).red(),
            top.score
        );
    }
    if let Some(bottom) = least_spammy(scores) {
        println!(
            "  Least spammy: {} ({:.3})",
            format!("\"{}\"", bottom.text).green(),
            bottom.score
        );
    }
    println!();
}

/// Clip a message for single-line table display.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{clipped}…")
}
