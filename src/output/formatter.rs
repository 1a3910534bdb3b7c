use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::dataset::record::INDUSTRY;
use crate::dataset::ScoredLead;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn industry_of(lead: &ScoredLead) -> String {
    lead.record
        .value(INDUSTRY)
        .as_text()
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format leads as a ranked table with columns: Index, Score, Company, Industry, Flags
/// No headers. Index is 1-based and right-aligned with a trailing dot.
/// On a terminal the flags column is truncated to fit the width.
pub fn format_lead_table(leads: &[&ScoredLead], use_colors: bool) -> String {
    format_lead_table_with_width(leads, use_colors, get_terminal_width())
}

fn format_lead_table_with_width(
    leads: &[&ScoredLead],
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let score_width = 4;
    let separator = "  ";
    let index_width = leads.len().to_string().len().max(2) + 1;
    let company_width = leads
        .iter()
        .map(|l| l.record.label().chars().count())
        .max()
        .unwrap_or(0)
        .min(30);
    let industry_width = leads
        .iter()
        .map(|l| industry_of(l).chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>width$}", format!("{}.", idx + 1), width = index_width);
            let score_str = format!("{:>width$}", lead.score, width = score_width);
            let company = format!(
                "{:<width$}",
                truncate_text(&lead.record.label(), company_width),
                width = company_width
            );
            let industry = format!(
                "{:<width$}",
                truncate_text(&industry_of(lead), industry_width),
                width = industry_width
            );

            let fixed_width = index_width
                + 1
                + score_width
                + separator.len() * 3
                + company_width
                + industry_width;
            let flags_text = lead.flags_text();
            let flags = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&flags_text, width - fixed_width),
                // Very narrow terminal, show truncated
                Some(_) => truncate_text(&flags_text, 20),
                // No terminal (pipe), don't truncate
                None => flags_text,
            };

            let line = if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    company.bold(),
                    separator,
                    industry.cyan(),
                    separator,
                    flags.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, company, separator, industry, separator, flags
                )
            };
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: score, company, industry, flags (no headers, no colors)
pub fn format_tsv(leads: &[&ScoredLead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}",
                lead.score,
                lead.record.label(),
                industry_of(lead),
                lead.flags_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single lead with its score breakdown (for verbose mode)
pub fn format_lead_detail(lead: &ScoredLead, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(lead.breakdown.factors.len() + 2);

    if use_colors {
        lines.push(format!("{}  {}", lead.record.label().bold(), lead.score.bold()));
    } else {
        lines.push(format!("{}  {}", lead.record.label(), lead.score));
    }

    for factor in &lead.breakdown.factors {
        lines.push(format!(
            "  {}: +{} ({})",
            factor.label, factor.points, factor.description
        ));
    }

    let flags = lead.flags_text();
    if flags.is_empty() {
        lines.push("  Flags: none".to_string());
    } else if use_colors {
        lines.push(format!("  Flags: {}", flags.yellow()));
    } else {
        lines.push(format!("  Flags: {}", flags));
    }

    lines.join("\n")
}

/// Summary metrics: total processed and how many survive the filter
pub fn format_metrics(total: usize, matching: usize) -> String {
    let delta = matching as i64 - total as i64;
    format!(
        "Total leads processed: {}\nLeads matching filter: {} ({})",
        total, matching, delta
    )
}
