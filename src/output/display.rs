//! Display functions for command results

use super::formatters::{create_progress_bar, describe_word_limit, pluralize};
use crate::commands::{GroupsReport, LookupReport, SearchConfig, SearchReport, UpdateReport};
use crate::core::normalize;
use crate::search::{Combination, StopRule};
use colored::Colorize;

/// Print the banner shown before phrase search results stream in
pub fn print_search_header(config: &SearchConfig) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of: {}",
        config.query.to_uppercase().bright_yellow().bold()
    );
    let normalized = normalize(&config.query);
    if normalized != config.query {
        println!("{}", format!("Searching as '{normalized}'").bright_black());
    }
    if config.options.stop_rule == StopRule::Exhaustive {
        println!("{}", "(exhaustive search)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print one accepted combination
pub fn print_combination(combination: &Combination<'_>) {
    println!("  • {}", combination.to_string().bright_white());
}

/// Print the summary after a phrase search
pub fn print_search_report(report: &SearchReport) {
    let query_len = report.normalized.chars().count();

    if report.found == 0 {
        println!("  {}", "No anagrams found".yellow());
    }
    println!(
        "\n{} from {} ({}, {} letters) in {:.2}s",
        format!("Found {}", pluralize(report.found, "anagram"))
            .green()
            .bold(),
        pluralize(report.candidates, "candidate"),
        describe_word_limit(report.word_limit, query_len),
        query_len,
        report.duration.as_secs_f64()
    );
}

/// Print the anagrams of a single word
pub fn print_lookup_result(report: &LookupReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Single-word anagrams of: {}",
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.is_empty() {
        println!("  {}", "No anagrams found".yellow());
        return;
    }
    for word in &report.anagrams {
        println!("  • {}", word.bright_white());
    }
    println!(
        "\n{}",
        format!("✅ {}", pluralize(report.anagrams.len(), "anagram"))
            .green()
            .bold()
    );
}

/// Print the vocabulary's anagram classes
pub fn print_groups_result(report: &GroupsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANAGRAM GROUPS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} groups in {} ({:.2}s)\n",
        report.total_groups,
        pluralize(report.vocabulary_size, "word"),
        report.duration.as_secs_f64()
    );

    if report.groups.is_empty() {
        println!("  {}", "No anagrams found".yellow());
        return;
    }

    let largest = report.groups.iter().map(|g| g.words.len()).max().unwrap_or(1);
    for group in &report.groups {
        let bar = create_progress_bar(group.words.len() as f64, largest as f64, 10);
        println!(
            "  {} {:>3}  {}",
            bar.green(),
            group.words.len(),
            group.words.join(", ").bright_white()
        );
    }

    if report.groups.len() < report.total_groups {
        println!(
            "\n  {}",
            format!("... {} more", report.total_groups - report.groups.len()).bright_black()
        );
    }
}

/// Print the outcome of a vocabulary rebuild
pub fn print_update_result(report: &UpdateReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VOCABULARY UPDATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Source:   {}", report.source);
    println!("   Cache:    {}", report.cache_path.display());
    println!(
        "   Words:    {}",
        report.words.to_string().bright_yellow().bold()
    );

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let largest = report.buckets.iter().map(|&(_, n)| n).max().unwrap_or(1);
    for &(len, count) in &report.buckets {
        let bar = create_progress_bar(count as f64, largest as f64, 40);
        println!("   {len:>3}: {} {count:6}", bar.green());
    }
}
