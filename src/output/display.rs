//! Display functions for command results

use super::formatters::{columns, constraint_pattern, create_progress_bar, terminal_width};
use crate::commands::{BenchmarkResult, FindResult};
use colored::Colorize;

/// Print the result of a search
pub fn print_find_result(result: &FindResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Tiles:    {}", result.tiles.bright_yellow().bold());
    if !result.constraints.is_empty() {
        println!(
            "Pattern:  {}",
            constraint_pattern(&result.constraints).bright_yellow()
        );
    }
    println!(
        "Max size: {} letters ({} policy)",
        result.length_budget, result.policy
    );
    println!("{}", "─".repeat(60).cyan());

    if result.source_was_empty() {
        println!(
            "\n{}",
            "⚠️  The word list is empty, nothing to search.".yellow()
        );
        return;
    }

    if result.matches.is_empty() {
        println!("\n{}", "❌ No playable words found".red().bold());
        println!(
            "   Searched {} words in {:.1}ms\n",
            result.words_searched,
            result.duration.as_secs_f64() * 1000.0
        );
        return;
    }

    println!();
    for row in columns(&result.matches, terminal_width().saturating_sub(2)) {
        println!("  {}", row.green());
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ {} playable word{}",
            result.count(),
            if result.count() == 1 { "" } else { "s" }
        )
        .green()
        .bold()
    );
    println!(
        "   Searched {} words in {:.1}ms\n",
        result.words_searched,
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print matches one per line, for piping into other tools
pub fn print_plain(result: &FindResult) {
    for word in &result.matches {
        println!("{word}");
    }
}

/// Print only the number of matches
pub fn print_count(result: &FindResult) {
    println!("{}", result.count());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks tested:     {}", result.total_racks);
    println!("   Words per rack:   {}", result.words_per_rack);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    println!("\n🔤 {}", "Matches:".bright_cyan().bold());
    println!(
        "   Average per rack: {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_matches).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_matches).green()
    );
    println!("   Dead racks:       {}", result.empty_racks);
    if let Some((rack, count)) = &result.best_rack {
        println!("   Best rack:        {} ({count} words)", rack.bright_green());
    }

    if result.total_racks == 0 {
        return;
    }

    println!("\n📈 {}", "Longest playable word:".bright_cyan().bold());
    let mut lengths: Vec<usize> = result.longest_distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = result.longest_distribution[&length];
        let pct = (count as f64 / result.total_racks as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
