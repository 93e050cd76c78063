// Colored terminal output for word clouds.
//
// One bar per term, scaled to its normalized weight. The CLI delegates
// here; the HTTP surface serializes the same ranking as JSON instead.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::topics::analyzer::Method;
use crate::topics::ranking::RankedTerm;

const BAR_WIDTH: usize = 20;

/// Display a ranked word cloud as a bar chart.
pub fn display_word_cloud(title: &str, method: Method, terms: &[RankedTerm]) {
    println!(
        "\n{}",
        format!(
            "=== {} ({} terms, {}) ===",
            truncate_chars(title, 60),
            terms.len(),
            method
        )
        .bold()
    );
    println!();

    for (i, term) in terms.iter().enumerate() {
        println!(
            "  {:>2}. {:<32} {} {:.3}",
            i + 1,
            term.term.bold(),
            weight_bar(term.weight),
            term.weight
        );
    }
    println!();
}

/// Render `[=====     ]` colored by weight band.
fn weight_bar(weight: f64) -> colored::ColoredString {
    let filled = (weight.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );

    if weight >= 0.66 {
        bar.bright_green()
    } else if weight >= 0.33 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
