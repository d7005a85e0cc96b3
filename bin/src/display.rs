//! Display utilities and output formatting for the cookiecrumb CLI.

use anyhow::Result;
use clap::ValueEnum;
use cookiecrumb_lib::prelude::*;
use serde::Serialize;

/// Output format for fetched data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Pretty-prints any serializable value as JSON to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), value)?;
    println!();
    Ok(())
}

/// Print quotes as a table.
pub(crate) fn print_quotes(quotes: &[Quote]) {
    println!(
        "{:<10} {:<28} {:>12} {:>10} {:>9} {:<8}",
        "SYMBOL", "NAME", "PRICE", "CHANGE", "CHANGE%", "STATE"
    );
    println!("{}", "-".repeat(82));

    for quote in quotes {
        println!(
            "{:<10} {:<28} {:>12} {:>10} {:>9} {:<8}",
            quote.symbol,
            truncate(quote.display_name(), 28),
            number(quote.regular_market_price),
            number(quote.regular_market_change),
            percent(quote.regular_market_change_percent),
            quote.market_state.as_deref().unwrap_or("-"),
        );
    }
}

/// Print a market status.
pub(crate) fn print_status(status: &MarketStatus) {
    println!("Market:   {}", status.id);
    println!("State:    {}", if status.state.is_empty() { "-" } else { &status.state });
    println!("Open:     {}", time_or_raw(status.open, &status.open_raw));
    println!("Close:    {}", time_or_raw(status.close, &status.close_raw));
    if let Some(tz) = &status.timezone {
        println!(
            "Timezone: {} {} (GMT{:+.1}h)",
            tz.short,
            tz.long,
            tz.gmt_offset as f64 / 3_600_000.0
        );
    }
}

/// Print a market summary as a table.
pub(crate) fn print_summary(summary: &MarketSummary) {
    println!(
        "{:<10} {:<12} {:<24} {:>12} {:>10} {:>9}",
        "EXCHANGE", "SYMBOL", "NAME", "PRICE", "CHANGE", "CHANGE%"
    );
    println!("{}", "-".repeat(82));

    for (exchange, item) in summary {
        println!(
            "{:<10} {:<12} {:<24} {:>12.2} {:>10.2} {:>8.2}%",
            exchange,
            item.symbol,
            truncate(&item.short_name, 24),
            item.regular_market_price,
            item.regular_market_change,
            item.regular_market_change_percent,
        );
    }

    println!("\nTotal: {} entries", summary.len());
}

/// Returns at most `max` characters of `s`, marking cut text with `...`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Returns the first `max` characters of `s` followed by `...`, or `None` if
/// `s` already fits.
pub(crate) fn preview(s: &str, max: usize) -> Option<String> {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max).collect();
    chars.next().map(|_| format!("{head}..."))
}

fn number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}%"))
}

fn time_or_raw(time: Option<chrono::DateTime<chrono::FixedOffset>>, raw: &str) -> String {
    match time {
        Some(time) => time.format("%Y-%m-%d %H:%M %:z").to_string(),
        None if raw.is_empty() => "-".to_string(),
        None => raw.to_string(),
    }
}
