//! Console rendering for aggregated app reports.
//!
//! Pure formatting: consumes an [`AppReport`] (or nothing) and writes a
//! sectioned text report. No decisions are made here beyond which sections
//! have data to show.

use std::io::{self, Write};

use serde_json::Value;

use crate::models::AppReport;

/// Render a report to the given writer. `None` writes nothing.
pub fn render<W: Write>(report: Option<&AppReport>, out: &mut W) -> io::Result<()> {
    let Some(report) = report else {
        return Ok(());
    };

    writeln!(out, "\n╔════ APP DETAILS ════╗")?;
    writeln!(out, "Name: {}", text_or_dash(report.name.as_deref()))?;
    if let Some(appid) = report.steam_appid {
        writeln!(out, "Steam ID: {appid}")?;
    }
    writeln!(out, "Type: {}", text_or_dash(report.app_type.as_deref()))?;
    writeln!(out, "Free: {}", yes_no(report.is_free))?;
    writeln!(out, "Required age: {}", value_text(&report.required_age))?;
    writeln!(
        out,
        "Controller support: {}",
        text_or_dash(report.controller_support.as_deref())
    )?;
    if let Some(image) = &report.header_image {
        writeln!(out, "Header image: {image}")?;
    }
    writeln!(out, "╚═════════════════════╝")?;

    match &report.price_overview {
        Some(price) => {
            writeln!(out, "\n╔════ BASE PRICE ════╗")?;
            writeln!(out, "Currency: {}", price.currency)?;
            writeln!(out, "Initial price: {}", price.initial_formatted)?;
            writeln!(out, "Final price: {}", price.final_formatted)?;
            writeln!(out, "Discount: {}%", price.discount_percent)?;
            writeln!(out, "╚════════════════════╝")?;
        }
        None => {
            writeln!(out, "\nNo pricing information available")?;
        }
    }

    if report.dlc.is_empty() {
        writeln!(out, "\nNo DLC available")?;
    } else {
        writeln!(out, "\n╔════ DLC ({}) ════╗", report.dlc.len())?;
        for (index, dlc) in report.dlc.iter().enumerate() {
            writeln!(out, "\n{}. {} (ID: {})", index + 1, dlc.name, dlc.appid)?;
            if let Some(image) = &dlc.header_image {
                writeln!(out, "   Header image: {image}")?;
            }
            match &dlc.price_overview {
                Some(price) => {
                    writeln!(out, "   Initial price: {}€", format_price(price.initial))?;
                    writeln!(out, "   Final price: {}€", format_price(price.final_price))?;
                    writeln!(out, "   Discount: {}%", price.discount_percent)?;
                }
                None => {
                    writeln!(out, "   No pricing information")?;
                }
            }
        }
        if report.dlc_total_price > 0 {
            writeln!(out, "\nTOTAL DLC: {}€", format_price(report.dlc_total_price))?;
        } else {
            writeln!(out, "\nTOTAL DLC: 0€")?;
        }
        writeln!(out, "╚═════════════════════════════════╝")?;
    }

    if !report.subs.is_empty() {
        writeln!(out, "\n╔════ OTHER EDITIONS ════╗")?;
        for (index, sub) in report.subs.iter().enumerate() {
            writeln!(out, "\n{}. {}", index + 1, strip_markup(&sub.option_text))?;
            writeln!(out, "   Package ID: {}", sub.packageid)?;
            writeln!(out, "   Savings: {}", sub.percent_savings_text)?;
            writeln!(
                out,
                "   Price: {}€",
                format_price(sub.price_in_cents_with_discount)
            )?;
            writeln!(out, "   Free: {}", yes_no(sub.is_free_license))?;
        }
        writeln!(out, "\n╚════════════════════════╝")?;
    }

    writeln!(out)
}

/// Render a report to standard output. `None` prints nothing.
pub fn print(report: Option<&AppReport>) -> io::Result<()> {
    let stdout = io::stdout();
    render(report, &mut stdout.lock())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format minor-currency units as a two-decimal amount, without going
/// through floating point.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Remove every `<...>` tag span from storefront option text.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
        } else if ch == '<' {
            in_tag = true;
        } else {
            // A stray '>' outside a tag is ordinary text.
            out.push(ch);
        }
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn text_or_dash(text: Option<&str>) -> &str {
    text.unwrap_or("-")
}

/// Show a raw JSON scalar without quoting strings.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
