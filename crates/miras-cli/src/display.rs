//! Plain-text rendering of a computed session.
//!
//! Percentages are rounded to two decimals here; the computed values stay
//! unrounded.

use miras_core::{ActionItem, Flag, Session, Severity, ShareEntry};

const LABEL_WIDTH: usize = 26;

/// Print the estate totals, shares, flags, and action items.
pub fn print_report(session: &Session) {
    let computed = &session.computed;
    let title = if session.decedent.name.is_empty() {
        "Estate of (unnamed)".to_string()
    } else {
        format!("Estate of {}", session.decedent.name)
    };

    println!("=== {title} ===");
    println!(
        "Session {}, {}, {}",
        session.session_id, session.state, session.date
    );
    if !session.has_legal_checklist() {
        println!("Legal checklist covers Illinois only.");
    }
    println!();

    println!("Estate");
    print_field("probate", &format_money(computed.probate_estate_value));
    print_field("non-probate", &format_money(computed.non_probate_value));
    println!();

    print_shares(&computed.shares);
    print_flags(&computed.flags);
    print_action_items(&computed.action_items);
}

fn print_field(label: &str, value: &str) {
    println!("  {:<width$} {}", label, value, width = LABEL_WIDTH);
}

fn print_shares(shares: &[ShareEntry]) {
    println!("Shares (Sunni model)");
    if shares.is_empty() {
        println!("  (no living heirs with a modelled share)");
    }
    for share in shares {
        let label = format!("{} ({})", share.heir_name, share.relation);
        print_field(
            &label,
            &format!("{:>9} {:>7.2}%", share.fraction.to_string(), share.percentage),
        );
        println!("  {:<width$} {}", "", share.explanation, width = LABEL_WIDTH);
    }
    println!();
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARN",
        Severity::Info => "INFO",
    }
}

fn print_flags(flags: &[Flag]) {
    if flags.is_empty() {
        return;
    }
    println!("Flags");
    for flag in flags {
        println!("  [{}] {}", severity_tag(flag.severity), flag.title);
        println!("      {}", flag.description);
        if let Some(assets) = &flag.assets {
            println!("      assets: {}", assets.join(", "));
        }
    }
    println!();
}

fn print_action_items(items: &[ActionItem]) {
    println!("Action Items");
    for (i, item) in items.iter().enumerate() {
        println!("  {}. [P{}] {}", i + 1, item.priority, item.title);
        println!("      {}", item.description);
        if let Some(script) = &item.script {
            println!("      > {script}");
        }
    }
}

/// `1234567.5` → `$1,234,567.50`
fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
