use std::io::{self, Write};

use client_core::ViewSession;
use shared::filter::{CurrencyCategory, FilterCriteria};

pub fn describe_criteria(criteria: &FilterCriteria) -> String {
    let query = criteria.query.trim();
    let query = if query.is_empty() { "-" } else { query };
    let region = criteria.region.as_deref().unwrap_or("-");
    let currency = match criteria.currency {
        CurrencyCategory::None => "-".to_string(),
        category => format!("{} {}", category.label(), category),
    };
    format!("search: {query} | region: {region} | currency: {currency}")
}

pub fn print_cards(session: &ViewSession) {
    let cards = session.visible_cards();
    println!(
        "{} of {} countries ({})",
        cards.len(),
        session.len(),
        describe_criteria(session.criteria())
    );
    for card in cards {
        println!();
        println!("{card}");
    }
}

pub fn print_regions(session: &ViewSession) {
    for region in session.regions() {
        println!("{region}");
    }
}

pub fn write_json(session: &ViewSession, mut out: impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, &session.visible())?;
    writeln!(out)?;
    Ok(())
}

pub fn print_json(session: &ViewSession) -> anyhow::Result<()> {
    write_json(session, io::stdout().lock())
}
