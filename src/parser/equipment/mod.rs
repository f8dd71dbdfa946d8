pub mod rules;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::EquipmentEntry;
use rules::{first_match, EQUIPMENT_KEYWORDS};

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)\s+(.*)").unwrap());
static ARTICLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:a|an|the)\s+").unwrap());

/// Turn one equipment line into a canonical entry.
///
/// A leading integer is the quantity (default 1). The remaining phrase is
/// matched against the rule table; unmatched phrases that still mention an
/// equipment keyword are kept verbatim, anything else is dropped.
pub fn normalize(raw: &str) -> Option<EquipmentEntry> {
    let (quantity, phrase) = split_quantity(raw.trim());
    // Entry quantities are positive, so "0 x" lists nothing.
    if quantity == 0 {
        return None;
    }
    let name = canonical_name(phrase)?;
    Some(EquipmentEntry { name, quantity })
}

fn split_quantity(text: &str) -> (u32, &str) {
    let Some(caps) = QUANTITY_RE.captures(text) else {
        return (1, text);
    };
    match caps[1].parse::<u32>() {
        Ok(n) => (n, caps.get(2).map_or("", |m| m.as_str())),
        Err(_) => (1, text),
    }
}

fn canonical_name(phrase: &str) -> Option<String> {
    let original = phrase.trim();
    let lowered = original.to_lowercase();
    let lowered = ARTICLE_RE.replace(&lowered, "");

    if let Some(label) = first_match(&lowered) {
        return Some(label.to_string());
    }

    // Keeps the caller's casing and any leading article.
    if EQUIPMENT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(original.to_string());
    }
    None
}

/// Fold entries by name, summing quantities, in first-seen order.
pub fn merge<I>(entries: I) -> Vec<EquipmentEntry>
where
    I: IntoIterator<Item = EquipmentEntry>,
{
    let mut merged: Vec<EquipmentEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match index.get(&entry.name) {
            Some(&i) => {
                merged[i].quantity = merged[i].quantity.saturating_add(entry.quantity);
            }
            None => {
                index.insert(entry.name.clone(), merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}
