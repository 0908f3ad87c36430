// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Category, SearchEntry, Shipment, ShipmentStatus};
use std::collections::BTreeMap;

/// Case-insensitive substring search across all three fields of each entry.
/// An empty query passes the whole list through, order preserved.
pub fn search_entries(entries: &[SearchEntry], query: &str) -> Vec<SearchEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            contains_ignore_case(&entry.title, &needle)
                || contains_ignore_case(&entry.tracking_number, &needle)
                || contains_ignore_case(&entry.route, &needle)
        })
        .cloned()
        .collect()
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Per-status record counts. Lookup defaults to zero for statuses that never
/// occur; `total` backs the All chip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusCounts {
    counts: BTreeMap<ShipmentStatus, usize>,
    total: usize,
}

impl StatusCounts {
    pub fn count_for(&self, status: ShipmentStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub const fn total(&self) -> usize {
        self.total
    }
}

pub fn status_counts(shipments: &[Shipment]) -> StatusCounts {
    let mut counts = BTreeMap::new();
    for shipment in shipments {
        *counts.entry(shipment.status).or_insert(0) += 1;
    }
    StatusCounts {
        counts,
        total: shipments.len(),
    }
}

/// Records matching `status` verbatim; the `All` sentinel selects every
/// record. Order preserved.
pub fn filter_by_status(shipments: &[Shipment], status: ShipmentStatus) -> Vec<Shipment> {
    if status == ShipmentStatus::All {
        return shipments.to_vec();
    }

    shipments
        .iter()
        .filter(|shipment| shipment.status == status)
        .cloned()
        .collect()
}

/// Inverts the selected flag on the first category whose name equals
/// `name`. Returns whether anything was toggled; an unmatched name leaves
/// the list untouched.
pub fn toggle_category(categories: &mut [Category], name: &str) -> bool {
    match categories.iter_mut().find(|category| category.name == name) {
        Some(category) => {
            category.selected = !category.selected;
            true
        }
        None => false,
    }
}
