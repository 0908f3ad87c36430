// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! The hardcoded datasets every screen is built from. The app has no other
//! data source; these literals are the catalog.

use crate::{Category, SearchEntry, Shipment, ShipmentStatus};

const SEARCH_ENTRIES: [(&str, &str, &str); 6] = [
    ("Macbook pro M2", "#NEJ385734857904", "Paris -> Morocco"),
    ("Hewlett Packard", "#PEY385734857904", "NewYork -> London"),
    ("Lenovo", "#AUX385734857904", "Berlin -> Maryland"),
    ("Dell", "#TOT385734857904", "Dubai -> England"),
    ("Samsung", "#LOV385734857904", "Luxemborg -> China"),
    ("Sony", "#BOX385734857904", "Paris -> India"),
];

// (id, status, title, description, amount, date). A few descriptions carry a
// sibling record's id; that is the catalog as shipped, kept verbatim.
const SHIPMENTS: [(&str, ShipmentStatus, &str, &str, &str, &str); 8] = [
    (
        "#NEJ20089934122231",
        ShipmentStatus::InProgress,
        "Arriving today!",
        "Your delivery, #NEJ20089934122231 from Atlanta, is arriving today!",
        "$1400 USD",
        "Sep 20, 2023",
    ),
    (
        "#NEJ20089934122237",
        ShipmentStatus::InProgress,
        "Arriving today!",
        "Your delivery, #NEJ20089934122231 from Atlanta, is arriving today!",
        "$1400 USD",
        "Sep 20, 2023",
    ),
    (
        "#NEJ20089934122232",
        ShipmentStatus::Pending,
        "Arriving today!",
        "Your delivery, #NEJ20089934122232 from Atlanta, is arriving today!",
        "$650 USD",
        "Sep 20, 2023",
    ),
    (
        "#NEJ20089934122233",
        ShipmentStatus::Pending,
        "Arriving today!",
        "Your delivery, #NEJ20089934122233 from Atlanta, is arriving today!",
        "$650 USD",
        "Sep 20, 2023",
    ),
    (
        "#NEJ20089934122234",
        ShipmentStatus::Completed,
        "Delivered!",
        "Your delivery, #NEJ20089934122234 from Atlanta, has been delivered!",
        "$1200 USD",
        "Sep 18, 2023",
    ),
    (
        "#NEJ20089934122236",
        ShipmentStatus::Completed,
        "Delivered!",
        "Your delivery, #NEJ20089934122234 from Atlanta, has been delivered!",
        "$1200 USD",
        "Sep 18, 2023",
    ),
    (
        "#NEJ20089934122235",
        ShipmentStatus::Cancelled,
        "Cancelled!",
        "Your delivery, #NEJ20089934122235 from Georgia, has been cancelled!",
        "$1500 USD",
        "Sep 18, 2023",
    ),
    (
        "#NEJ20089934122238",
        ShipmentStatus::Cancelled,
        "Cancelled!",
        "Your delivery, #NEJ20089934122235 from Georgia, has been cancelled!",
        "$1500 USD",
        "Sep 18, 2023",
    ),
];

const CATEGORIES: [&str; 7] = [
    "Documents",
    "Glass",
    "Liquid",
    "Food",
    "Electronic",
    "Product",
    "Others",
];

pub fn sample_search_entries() -> Vec<SearchEntry> {
    SEARCH_ENTRIES
        .iter()
        .map(|(title, tracking_number, route)| SearchEntry {
            title: (*title).to_owned(),
            tracking_number: (*tracking_number).to_owned(),
            route: (*route).to_owned(),
        })
        .collect()
}

pub fn sample_shipments() -> Vec<Shipment> {
    SHIPMENTS
        .iter()
        .map(|(id, status, title, description, amount, date)| Shipment {
            id: (*id).to_owned(),
            status: *status,
            title: (*title).to_owned(),
            description: (*description).to_owned(),
            amount: (*amount).to_owned(),
            date: (*date).to_owned(),
        })
        .collect()
}

pub fn sample_categories() -> Vec<Category> {
    CATEGORIES.iter().map(|name| Category::new(*name)).collect()
}
