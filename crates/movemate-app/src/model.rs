// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// One of the application's fixed views. Tags are the wire-level names used
/// by configuration; unknown tags parse to `None` and callers skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Search,
    Calculate,
    Shipment,
    Profile,
}

impl Screen {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Search,
        Self::Calculate,
        Self::Shipment,
        Self::Profile,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Calculate => "calculate",
            Self::Shipment => "shipment",
            Self::Profile => "profile",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "search" => Some(Self::Search),
            "calculate" => Some(Self::Calculate),
            "shipment" => Some(Self::Shipment),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Calculate => "Calculate",
            Self::Shipment => "Shipment",
            Self::Profile => "Profile",
        }
    }
}

/// Shipment status tags. `All` is a filter sentinel, never stored on a
/// record by the sample data. Display labels and colors live with the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShipmentStatus {
    All,
    Completed,
    InProgress,
    Pending,
    Cancelled,
}

impl ShipmentStatus {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Completed,
        Self::InProgress,
        Self::Pending,
        Self::Cancelled,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "in_progress" => Some(Self::InProgress),
            "pending" => Some(Self::Pending),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A shippable-goods category with a selection flag. Identity is the name,
/// assumed unique within a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub selected: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
        }
    }
}

/// One shipment history row. Amount and date are display strings; records
/// are filtered, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub id: String,
    pub status: ShipmentStatus,
    pub title: String,
    pub description: String,
    pub amount: String,
    pub date: String,
}

/// One searchable shipment row on the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: String,
    pub tracking_number: String,
    pub route: String,
}
