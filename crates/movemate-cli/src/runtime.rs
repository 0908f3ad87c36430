// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use movemate_app::{
    Category, SearchEntry, Shipment, sample_categories, sample_search_entries, sample_shipments,
};

/// Serves the bundled sample catalog. The UI only talks to the `AppRuntime`
/// seam, so a real data source later is a change local to this type.
#[derive(Debug, Default)]
pub struct SampleRuntime;

impl movemate_tui::AppRuntime for SampleRuntime {
    fn load_search_entries(&mut self) -> Result<Vec<SearchEntry>> {
        Ok(sample_search_entries())
    }

    fn load_shipments(&mut self) -> Result<Vec<Shipment>> {
        Ok(sample_shipments())
    }

    fn load_categories(&mut self) -> Result<Vec<Category>> {
        Ok(sample_categories())
    }
}
