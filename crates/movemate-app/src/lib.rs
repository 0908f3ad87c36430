// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod model;
pub mod query;
pub mod sample;
pub mod state;

pub use model::*;
pub use query::*;
pub use sample::*;
pub use state::*;
