// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod backend;
pub mod prediction;
pub mod records;

pub use backend::BackendClient;
pub use prediction::{predict, Prediction};
pub use records::RecordsService;
