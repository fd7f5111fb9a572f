// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod distance;
pub mod record;
pub mod user;

pub use distance::CanonicalDistance;
pub use record::{GlobalStats, Record, SessionRecord, UploadSummary};
pub use user::{BackendUser, Credentials, LoginRequest, RegisterRequest};
