//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the ZPay client layer and the
//! mock backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects per domain
//!   - **[`dto::auth`]**: Authentication, session identity, and roles
//!   - **[`dto::wallet`]**: Personal wallet transactions and summaries
//!   - **[`dto::agent`]**: Agent cash-in/cash-out ledger
//!   - **[`dto::admin`]**: Platform stats, user directory, global ledger
//!   - **[`dto::landing`]**: Marketing content (features, plans, FAQs)
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** (default `serde` behavior)
//! - Enums serialize to lowercase strings via `#[serde(rename_all = "lowercase")]`
//! - Optional fields are omitted when `None`
//! - Timestamps are `chrono::DateTime<Utc>` in RFC 3339
//! - Amounts are whole BDT as `i64`

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
