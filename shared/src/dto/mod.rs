//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged between the client layer and the mock
//! backend, one module per domain.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, roles, and the authenticated identity
//! - [`wallet`] - Personal wallet transactions, filters, and summary
//! - [`agent`] - Agent booth cash-in/cash-out ledger
//! - [`admin`] - Platform statistics, user/agent directory, global ledger
//! - [`landing`] - Marketing page content
//!
//! Every paginated list operation returns an [`Envelope`].

use serde::{Deserialize, Serialize};

pub mod admin;
pub mod agent;
pub mod auth;
pub mod landing;
pub mod wallet;

pub use admin::*;
pub use agent::*;
pub use auth::*;
pub use landing::*;
pub use wallet::*;

/// One page of a filtered listing.
///
/// Invariants: `items.len() <= page_size`, and `items` is the contiguous
/// slice of the filtered ordering starting at `(page - 1) * page_size`.
/// `total` counts every record matching the filter, before pagination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Acknowledgement returned by mutations that carry no payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

/// Acknowledgement carrying the id of the record the mutation created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxnReceipt {
    pub ok: bool,
    pub id: String,
}
