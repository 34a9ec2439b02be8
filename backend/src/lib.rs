//! # Mock Backend
//!
//! The simulated server side of the ZPay demo. Every "endpoint" is an
//! in-process async call against an in-memory store, delayed by a configurable
//! [`Latency`] to emulate a network round-trip. Nothing here persists: stores
//! are seeded at construction and live for the process lifetime.
//!
//! ## Domains
//!
//! - [`store::wallet`]: personal wallet balance and transaction ledger
//! - [`store::agent`]: agent booth cash-in/cash-out ledger
//! - [`store::admin`]: platform stats, moderation directory, global ledger
//! - [`landing`]: static marketing content
//! - [`auth`]: demo-token login and registration
//!
//! Each store is an explicit object owned by [`MockBackend`]; construct one
//! per application (or per test) instead of reaching for globals.

pub mod auth;
pub mod config;
pub mod error;
pub mod landing;
pub mod latency;
pub mod store;

pub use config::Config;
pub use error::{ApiError, Result};
pub use latency::Latency;

use auth::AuthService;
use landing::LandingStore;
use store::admin::AdminStore;
use store::agent::AgentStore;
use store::wallet::WalletStore;

/// The whole simulated backend: one store per domain plus the auth service.
///
/// All stores share the latency profile from the supplied [`Config`]. Tests
/// pass a config with [`Latency::None`] to run synchronously fast.
pub struct MockBackend {
    pub auth: AuthService,
    pub wallet: WalletStore,
    pub agent: AgentStore,
    pub admin: AdminStore,
    pub landing: LandingStore,
}

impl MockBackend {
    /// Build a backend seeded with the demo data set.
    pub fn new(config: Config) -> Self {
        let latency = config.latency;
        Self {
            auth: AuthService::new(config),
            wallet: WalletStore::new(latency),
            agent: AgentStore::new(latency),
            admin: AdminStore::new(latency),
            landing: LandingStore::new(latency),
        }
    }
}
