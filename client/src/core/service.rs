//! # API Service Traits
//!
//! The seam between the client layer and whatever answers its requests.
//! The façade and the session manager depend on these traits rather than on
//! the concrete backend, so tests can substitute counting or failure-
//! injecting stubs.

use async_trait::async_trait;
use backend::Result;
use shared::{
    Ack, AdminStats, AdminTxn, AdminTxnFilter, AgentSummary, AgentTxn, AgentTxnFilter,
    AuthResponse, CashRequest, DepositRequest, DirectoryEntry, DirectoryFilter, Envelope, Faq,
    Feature, LoginRequest, Plan, RegisterRequest, SendRequest, Txn, TxnFilter, TxnReceipt,
    WalletSummary, WithdrawRequest,
};

/// Login and registration endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, req: LoginRequest) -> Result<AuthResponse>;
    async fn register(&self, req: RegisterRequest) -> Result<AuthResponse>;
}

/// Personal wallet endpoints.
#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn summary(&self) -> Result<WalletSummary>;
    async fn txns(&self, filter: TxnFilter) -> Result<Envelope<Txn>>;
    async fn deposit(&self, req: DepositRequest) -> Result<Ack>;
    async fn withdraw(&self, req: WithdrawRequest) -> Result<Ack>;
    async fn send(&self, req: SendRequest) -> Result<Ack>;
}

/// Agent booth endpoints.
#[async_trait]
pub trait AgentApi: Send + Sync {
    async fn summary(&self) -> Result<AgentSummary>;
    async fn txns(&self, filter: AgentTxnFilter) -> Result<Envelope<AgentTxn>>;
    async fn cash_in(&self, req: CashRequest) -> Result<TxnReceipt>;
    async fn cash_out(&self, req: CashRequest) -> Result<TxnReceipt>;
}

/// Admin dashboard endpoints.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn stats(&self) -> Result<AdminStats>;
    async fn users(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>>;
    async fn agents(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>>;
    async fn toggle_user(&self, id: &str) -> Result<Ack>;
    async fn approve_agent(&self, id: &str) -> Result<Ack>;
    async fn suspend_agent(&self, id: &str) -> Result<Ack>;
    async fn global_txns(&self, filter: AdminTxnFilter) -> Result<Envelope<AdminTxn>>;
}

/// Marketing content endpoints.
#[async_trait]
pub trait LandingApi: Send + Sync {
    async fn features(&self) -> Result<Vec<Feature>>;
    async fn plans(&self) -> Result<Vec<Plan>>;
    async fn faqs(&self) -> Result<Vec<Faq>>;
}
