//! # API Service Implementations
//!
//! Wires the [`core::service`](crate::core::service) traits to the
//! in-process [`MockBackend`]. Each method is a straight delegation; reads
//! never fail in the mock, so they are wrapped in `Ok` here.

use async_trait::async_trait;
use backend::{MockBackend, Result};
use shared::{
    Ack, AdminStats, AdminTxn, AdminTxnFilter, AgentSummary, AgentTxn, AgentTxnFilter,
    AuthResponse, CashRequest, DepositRequest, DirectoryEntry, DirectoryFilter, Envelope, Faq,
    Feature, LoginRequest, Plan, RegisterRequest, SendRequest, Txn, TxnFilter, TxnReceipt,
    WalletSummary, WithdrawRequest,
};

use crate::core::service::{AdminApi, AgentApi, AuthApi, LandingApi, WalletApi};

#[async_trait]
impl AuthApi for MockBackend {
    async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        self.auth.login(req).await
    }

    async fn register(&self, req: RegisterRequest) -> Result<AuthResponse> {
        self.auth.register(req).await
    }
}

#[async_trait]
impl WalletApi for MockBackend {
    async fn summary(&self) -> Result<WalletSummary> {
        Ok(self.wallet.summary().await)
    }

    async fn txns(&self, filter: TxnFilter) -> Result<Envelope<Txn>> {
        Ok(self.wallet.txns(filter).await)
    }

    async fn deposit(&self, req: DepositRequest) -> Result<Ack> {
        self.wallet.deposit(req).await
    }

    async fn withdraw(&self, req: WithdrawRequest) -> Result<Ack> {
        self.wallet.withdraw(req).await
    }

    async fn send(&self, req: SendRequest) -> Result<Ack> {
        self.wallet.send(req).await
    }
}

#[async_trait]
impl AgentApi for MockBackend {
    async fn summary(&self) -> Result<AgentSummary> {
        Ok(self.agent.summary().await)
    }

    async fn txns(&self, filter: AgentTxnFilter) -> Result<Envelope<AgentTxn>> {
        Ok(self.agent.txns(filter).await)
    }

    async fn cash_in(&self, req: CashRequest) -> Result<TxnReceipt> {
        self.agent.cash_in(req).await
    }

    async fn cash_out(&self, req: CashRequest) -> Result<TxnReceipt> {
        self.agent.cash_out(req).await
    }
}

#[async_trait]
impl AdminApi for MockBackend {
    async fn stats(&self) -> Result<AdminStats> {
        Ok(self.admin.stats().await)
    }

    async fn users(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>> {
        Ok(self.admin.users(filter).await)
    }

    async fn agents(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>> {
        Ok(self.admin.agents(filter).await)
    }

    async fn toggle_user(&self, id: &str) -> Result<Ack> {
        self.admin.toggle_user(id).await
    }

    async fn approve_agent(&self, id: &str) -> Result<Ack> {
        self.admin.approve_agent(id).await
    }

    async fn suspend_agent(&self, id: &str) -> Result<Ack> {
        self.admin.suspend_agent(id).await
    }

    async fn global_txns(&self, filter: AdminTxnFilter) -> Result<Envelope<AdminTxn>> {
        Ok(self.admin.global_txns(filter).await)
    }
}

#[async_trait]
impl LandingApi for MockBackend {
    async fn features(&self) -> Result<Vec<Feature>> {
        Ok(self.landing.features().await)
    }

    async fn plans(&self) -> Result<Vec<Plan>> {
        Ok(self.landing.plans().await)
    }

    async fn faqs(&self) -> Result<Vec<Faq>> {
        Ok(self.landing.faqs().await)
    }
}
