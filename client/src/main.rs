//! # ZPay Demo
//!
//! Scripted walkthrough of the client layer: guard redirects, login per
//! role, cached dashboard reads, and invalidation-driven refetch after
//! writes. Run with `ZPAY_LATENCY_MS=0` to skip the simulated delays.

use std::path::PathBuf;
use std::sync::Arc;

use backend::{Config, MockBackend};
use client::{Facade, Navigator, Route, SessionManager, SessionStore};
use shared::{
    CashRequest, DepositRequest, DirectoryFilter, DirectoryStatus, LoginRequest, TxnFilter,
};
use tracing::info;

fn session_path() -> PathBuf {
    std::env::var("ZPAY_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("zpay_session.json"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("ZPAY DEMO STARTING");

    let backend = Arc::new(MockBackend::new(config.clone()));
    let facade = Facade::new(Arc::clone(&backend));
    let sessions = Arc::new(SessionManager::new(
        backend,
        SessionStore::new(session_path()),
        &config,
    ));
    sessions.logout();
    let nav = Navigator::new(Arc::clone(&sessions));

    // Logged out, the admin area bounces to login and remembers the target.
    nav.navigate(Route::AdminDashboard);
    sessions
        .login(LoginRequest {
            email: "admin@zpay.dev".to_string(),
            password: "demo-secret".to_string(),
        })
        .await?;
    let landed = nav.resume_after_login();
    info!(route = landed.path(), "resumed after login");

    let stats = facade.admin.stats().await?;
    info!(
        users = stats.total_users,
        agents = stats.total_agents,
        txns = stats.tx_count,
        volume = stats.volume,
        "platform stats"
    );

    let pending = facade
        .admin
        .agents(DirectoryFilter {
            status: Some(DirectoryStatus::Pending),
            ..DirectoryFilter::default()
        })
        .await?;
    if let Some(first) = pending.items.first() {
        info!(id = %first.id, name = %first.name, "approving pending agent");
        facade.admin.approve_agent(&first.id).await?;
    }
    sessions.logout();

    // A regular user bounces off the admin area and lands home.
    sessions
        .login(LoginRequest {
            email: "user@zpay.dev".to_string(),
            password: "demo-secret".to_string(),
        })
        .await?;
    nav.navigate(Route::AdminDashboard);
    nav.navigate(Route::UserDashboard);

    let before = facade.wallet.summary().await?;
    info!(balance = before.balance, "wallet before deposit");
    facade
        .wallet
        .deposit(DepositRequest {
            amount: 1500,
            note: Some("Top-up".to_string()),
        })
        .await?;
    let after = facade.wallet.summary().await?;
    info!(balance = after.balance, "wallet after deposit");

    let recent = facade.wallet.txns(TxnFilter::default()).await?;
    info!(
        showing = recent.items.len(),
        total = recent.total,
        "recent wallet transactions"
    );
    sessions.logout();

    // The agent booth takes cash over the counter.
    sessions
        .login(LoginRequest {
            email: "agent@zpay.dev".to_string(),
            password: "demo-secret".to_string(),
        })
        .await?;
    nav.navigate(Route::AgentDashboard);
    facade
        .agent
        .cash_in(CashRequest {
            user: "01710001122".to_string(),
            amount: 800,
            note: None,
        })
        .await?;
    facade
        .agent
        .cash_out(CashRequest {
            user: "01710001122".to_string(),
            amount: 300,
            note: None,
        })
        .await?;
    let booth = facade.agent.summary().await?;
    info!(
        cash_in = booth.today_cash_in,
        cash_out = booth.today_cash_out,
        commission = booth.month_commission,
        "agent booth today"
    );
    sessions.logout();

    // Marketing content rides the same latency contract.
    let features = facade.landing.features().await?;
    info!(count = features.len(), "landing features loaded");

    info!("ZPAY DEMO COMPLETE");
    Ok(())
}
