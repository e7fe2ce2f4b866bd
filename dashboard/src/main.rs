//! CLI demo for the dashboard.
//!
//! Connects to the ticket backend (`CHURNBOARD_API_URL`, defaulting to the
//! local development address), takes one refreshed snapshot, and prints the
//! KPIs and the filtered table the way the dashboard would render them.

use churnboard_api::TicketClient;
use churnboard_core::environment::SystemClock;
use churnboard_runtime::Store;
use dashboard::{
    DashboardAction, DashboardEnvironment, DashboardReducer, DashboardState, risk_band,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let env = DashboardEnvironment::new(
        Arc::new(TicketClient::from_env()),
        Arc::new(SystemClock),
    );
    let store = Store::new(DashboardState::new(), DashboardReducer::new(), env);

    println!("=== Churnboard ===\n");

    // One refresh, waiting for the snapshot to land
    let outcome = store
        .send_and_wait_for(
            DashboardAction::Refresh,
            |action| {
                matches!(
                    action,
                    DashboardAction::RefreshCompleted { .. }
                        | DashboardAction::RefreshFailed { .. }
                )
            },
            Duration::from_secs(10),
        )
        .await?;

    if let DashboardAction::RefreshFailed { message } = outcome {
        anyhow::bail!("could not reach the ticket backend: {message}");
    }

    let (kpis, visible) = store
        .state(|s| (s.kpis(), s.visible_tickets()))
        .await;

    println!("Tickets: {}", kpis.total);
    println!("Average churn: {:.1}", kpis.average_churn);
    println!("High risk (>70): {}\n", kpis.high_risk);

    for ticket in &visible {
        println!(
            "#{:<5} {:<12} {:<10} churn {:>5.1} ({:?})  {}",
            ticket.id,
            ticket.client_id,
            ticket.status,
            ticket.churn_score,
            risk_band(ticket.churn_score),
            ticket.date,
        );
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
