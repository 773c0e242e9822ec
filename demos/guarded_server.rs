//! Guarded server demonstration.
//!
//! Serves the showcase routes behind the access gate. Requests carry their
//! session in the `x-user-id` header (normally set by an auth proxy).
//!
//! Run with: `cargo run --example guarded_server`
//!
//! ```text
//! curl -i localhost:3000/dashboard                      # 307 → /signin
//! curl -i -H 'x-user-id: user_1' localhost:3000/signin  # 307 → /home
//! curl -i localhost:3000/api/videos                     # 200, JSON cards
//! ```

use showcase_gate::{
    notify::{AutoDismiss, NotificationKind, NotificationStore},
    web::{router, GuardState},
    GateConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GateConfig::load(Some(&GateConfig::default_path()))?;
    showcase_gate::logging::init(&config.log_filter)?;

    let notifications = NotificationStore::new();
    let _dismiss = AutoDismiss::spawn(notifications.clone(), config.notification_ttl());
    notifications.add(NotificationKind::Info, "Server started");

    let state = GuardState::new(config.gate(), config.boundary_filter(), config.identity());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
