use skybook_order::SessionManager;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Periodically drops sessions that have been idle past `idle_timeout`.
pub async fn start_session_sweeper(
    sessions: Arc<RwLock<SessionManager>>,
    idle_timeout: chrono::Duration,
    every: std::time::Duration,
) {
    let mut ticker = tokio::time::interval(every);
    info!("Session sweeper started, idle timeout {}s", idle_timeout.num_seconds());

    loop {
        ticker.tick().await;
        sweep_idle_sessions(&sessions, idle_timeout).await;
    }
}

pub async fn sweep_idle_sessions(sessions: &RwLock<SessionManager>, idle_timeout: chrono::Duration) -> usize {
    let mut sessions = sessions.write().await;
    let removed = sessions.remove_idle(idle_timeout);
    if removed > 0 {
        info!("Swept {} idle sessions, {} remaining", removed, sessions.len());
    } else {
        debug!("No idle sessions ({} live)", sessions.len());
    }
    removed
}
