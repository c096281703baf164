use skybook_catalog::{FlightCatalog, PricingEngine};
use skybook_order::SessionManager;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FlightCatalog>,
    pub sessions: Arc<RwLock<SessionManager>>,
    pub pricing: Arc<PricingEngine>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn FlightCatalog>, pricing: PricingEngine) -> Self {
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(SessionManager::new())),
            pricing: Arc::new(pricing),
        }
    }
}
