//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use docsystem_auth::{AuthGateway, RequestValidator};
use docsystem_core::config::AppConfig;
use docsystem_dataset::Dataset;
use docsystem_dataset::repositories::{ContactRepository, ObjectRepository, VersionRepository};
use docsystem_service::{
    ContactService, DocumentationService, ExportService, HomeService, NavigationService,
    ObjectService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Server start time, for uptime reporting
    pub started_at: Instant,

    // ── Data ─────────────────────────────────────────────────
    /// Immutable catalogs
    pub dataset: Arc<Dataset>,

    // ── Services ─────────────────────────────────────────────
    pub navigation: Arc<NavigationService>,
    pub home: Arc<HomeService>,
    pub documentation: Arc<DocumentationService>,
    pub objects: Arc<ObjectService>,
    pub export: Arc<ExportService>,
    pub contacts: Arc<ContactService>,

    // ── Auth ─────────────────────────────────────────────────
    /// Backend every `/api/auth/*` call is forwarded to
    pub auth_gateway: Arc<dyn AuthGateway>,
    /// Checks run before forwarding
    pub auth_validator: Arc<RequestValidator>,
}

impl AppState {
    /// Wire every service over one dataset.
    pub fn new(
        config: AppConfig,
        dataset: Arc<Dataset>,
        auth_gateway: Arc<dyn AuthGateway>,
    ) -> Self {
        let versions = VersionRepository::new(Arc::clone(&dataset));
        let objects = ObjectRepository::new(Arc::clone(&dataset));
        let contacts = ContactRepository::new(Arc::clone(&dataset));

        let documentation = DocumentationService::new(versions);
        let object_service = ObjectService::new(objects);
        let home = HomeService::new(documentation.clone(), object_service.clone());
        let export = ExportService::new(object_service.clone());

        Self {
            auth_validator: Arc::new(RequestValidator::new(&config.auth)),
            config: Arc::new(config),
            started_at: Instant::now(),
            dataset,
            navigation: Arc::new(NavigationService::new()),
            home: Arc::new(home),
            documentation: Arc::new(documentation),
            objects: Arc::new(object_service),
            export: Arc::new(export),
            contacts: Arc::new(ContactService::new(contacts)),
            auth_gateway,
        }
    }
}
