//! Main shell state container
//!
//! One `Shell` per window. Everything durable (wallpaper, search
//! engine) lives in the settings store; the session state lives and
//! dies with the window.

use std::sync::Arc;
use std::time::Duration;

use atrium_resolver::{FallbackResolver, ResolverClient, StatusSink, TracingStatusSink};
use atrium_session::{
    BrowsingSurface, InputDispatcher, InputField, NavigationCapability, SessionController,
    SurfaceEventBridge, ViewState,
};
use atrium_storage::Database;
use atrium_widgets::{BackendClient, WallpaperStore};

use crate::config::Config;
use crate::Result;

pub struct Shell {
    config: Config,
    db: Database,
    resolver: ResolverClient,
    controller: SessionController,
    bridge: SurfaceEventBridge,
    dispatcher: InputDispatcher,
    backend: BackendClient,
    wallpaper: WallpaperStore,
}

impl Shell {
    /// Build a shell around the embedding layer's browsing surface.
    pub fn new(config: Config, surface: Arc<dyn BrowsingSurface>) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        let status: Arc<dyn StatusSink> = Arc::new(TracingStatusSink);

        let fallback = FallbackResolver::with_search_engine(config.search_engine.clone());
        let mut resolver = ResolverClient::new(&config.backend_url, fallback, Arc::clone(&status));
        if let Some(ms) = config.resolver_timeout_ms {
            resolver = resolver.with_timeout(Duration::from_millis(ms));
        }

        let controller = SessionController::new(surface, status);
        let bridge = SurfaceEventBridge::attach(controller.clone());
        let dispatcher = InputDispatcher::new(resolver.clone(), controller.clone());
        let backend = BackendClient::new(&config.backend_url);
        let wallpaper = WallpaperStore::new(db.clone());

        Ok(Self {
            config,
            db,
            resolver,
            controller,
            bridge,
            dispatcher,
            backend,
            wallpaper,
        })
    }

    /// Apply persisted preferences. Safe to call once per window.
    pub fn initialize(&self) -> Result<()> {
        if let Some(template) = self.db.get_setting("search_engine")? {
            self.resolver.set_search_engine(template);
        }

        tracing::info!("Shell initialized");
        Ok(())
    }

    // === Session operations ===

    /// Resolve free text and navigate. Empty input is a no-op.
    pub async fn submit_query(&self, input: &str) {
        self.dispatcher.submit(input).await;
    }

    /// Key handler for the search box and the address bar.
    pub async fn handle_key(&self, field: InputField, key: &str, value: &str) {
        self.dispatcher.on_key(field, key, value).await;
    }

    pub fn go_home(&self) {
        self.controller.go_home();
    }

    pub fn back(&self) {
        self.controller.back();
    }

    pub fn forward(&self) {
        self.controller.forward();
    }

    pub fn reload(&self) {
        self.controller.reload();
    }

    pub fn view_state(&self) -> ViewState {
        self.controller.view_state()
    }

    pub fn address_value(&self) -> String {
        self.controller.address_value()
    }

    pub fn capability(&self) -> NavigationCapability {
        self.controller.capability()
    }

    pub fn surface_bridge(&self) -> &SurfaceEventBridge {
        &self.bridge
    }

    // === Settings operations ===

    pub fn search_engine(&self) -> String {
        self.resolver.search_template()
    }

    pub fn set_search_engine(&self, template: String) -> Result<()> {
        self.resolver.set_search_engine(template.clone());
        self.db.set_setting("search_engine", &template)?;
        Ok(())
    }

    pub fn wallpaper(&self) -> Result<Option<String>> {
        Ok(self.wallpaper.get()?)
    }

    pub fn set_wallpaper(&self, wallpaper: &str) -> Result<()> {
        Ok(self.wallpaper.set(wallpaper)?)
    }

    // === Collaborators ===

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
