//! Gate configuration.
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. Built-in defaults from `GateConfig::default()`
//! 2. A TOML file, if one is given and exists
//! 3. Environment variables prefixed `SHOWCASE_` (`__` separates nested keys)

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    gate::AccessGate,
    identity::HeaderIdentity,
    route::{
        MatchMode, RouteCategory, RouteTable, DEFAULT_PUBLIC_API_ROUTES, DEFAULT_PUBLIC_ROUTES,
    },
    web::BoundaryFilter,
};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SHOWCASE_";

/// Settings for route classification, redirects, the HTTP boundary and
/// notification display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Pages reachable without a session
    pub public_routes: Vec<String>,
    /// API endpoints reachable without a session
    pub public_api_routes: Vec<String>,
    /// How allow-list entries match paths
    pub match_mode: MatchMode,
    /// Prefix of the API namespace
    pub api_prefix: String,
    /// Where signed-in users are sent from public pages
    pub landing_path: String,
    /// Where anonymous users are sent from protected routes
    pub sign_in_path: String,
    /// Path prefixes that never reach the gate
    pub internal_prefixes: Vec<String>,
    /// Path prefixes that always reach the gate
    pub always_intercept_prefixes: Vec<String>,
    /// Header carrying the signed-in user id
    pub session_header: String,
    /// How long the head notification stays visible
    pub notification_ttl_ms: u64,
    /// Socket address the server binds
    pub listen_addr: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_routes: DEFAULT_PUBLIC_ROUTES.iter().map(|s| s.to_string()).collect(),
            public_api_routes: DEFAULT_PUBLIC_API_ROUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            match_mode: MatchMode::Exact,
            api_prefix: "/api/".to_string(),
            landing_path: "/home".to_string(),
            sign_in_path: "/signin".to_string(),
            internal_prefixes: vec!["/_next".to_string()],
            always_intercept_prefixes: vec!["/api".to_string(), "/trpc".to_string()],
            session_header: "x-user-id".to_string(),
            notification_ttl_ms: 3000,
            listen_addr: "127.0.0.1:3000".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl GateConfig {
    /// Loads and validates configuration from defaults, `path` and the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: GateConfig = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the merged provider stack without extracting it.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(GateConfig::default()));

        if let Some(path) = path {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                figment = figment.merge(Toml::file(path));
            } else {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks values that would make the gate misbehave.
    ///
    /// The landing and sign-in pages must both be public: a protected
    /// sign-in page redirects anonymous users to itself, and a non-public
    /// landing page is never exempted from rule 1.
    pub fn validate(&self) -> Result<()> {
        let paths = self
            .public_routes
            .iter()
            .chain(&self.public_api_routes)
            .chain(&self.internal_prefixes)
            .chain(&self.always_intercept_prefixes)
            .chain([&self.api_prefix, &self.landing_path, &self.sign_in_path]);
        for path in paths {
            if !path.starts_with('/') {
                return Err(Error::config(format!("path '{}' must start with '/'", path)));
            }
        }

        let routes = self.route_table();
        if routes.classify(&self.landing_path) != RouteCategory::Public {
            return Err(Error::config(format!(
                "landing path '{}' must be a public route",
                self.landing_path
            )));
        }
        if routes.classify(&self.sign_in_path) != RouteCategory::Public {
            return Err(Error::config(format!(
                "sign-in path '{}' must be a public route",
                self.sign_in_path
            )));
        }

        if self.session_header.trim().is_empty() {
            return Err(Error::config("session_header must not be empty"));
        }
        if self.notification_ttl_ms == 0 {
            return Err(Error::config("notification_ttl_ms must be greater than zero"));
        }

        Ok(())
    }

    /// Builds the route table.
    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(
            self.public_routes.iter().cloned(),
            self.public_api_routes.iter().cloned(),
            self.match_mode,
        )
    }

    /// Builds the access gate.
    pub fn gate(&self) -> AccessGate {
        AccessGate::new(self.route_table())
            .with_landing_path(&self.landing_path)
            .with_sign_in_path(&self.sign_in_path)
            .with_api_prefix(&self.api_prefix)
    }

    /// Builds the boundary filter.
    pub fn boundary_filter(&self) -> BoundaryFilter {
        BoundaryFilter::new(
            self.internal_prefixes.iter().cloned(),
            self.always_intercept_prefixes.iter().cloned(),
        )
    }

    /// Builds the header-based identity provider.
    pub fn identity(&self) -> HeaderIdentity {
        HeaderIdentity::new(&self.session_header)
    }

    /// Returns the notification display time.
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Default config file location: `showcase.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("showcase.toml")
    }
}
