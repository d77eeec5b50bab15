//! Remote project directory with a process-lifetime cache.
//!
//! The directory endpoint returns a columnar table:
//!
//! ```text
//! { "types": ["owner_project", "display_name", ...], "data": [["uniswap", "Uniswap", ...], ...] }
//! ```
//!
//! Some deployments wrap the table in a top-level `data` object; both shapes are
//! accepted. Rows are projected through the `types` list to obtain named fields.
//!
//! [`ProjectDirectory`] fetches at most once per refresh window. Concurrent
//! callers block on the same in-flight fetch. A failed fetch is cached as an
//! empty directory so validation degrades to "no match" instead of failing.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use oli_model::ProjectRecord;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::StandardsError;

/// Public project directory endpoint.
pub const DEFAULT_PROJECTS_URL: &str = "https://api.growthepie.xyz/v1/labels/projects.json";

/// Environment variable overriding [`DEFAULT_PROJECTS_URL`] for [`ProjectDirectory::global`].
pub const PROJECTS_URL_ENV: &str = "OLI_PROJECTS_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of project records.
pub trait ProjectSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<ProjectRecord>, StandardsError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Fetches the directory over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    url: String,
    timeout: Duration,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProjectSource for HttpProjectSource {
    fn fetch(&self) -> Result<Vec<ProjectRecord>, StandardsError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(StandardsError::Client)?;

        let response = client
            .get(&self.url)
            .header(USER_AGENT, format!("oli-import/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| StandardsError::network(&self.url, source))?;

        if !response.status().is_success() {
            return Err(StandardsError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| StandardsError::network(&self.url, source))?;
        decode_projects(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Serves a fixed list, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectSource {
    projects: Vec<ProjectRecord>,
}

impl StaticProjectSource {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }
}

impl ProjectSource for StaticProjectSource {
    fn fetch(&self) -> Result<Vec<ProjectRecord>, StandardsError> {
        Ok(self.projects.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} projects)", self.projects.len())
    }
}

#[derive(Debug, Deserialize)]
struct ColumnarTable {
    types: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Decodes the columnar directory payload into project records.
pub fn decode_projects(body: &str) -> Result<Vec<ProjectRecord>, StandardsError> {
    let value: Value = serde_json::from_str(body)?;
    let value = match value {
        Value::Object(mut map)
            if !map.contains_key("types")
                && map.get("data").is_some_and(|inner| inner.get("types").is_some()) =>
        {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    let table: ColumnarTable = serde_json::from_value(value)?;
    project_rows(&table)
}

fn project_rows(table: &ColumnarTable) -> Result<Vec<ProjectRecord>, StandardsError> {
    let position = |name: &str| table.types.iter().position(|column| column == name);
    let owner_idx = position("owner_project").ok_or_else(|| StandardsError::MissingColumn {
        column: "owner_project".to_string(),
    })?;
    let display_idx = position("display_name");
    let website_idx = position("website");
    let github_idx = position("main_github");

    let cell = |row: &[Value], idx: Option<usize>| -> Option<String> {
        let value = row.get(idx?)?;
        let text = match value {
            Value::Null => return None,
            Value::String(text) => text.trim().to_string(),
            other => other.to_string(),
        };
        (!text.is_empty()).then_some(text)
    };

    Ok(table
        .data
        .iter()
        .filter_map(|row| {
            let owner_project = cell(row, Some(owner_idx))?;
            Some(ProjectRecord {
                owner_project,
                display_name: cell(row, display_idx),
                website: cell(row, website_idx),
                main_github: cell(row, github_idx),
            })
        })
        .collect())
}

/// When a cached directory is considered stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Fetch once for the lifetime of the handle.
    #[default]
    Forever,
    /// Refetch on the first request after the duration elapsed.
    Ttl(Duration),
}

struct CachedDirectory {
    projects: Arc<Vec<ProjectRecord>>,
    fetched_at: Instant,
    error: Option<String>,
}

/// Cache handle around a [`ProjectSource`].
pub struct ProjectDirectory {
    source: Box<dyn ProjectSource>,
    policy: CachePolicy,
    cache: Mutex<Option<CachedDirectory>>,
}

impl ProjectDirectory {
    pub fn new(source: impl ProjectSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            policy: CachePolicy::default(),
            cache: Mutex::new(None),
        }
    }

    /// Directory over the public HTTP endpoint.
    pub fn http(url: impl Into<String>) -> Self {
        Self::new(HttpProjectSource::new(url))
    }

    /// Directory that never touches the network.
    pub fn offline(projects: Vec<ProjectRecord>) -> Self {
        Self::new(StaticProjectSource::new(projects))
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Process-wide directory, fetched from `OLI_PROJECTS_URL` or the default endpoint.
    pub fn global() -> &'static ProjectDirectory {
        static GLOBAL: OnceLock<ProjectDirectory> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let url = std::env::var(PROJECTS_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECTS_URL.to_string());
            ProjectDirectory::http(url)
        })
    }

    /// Returns the cached projects, fetching on first use or when stale.
    ///
    /// The cache lock is held across the fetch, so concurrent callers wait for
    /// the in-flight request instead of issuing their own.
    pub fn projects(&self) -> Arc<Vec<ProjectRecord>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.as_ref()
            && !self.is_stale(cached)
        {
            debug!(
                age = ?cached.fetched_at.elapsed(),
                "Using cached project directory"
            );
            return Arc::clone(&cached.projects);
        }

        let source = self.source.describe();
        debug!(source = %source, "Fetching project directory");
        let fetched = match self.source.fetch() {
            Ok(projects) => {
                info!(source = %source, count = projects.len(), "Loaded project directory");
                CachedDirectory {
                    projects: Arc::new(projects),
                    fetched_at: Instant::now(),
                    error: None,
                }
            }
            Err(error) => {
                warn!(source = %source, %error, "Project directory unavailable, continuing without it");
                CachedDirectory {
                    projects: Arc::new(Vec::new()),
                    fetched_at: Instant::now(),
                    error: Some(error.to_string()),
                }
            }
        };
        let projects = Arc::clone(&fetched.projects);
        *cache = Some(fetched);
        projects
    }

    /// Error message of the cached fetch, if it failed.
    pub fn last_error(&self) -> Option<String> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|cached| cached.error.clone())
    }

    /// Drops the cached directory; the next request refetches.
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn is_stale(&self, cached: &CachedDirectory) -> bool {
        match self.policy {
            CachePolicy::Forever => false,
            CachePolicy::Ttl(ttl) => cached.fetched_at.elapsed() >= ttl,
        }
    }
}

impl std::fmt::Debug for ProjectDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectDirectory")
            .field("source", &self.source.describe())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flat_table() {
        let body = r#"{
            "types": ["owner_project", "display_name", "description", "main_github", "website"],
            "data": [
                ["uniswap", "Uniswap", "AMM", "https://github.com/Uniswap", "https://uniswap.org"],
                ["aave", "Aave", null, null, "https://aave.com"],
                [null, "Nameless", null, null, null]
            ]
        }"#;
        let projects = decode_projects(body).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].owner_project, "uniswap");
        assert_eq!(projects[0].main_github.as_deref(), Some("https://github.com/Uniswap"));
        assert_eq!(projects[1].display_name.as_deref(), Some("Aave"));
        assert!(projects[1].main_github.is_none());
    }

    #[test]
    fn decodes_wrapped_table() {
        let body = r#"{"data": {"types": ["display_name", "owner_project"], "data": [["Lido", "lido"]]}}"#;
        let projects = decode_projects(body).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].owner_project, "lido");
        assert_eq!(projects[0].display_name.as_deref(), Some("Lido"));
    }

    #[test]
    fn missing_owner_column_is_an_error() {
        let body = r#"{"types": ["display_name"], "data": [["Lido"]]}"#;
        let error = decode_projects(body).unwrap_err();
        assert!(matches!(error, StandardsError::MissingColumn { .. }));
    }
}
