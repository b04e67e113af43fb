//! Route constants store loading and lookup.
//!
//! The store is built once from a JSON table keyed by route code and is
//! read-only afterwards. Callers hand it to the calculator explicitly; there
//! is no process-wide table.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::code::normalize_route_code;
use super::constants::RouteConstants;

/// Route constants table shipped with the crate.
const BUILTIN_ROUTE_CONSTANTS: &str = include_str!("../../data/route_constants.json");

/// Minimum Jaro-Winkler similarity for a route code to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-route error.
const MAX_SUGGESTIONS: usize = 3;

/// Immutable, route-keyed table of [`RouteConstants`].
#[derive(Debug, Clone, Default)]
pub struct RouteConstantsStore {
    routes: HashMap<String, RouteConstants>,
    source: Option<PathBuf>,
}

impl RouteConstantsStore {
    /// Parse the table bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_ROUTE_CONSTANTS.as_bytes())
    }

    /// Load a store from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut store = Self::from_reader(file)?;
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Load a store from a reader yielding a JSON object keyed by route code.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table: BTreeMap<String, RouteConstants> = serde_json::from_reader(reader)?;

        Self::from_routes(table.into_iter().map(|(code, mut route)| {
            route.code = code;
            route
        }))
    }

    /// Build a store from already-constructed entries.
    ///
    /// Each entry's code is normalized and the entry validated. Two entries
    /// that normalize to the same code are rejected.
    pub fn from_routes<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = RouteConstants>,
    {
        let mut table = HashMap::new();

        for mut route in routes {
            route.code = normalize_route_code(&route.code);
            route.validate()?;

            for activity in route.unrecognized_port_activities() {
                warn!(
                    route = %route.code,
                    activity = activity.label(),
                    "port fuel grade is neither IFO nor LSMGO; that activity burns no fuel"
                );
            }

            if table.contains_key(&route.code) {
                return Err(Error::DuplicateRoute { code: route.code });
            }
            table.insert(route.code.clone(), route);
        }

        debug!(routes = table.len(), "loaded route constants");

        Ok(Self {
            routes: table,
            source: None,
        })
    }

    /// Look up a route, failing with [`Error::UnknownRoute`] when absent.
    pub fn lookup(&self, code: &str) -> Result<&RouteConstants> {
        self.get(code).ok_or_else(|| Error::UnknownRoute {
            code: normalize_route_code(code),
            suggestions: self.fuzzy_route_matches(code, MAX_SUGGESTIONS),
        })
    }

    /// Get a route by code (case- and separator-insensitive).
    pub fn get(&self, code: &str) -> Option<&RouteConstants> {
        self.routes.get(&normalize_route_code(code))
    }

    /// Route codes similar to `code`, best match first.
    pub fn fuzzy_route_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let wanted = normalize_route_code(code);
        let mut scored: Vec<(f64, &String)> = self
            .routes
            .keys()
            .map(|candidate| (strsim::jaro_winkler(&wanted, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// Get a sorted list of all canonical route codes.
    pub fn route_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.routes.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Get all routes sorted by code.
    pub fn routes_sorted(&self) -> Vec<&RouteConstants> {
        let mut routes: Vec<&RouteConstants> = self.routes.values().collect();
        routes.sort_by(|a, b| a.code.cmp(&b.code));
        routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Get the source path if the store was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Route constants table bundled with the crate, keyed by canonical code.
pub fn get_route_constants() -> Result<RouteConstantsStore> {
    RouteConstantsStore::builtin()
}
