//! Route table and session history
//!
//! The table is an ordered list of `(pattern, target)` pairs evaluated
//! first-match-wins. A redirect is its own target variant, so matching
//! never has to special-case it. The router keeps a browser-like history
//! on top of the table; a redirect rewrites the entry being navigated to
//! rather than stacking a second one.

use crate::pages::PageId;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Upper bound on chained redirects followed for a single navigation
pub const MAX_REDIRECTS: usize = 8;

/// What a matched pattern leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Page(PageId),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub target: RouteTarget,
}

impl Route {
    pub const fn page(pattern: &'static str, page: PageId) -> Self {
        Self {
            pattern,
            target: RouteTarget::Page(page),
        }
    }

    pub const fn redirect(pattern: &'static str, to: &'static str) -> Self {
        Self {
            pattern,
            target: RouteTarget::Redirect(to),
        }
    }
}

/// Single-step lookup result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Page(PageId),
    Redirect(&'static str),
    NotFound,
}

/// What the shell ends up drawing for a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Page(PageId),
    NotFound(String),
}

/// A path after all redirects have been followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub path: String,
    pub view: View,
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate, relative or non-canonical
    /// patterns and redirects that loop or lead nowhere. Patterns are
    /// matched verbatim against normalized paths, so they must already be
    /// in normalized form.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.pattern.starts_with('/') {
                bail!("Route pattern {:?} must start with '/'", route.pattern);
            }
            if normalize_path(route.pattern) != route.pattern {
                bail!(
                    "Route pattern {:?} is not canonical (expected {:?})",
                    route.pattern,
                    normalize_path(route.pattern)
                );
            }
            if !seen.insert(route.pattern) {
                bail!("Duplicate route pattern {:?}", route.pattern);
            }
        }

        let table = Self { routes };
        for route in &table.routes {
            if let RouteTarget::Redirect(to) = route.target {
                table.check_redirect(route.pattern, to)?;
            }
        }
        Ok(table)
    }

    /// The client's navigation surface: `/` forwards to the live page
    pub fn standard() -> Result<Self> {
        Self::new(vec![
            Route::redirect("/", PageId::Live.path()),
            Route::page(PageId::Live.path(), PageId::Live),
            Route::page(PageId::Replay.path(), PageId::Replay),
            Route::page(PageId::DriverAnalytics.path(), PageId::DriverAnalytics),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// One lookup step, no redirect following
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|route| route.pattern == path)
            .map(|route| match route.target {
                RouteTarget::Page(page) => Resolution::Page(page),
                RouteTarget::Redirect(to) => Resolution::Redirect(to),
            })
            .unwrap_or(Resolution::NotFound)
    }

    /// Follow redirects until a page or an unmatched path is reached
    pub fn settle(&self, path: &str) -> Settled {
        let requested = normalize_path(path);
        let mut current = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Page(page) => {
                    let redirected_from = (current != requested).then(|| requested.clone());
                    return Settled {
                        path: current,
                        view: View::Page(page),
                        redirected_from,
                    };
                }
                Resolution::Redirect(to) => current = normalize_path(to),
                Resolution::NotFound => break,
            }
        }

        // Validated tables only get here for paths that match nothing
        Settled {
            view: View::NotFound(requested.clone()),
            path: requested,
            redirected_from: None,
        }
    }

    fn check_redirect(&self, from: &str, to: &str) -> Result<()> {
        let mut current = normalize_path(to);
        for _ in 0..MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Page(_) => return Ok(()),
                Resolution::Redirect(next) => current = normalize_path(next),
                Resolution::NotFound => {
                    bail!("Redirect from {:?} leads to unknown path {:?}", from, current)
                }
            }
        }
        bail!("Redirect from {:?} does not settle on a page (loop?)", from)
    }
}

/// Canonical form of a path: leading slash, no query or fragment, no
/// repeated or trailing slashes.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let segments: Vec<&str> = path[..end].split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Already there, history untouched
    Unchanged,
    Moved { redirected_from: Option<String> },
}

#[derive(Debug, Clone)]
struct Entry {
    path: String,
    view: View,
}

/// Route table plus session history
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    entries: Vec<Entry>,
    cursor: usize,
    limit: usize,
}

impl Router {
    pub fn new(table: RouteTable, initial_path: &str, limit: usize) -> Self {
        let settled = table.settle(initial_path);
        log_settled(&settled);
        Self {
            table,
            entries: vec![Entry {
                path: settled.path,
                view: settled.view,
            }],
            cursor: 0,
            limit: limit.max(1),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current_path(&self) -> &str {
        &self.entries[self.cursor].path
    }

    pub fn current_view(&self) -> &View {
        &self.entries[self.cursor].view
    }

    pub fn current_page(&self) -> Option<PageId> {
        match self.current_view() {
            View::Page(page) => Some(*page),
            View::NotFound(_) => None,
        }
    }

    /// Push a new location, dropping any forward history
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let settled = self.table.settle(path);
        if settled.path == self.current_path() {
            return Navigation::Unchanged;
        }
        log_settled(&settled);

        self.entries.truncate(self.cursor + 1);
        self.entries.push(Entry {
            path: settled.path,
            view: settled.view,
        });
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;

        Navigation::Moved {
            redirected_from: settled.redirected_from,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        log::debug!("History back to {}", self.current_path());
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        log::debug!("History forward to {}", self.current_path());
        true
    }

    /// 1-based position of the current entry
    pub fn history_position(&self) -> usize {
        self.cursor + 1
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

fn log_settled(settled: &Settled) {
    if let Some(from) = &settled.redirected_from {
        log::info!("Redirect {} -> {}", from, settled.path);
    }
    match &settled.view {
        View::Page(page) => log::info!("Navigated to {} ({})", settled.path, page.label()),
        View::NotFound(path) => log::warn!("No route matches {}", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(path: &str) -> Router {
        Router::new(RouteTable::standard().unwrap(), path, 64)
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("live"), "/live");
        assert_eq!(normalize_path("/live/"), "/live");
        assert_eq!(normalize_path("//replay//"), "/replay");
        assert_eq!(normalize_path(" /live?lap=3#top "), "/live");
        assert_eq!(normalize_path("/?x=1"), "/");
    }

    #[test]
    fn test_supported_paths_render_their_page() {
        for page in PageId::ALL {
            let r = router(page.path());
            assert_eq!(r.current_view(), &View::Page(page));
            assert_eq!(r.current_path(), page.path());
        }
    }

    #[test]
    fn test_root_redirects_to_live() {
        let r = router("/");
        assert_eq!(r.current_path(), "/live");
        assert_eq!(r.current_page(), Some(PageId::Live));
        // The redirect replaced the entry instead of stacking one
        assert_eq!(r.history_len(), 1);
        assert!(!r.can_go_back());
    }

    #[test]
    fn test_redirect_from_live_is_noop() {
        let mut r = router("/live");
        assert_eq!(r.navigate("/"), Navigation::Unchanged);
        assert_eq!(r.current_path(), "/live");
        assert_eq!(r.history_len(), 1);
    }

    #[test]
    fn test_navigate_reports_redirect() {
        let mut r = router("/replay");
        let nav = r.navigate("/");
        assert_eq!(
            nav,
            Navigation::Moved {
                redirected_from: Some("/".to_string())
            }
        );
        assert_eq!(r.current_path(), "/live");
    }

    #[test]
    fn test_driver_analytics_has_no_redirect() {
        let table = RouteTable::standard().unwrap();
        let settled = table.settle("/driver-analytics");
        assert_eq!(settled.redirected_from, None);
        assert_eq!(settled.view, View::Page(PageId::DriverAnalytics));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let r = router("/unknown");
        assert_eq!(r.current_path(), "/unknown");
        assert_eq!(r.current_view(), &View::NotFound("/unknown".to_string()));
        assert_eq!(r.current_page(), None);
    }

    #[test]
    fn test_resolve_is_single_step() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.resolve("/"), Resolution::Redirect("/live"));
        assert_eq!(table.resolve("/replay"), Resolution::Page(PageId::Replay));
        assert_eq!(table.resolve("/live/extra"), Resolution::NotFound);
    }

    #[test]
    fn test_first_match_wins_order() {
        let table = RouteTable::standard().unwrap();
        let patterns: Vec<&str> = table.routes().iter().map(|r| r.pattern).collect();
        assert_eq!(patterns, vec!["/", "/live", "/replay", "/driver-analytics"]);
    }

    #[test]
    fn test_back_and_forward() {
        let mut r = router("/live");
        r.navigate("/replay");
        r.navigate("/driver-analytics");
        assert!(r.back());
        assert_eq!(r.current_path(), "/replay");
        assert!(r.back());
        assert_eq!(r.current_path(), "/live");
        assert!(!r.back());
        assert!(r.forward());
        assert_eq!(r.current_path(), "/replay");

        // New navigation drops forward entries
        r.navigate("/nowhere");
        assert!(!r.can_go_forward());
        assert_eq!(r.history_len(), 3);
    }

    #[test]
    fn test_history_limit() {
        let mut r = Router::new(RouteTable::standard().unwrap(), "/live", 2);
        r.navigate("/replay");
        r.navigate("/driver-analytics");
        assert_eq!(r.history_len(), 2);
        assert!(r.back());
        assert_eq!(r.current_path(), "/replay");
        assert!(!r.back());
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let err = RouteTable::new(vec![
            Route::page("/live", PageId::Live),
            Route::page("/live", PageId::Replay),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_non_canonical_pattern_rejected() {
        for pattern in ["/live/", "/live?x", "//live", "/live#lap"] {
            let err = RouteTable::new(vec![Route::page(pattern, PageId::Live)]).unwrap_err();
            assert!(err.to_string().contains("not canonical"), "{}", pattern);
        }
    }

    #[test]
    fn test_redirect_target_is_normalized() {
        let table = RouteTable::new(vec![
            Route::redirect("/", "/live/"),
            Route::page("/live", PageId::Live),
        ])
        .unwrap();
        assert_eq!(table.resolve("/live/"), Resolution::Page(PageId::Live));
        assert_eq!(table.settle("/").path, "/live");
    }

    #[test]
    fn test_relative_pattern_rejected() {
        assert!(RouteTable::new(vec![Route::page("live", PageId::Live)]).is_err());
    }

    #[test]
    fn test_redirect_loop_rejected() {
        let err = RouteTable::new(vec![
            Route::redirect("/a", "/b"),
            Route::redirect("/b", "/a"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("loop"));
    }

    #[test]
    fn test_dangling_redirect_rejected() {
        assert!(RouteTable::new(vec![Route::redirect("/", "/missing")]).is_err());
    }

    #[test]
    fn test_chained_redirects_settle() {
        let table = RouteTable::new(vec![
            Route::redirect("/", "/home"),
            Route::redirect("/home", "/live"),
            Route::page("/live", PageId::Live),
        ])
        .unwrap();
        let settled = table.settle("/");
        assert_eq!(settled.path, "/live");
        assert_eq!(settled.redirected_from.as_deref(), Some("/"));
    }
}
