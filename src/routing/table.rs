//! Route table module
//!
//! An ordered mapping from (method, path pattern) to a handler target,
//! built once at startup and matched in declaration order. HEAD requests
//! match GET entries.

use hyper::Method;

/// Everything a request can be dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Home,
    Services,
    ServiceArea,
    QuoteForm,
    QuoteSubmit,
    ServiceAreaMap,
    DispatchStatus,
    Feedback,
    Health,
    Favicon,
    Assets,
}

/// Path matching rule for a route entry
#[derive(Debug, Clone)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == *exact,
            Self::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// One (method, pattern) → target binding
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub method: Method,
    pub pattern: PathPattern,
    pub target: RouteTarget,
}

/// Result of a table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Found(RouteTarget),
    MethodNotAllowed,
    NotFound,
}

/// Ordered route table
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The site's full routing table
    pub fn site_default() -> Self {
        use PathPattern::{Exact, Prefix};
        use RouteTarget as T;

        let entry = |method: Method, pattern: PathPattern, target: T| RouteEntry {
            method,
            pattern,
            target,
        };

        Self {
            entries: vec![
                entry(Method::GET, Exact("/"), T::Home),
                entry(Method::GET, Exact("/services"), T::Services),
                entry(Method::GET, Exact("/service-area"), T::ServiceArea),
                entry(Method::GET, Exact("/quote"), T::QuoteForm),
                entry(Method::POST, Exact("/quote"), T::QuoteSubmit),
                entry(
                    Method::GET,
                    Exact("/partials/service-area-map"),
                    T::ServiceAreaMap,
                ),
                entry(Method::GET, Exact("/api/dispatch-status"), T::DispatchStatus),
                entry(Method::POST, Exact("/api/feedback"), T::Feedback),
                entry(Method::GET, Exact("/health"), T::Health),
                entry(Method::GET, Exact("/favicon.svg"), T::Favicon),
                entry(Method::GET, Exact("/favicon.ico"), T::Favicon),
                entry(Method::GET, Prefix("/static/"), T::Assets),
            ],
        }
    }

    /// Walk entries in order; first pattern+method hit wins. A pattern hit
    /// with the wrong method reports `MethodNotAllowed` instead of 404.
    pub fn lookup(&self, method: &Method, path: &str) -> RouteMatch {
        let effective = if *method == Method::HEAD {
            &Method::GET
        } else {
            method
        };

        let mut path_matched = false;
        for entry in &self.entries {
            if entry.pattern.matches(path) {
                if entry.method == *effective {
                    return RouteMatch::Found(entry.target);
                }
                path_matched = true;
            }
        }

        if path_matched {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_route_resolves() {
        let table = RouteTable::site_default();
        let cases = [
            ("/", RouteTarget::Home),
            ("/services", RouteTarget::Services),
            ("/service-area", RouteTarget::ServiceArea),
            ("/quote", RouteTarget::QuoteForm),
            ("/partials/service-area-map", RouteTarget::ServiceAreaMap),
            ("/api/dispatch-status", RouteTarget::DispatchStatus),
            ("/health", RouteTarget::Health),
        ];
        for (path, target) in cases {
            assert_eq!(
                table.lookup(&Method::GET, path),
                RouteMatch::Found(target),
                "GET {path}"
            );
        }
    }

    #[test]
    fn test_post_routes() {
        let table = RouteTable::site_default();
        assert_eq!(
            table.lookup(&Method::POST, "/quote"),
            RouteMatch::Found(RouteTarget::QuoteSubmit)
        );
        assert_eq!(
            table.lookup(&Method::POST, "/api/feedback"),
            RouteMatch::Found(RouteTarget::Feedback)
        );
    }

    #[test]
    fn test_head_matches_get_entries() {
        let table = RouteTable::site_default();
        assert_eq!(
            table.lookup(&Method::HEAD, "/"),
            RouteMatch::Found(RouteTarget::Home)
        );
    }

    #[test]
    fn test_method_not_allowed_on_known_path() {
        let table = RouteTable::site_default();
        assert_eq!(
            table.lookup(&Method::POST, "/services"),
            RouteMatch::MethodNotAllowed
        );
        assert_eq!(
            table.lookup(&Method::GET, "/api/feedback"),
            RouteMatch::MethodNotAllowed
        );
    }

    #[test]
    fn test_static_prefix_match() {
        let table = RouteTable::site_default();
        assert_eq!(
            table.lookup(&Method::GET, "/static/css/site.css"),
            RouteMatch::Found(RouteTarget::Assets)
        );
        // The bare mount point is not an asset
        assert_eq!(table.lookup(&Method::GET, "/static"), RouteMatch::NotFound);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let table = RouteTable::site_default();
        assert_eq!(
            table.lookup(&Method::GET, "/nonexistent"),
            RouteMatch::NotFound
        );
        assert_eq!(
            table.lookup(&Method::GET, "/services/"),
            RouteMatch::NotFound
        );
    }
}
