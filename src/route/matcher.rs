#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

/// Opaque match descriptor: the portion of the pathname the pattern
/// matched, query and fragment excluded. Used as a gate and as the path
/// component of the original URI, never stored across evaluations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched URL prefix, normalized to a leading `/`.
    pub url: String,
}

/// Decides whether a location matches the guard's declared pattern.
///
/// The guard only needs a yes/no gate plus the matched prefix; declaring
/// routes and anything richer than that stays with the routing library.
/// Implement this to plug in custom matching.
pub trait RouteMatcher {
    /// Match `pathname` against the declared pattern.
    fn match_path(&self, pathname: &str) -> Option<RouteMatch>;
}

/// Segment matcher mirroring the router's static and param segments.
///
/// `/dashboard` matches `/dashboard` and, unless `exact`, any deeper path
/// such as `/dashboard/reports`; the matched URL is the pattern-length
/// prefix. `:name` segments match any single path segment.
#[derive(Clone, Debug)]
pub struct SegmentMatcher {
    segments: Vec<Segment>,
    exact: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

impl SegmentMatcher {
    /// Parse a pattern such as `/board/:id`. An unparseable pattern is
    /// simply one that never matches; validation belongs to the router.
    pub fn new(pattern: &str, exact: bool) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.strip_prefix(':').map_or_else(
                    || Segment::Static(s.to_owned()),
                    |name| Segment::Param(name.to_owned()),
                )
            })
            .collect();
        Self { segments, exact }
    }
}

impl RouteMatcher for SegmentMatcher {
    fn match_path(&self, pathname: &str) -> Option<RouteMatch> {
        let parts: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        if parts.len() < self.segments.len() {
            return None;
        }
        if self.exact && parts.len() != self.segments.len() {
            return None;
        }

        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Static(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(_) => {}
            }
        }

        if self.segments.is_empty() {
            return Some(RouteMatch { url: "/".to_owned() });
        }

        let mut url = String::new();
        for part in &parts[..self.segments.len()] {
            url.push('/');
            url.push_str(part);
        }
        Some(RouteMatch { url })
    }
}
