use super::*;

fn matcher(pattern: &str) -> SegmentMatcher {
    SegmentMatcher::new(pattern, false)
}

fn exact(pattern: &str) -> SegmentMatcher {
    SegmentMatcher::new(pattern, true)
}

// =============================================================
// Static segments
// =============================================================

#[test]
fn static_pattern_matches_itself() {
    let m = matcher("/dashboard").match_path("/dashboard").expect("match");
    assert_eq!(m.url, "/dashboard");
}

#[test]
fn static_pattern_matches_deeper_paths_as_prefix() {
    let m = matcher("/dashboard")
        .match_path("/dashboard/reports/2026")
        .expect("match");
    assert_eq!(m.url, "/dashboard");
}

#[test]
fn different_static_segment_does_not_match() {
    assert!(matcher("/dashboard").match_path("/settings").is_none());
}

#[test]
fn shorter_path_does_not_match() {
    assert!(matcher("/board/archive").match_path("/board").is_none());
}

// =============================================================
// Param segments
// =============================================================

#[test]
fn param_segment_matches_any_value() {
    let m = matcher("/board/:id").match_path("/board/b-42").expect("match");
    assert_eq!(m.url, "/board/b-42");
}

#[test]
fn param_segment_still_requires_static_prefix() {
    assert!(matcher("/board/:id").match_path("/user/b-42").is_none());
}

// =============================================================
// Exact matching
// =============================================================

#[test]
fn exact_pattern_rejects_deeper_paths() {
    assert!(exact("/dashboard").match_path("/dashboard/reports").is_none());
}

#[test]
fn exact_pattern_matches_identical_path() {
    let m = exact("/dashboard").match_path("/dashboard").expect("match");
    assert_eq!(m.url, "/dashboard");
}

// =============================================================
// Root and trailing slashes
// =============================================================

#[test]
fn root_pattern_matches_everything_as_prefix() {
    let m = matcher("/").match_path("/anything/here").expect("match");
    assert_eq!(m.url, "/");
}

#[test]
fn exact_root_only_matches_root() {
    assert!(exact("/").match_path("/").is_some());
    assert!(exact("/").match_path("/dashboard").is_none());
}

#[test]
fn trailing_slash_in_location_is_ignored() {
    let m = matcher("/dashboard").match_path("/dashboard/").expect("match");
    assert_eq!(m.url, "/dashboard");
}
