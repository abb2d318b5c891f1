use regex::Regex;
use std::path::{Component, Path};
use std::sync::OnceLock;

fn segment_re() -> &'static Regex {
    static SEGMENT_RE: OnceLock<Regex> = OnceLock::new();
    SEGMENT_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"))
}

/// True when `segment` can be used as a single directory name.
///
/// The leading alphanumeric already rules out `.`, `..` and hidden names.
pub fn is_safe_segment(segment: &str) -> bool {
    segment_re().is_match(segment)
}

/// True when `rel` is a non-empty relative path that stays below its base.
///
/// `..`, root and drive-prefix components are rejected outright, even when a
/// later component would bring the path back inside.
pub fn is_contained(rel: &str) -> bool {
    if rel.trim().is_empty() {
        return false;
    }

    let mut normal = 0usize;
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    normal > 0
}
