use std::borrow::Cow;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::warn;

/// `*` must not cross a path separator; `**` is the only way to span segments.
fn compile(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Returns whether `pattern` matches the whole of `path`.
///
/// A malformed pattern matches nothing.
pub fn matches(pattern: &str, path: &str) -> bool {
    match compile(pattern) {
        Ok(glob) => glob.compile_matcher().is_match(&*normalize_path(path)),
        Err(_) => false,
    }
}

/// Converts a path to the forward-slash form patterns are written against.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.strip_prefix("./").unwrap_or(path);
    if trimmed.contains('\\') {
        Cow::Owned(trimmed.replace('\\', "/"))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// A compiled list of glob patterns that matches when any pattern matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            match compile(&pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => warn!(%pattern, error = %err, "malformed glob pattern never matches"),
            }
            kept.push(pattern);
        }

        let set = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "failed to build glob set");
            GlobSet::empty()
        });

        Self {
            patterns: kept,
            set,
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(&*normalize_path(path))
    }

    /// The patterns as written, malformed ones included.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
