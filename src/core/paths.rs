//! Score-file naming convention and shared path utilities.

use std::env;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::core::config::LayoutConfig;

/// The `(n, p)` pair naming one comparison run.
///
/// `n` is the fullerene vertex count and `p` the anion charge parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    /// Vertex count.
    pub n: u32,
    /// Anion charge parameter.
    pub p: u32,
}

impl ReportContext {
    /// Create a context for `n` vertices and charge parameter `p`.
    #[must_use]
    pub const fn new(n: u32, p: u32) -> Self {
        Self { n, p }
    }

    /// Zero-padded file stem shared by both score files, e.g. `060_02`.
    #[must_use]
    pub fn stem(&self) -> String {
        format!("{:03}_{:02}", self.n, self.p)
    }
}

impl fmt::Display for ReportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} p={}", self.n, self.p)
    }
}

/// Resolved locations of the known and computed score files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePaths {
    /// Known-optimal scores.
    pub known: PathBuf,
    /// Computed scores under evaluation.
    pub computed: PathBuf,
}

impl ScorePaths {
    /// Derive both paths from the run context and the configured layout.
    #[must_use]
    pub fn derive(ctx: ReportContext, layout: &LayoutConfig) -> Self {
        let stem = ctx.stem();
        Self {
            known: layout
                .known_dir
                .join(format!("{stem}_{}", layout.known_suffix)),
            computed: layout
                .computed_dir
                .join(format!("{stem}_{}", layout.computed_suffix)),
        }
    }

    /// Replace individual paths with explicit overrides.
    #[must_use]
    pub fn with_overrides(mut self, known: Option<&Path>, computed: Option<&Path>) -> Self {
        if let Some(path) = known {
            self.known = path.to_path_buf();
        }
        if let Some(path) = computed {
            self.computed = path.to_path_buf();
        }
        self
    }
}

/// Resolve a path to an absolute, normalized path.
///
/// Uses `fs::canonicalize` when the path exists. Otherwise the path is made
/// absolute relative to CWD and `..`/`.` are resolved syntactically.
pub fn resolve_absolute_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    if let Ok(canonical) = std::fs::canonicalize(&absolute) {
        return canonical;
    }

    normalize_syntactic(&absolute)
}

fn normalize_syntactic(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
        }
    }
    components.into_iter().collect()
}
