//! Declarative asset-bundle descriptors.
//!
//! Widgets rely on client-side scripts and styles that the host publishes.
//! Bundles only *declare* those files and their dependencies; publishing and
//! serving them is host responsibility.
use serde::Serialize;

/// A bundle of client-side asset files published by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetBundle {
    /// Stable bundle name referenced by `depends`
    pub name: &'static str,
    /// Directory the bundle's files are published from
    pub source_path: &'static str,
    /// CSS files, relative to `source_path`
    pub css: &'static [&'static str],
    /// JS files, relative to `source_path`
    pub js: &'static [&'static str],
    /// Names of bundles that must be registered before this one
    pub depends: &'static [&'static str],
}

impl AssetBundle {
    /// Whether this bundle declares a dependency on `name`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.depends.contains(&name)
    }
}

/// Shared base bundle imported before any widget renders.
pub static WIDGET_BUNDLE: AssetBundle = AssetBundle {
    name: "widget",
    source_path: "assets",
    css: &[],
    js: &[],
    depends: &[],
};

/// Tile drag-and-drop behavior script.
pub static TILE_DRAG_BUNDLE: AssetBundle = AssetBundle {
    name: "tile-drag",
    source_path: "assets",
    css: &[],
    js: &["js/tile-drag.js"],
    depends: &["widget"],
};
