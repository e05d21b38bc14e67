use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use usvg::fontdb;

use crate::foundation::error::ShopResult;

/// Where the overlay font comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOpts {
    /// Explicit font file. Takes precedence over the system lookup when it loads.
    pub path: Option<PathBuf>,
    /// Preferred system family; falls back to the generic sans-serif family.
    pub family: Option<String>,
    pub bold: bool,
}

impl Default for FontOpts {
    fn default() -> Self {
        Self {
            path: None,
            family: None,
            bold: true,
        }
    }
}

/// Raw font file bytes plus the face index inside the file.
#[derive(Clone)]
pub struct LoadedFont {
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
    label: String,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("label", &self.label)
            .field("index", &self.index)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl LoadedFont {
    pub fn from_bytes(bytes: Vec<u8>, index: u32, label: impl Into<String>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            index,
            label: label.into(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> ShopResult<Self> {
        let path = path.into();
        let bytes =
            std::fs::read(&path).with_context(|| format!("read font '{}'", path.display()))?;
        Ok(Self::from_bytes(bytes, 0, path.display().to_string()))
    }

    /// Human-readable origin (file path or family name), for logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolve the overlay font, trying the explicit path first and then the system database.
    ///
    /// Returns `None` when nothing usable exists; previews then render without text.
    pub fn resolve(opts: &FontOpts) -> Option<Self> {
        if let Some(path) = &opts.path {
            match Self::from_path(path) {
                Ok(font) => return Some(font),
                Err(e) => tracing::warn!(error = %e, "configured font unavailable, using system font"),
            }
        }

        let font = Self::from_system(opts);
        match &font {
            Some(f) => tracing::info!(font = %f.label, "resolved overlay font"),
            None => tracing::warn!("no system font found; overlay text will not be drawn"),
        }
        font
    }

    fn from_system(opts: &FontOpts) -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");
        Self::from_database(&db, opts)
    }

    /// Pick the overlay face from `db`.
    ///
    /// The generic sans-serif family is resolved through fontdb's built-in name table, which
    /// often names a family the host does not have. When the query misses, any installed
    /// sans face is used instead, then any face at all.
    pub(crate) fn from_database(db: &fontdb::Database, opts: &FontOpts) -> Option<Self> {
        let mut families = Vec::with_capacity(2);
        if let Some(name) = opts.family.as_deref() {
            families.push(fontdb::Family::Name(name));
        }
        families.push(fontdb::Family::SansSerif);

        let weight = if opts.bold {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        };
        let query = fontdb::Query {
            families: &families,
            weight,
            ..Default::default()
        };
        let id = db.query(&query).or_else(|| {
            let id = fallback_face(db, weight)?;
            tracing::debug!(?id, "sans-serif query missed; using installed fallback face");
            Some(id)
        })?;

        let label = db
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| "system".to_owned());
        db.with_face_data(id, |data, index| Self::from_bytes(data.to_vec(), index, label))
    }
}

fn fallback_face(db: &fontdb::Database, weight: fontdb::Weight) -> Option<fontdb::ID> {
    let is_sans = |face: &&fontdb::FaceInfo| {
        !face.monospaced
            && face
                .families
                .iter()
                .any(|(name, _)| name.contains("Sans") && !name.contains("Mono"))
    };
    db.faces()
        .filter(is_sans)
        .find(|face| face.weight == weight && face.style == fontdb::Style::Normal)
        .or_else(|| db.faces().find(is_sans))
        .or_else(|| db.faces().next())
        .map(|face| face.id)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
