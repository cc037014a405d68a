//! Catalog — the read-only set of channels and categories.
//!
//! Loaded once at startup (bundled, TOML, JSON or M3U) and shared behind an
//! `Arc`.  Nothing mutates a `Catalog` after construction; preference and
//! selection state refer to channels by id only.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved pseudo-category that matches every channel.
pub const ALL_CATEGORY: &str = "all";

/// Category id used for M3U entries without a `group-title`.
const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate channel id {0:?}")]
    DuplicateChannel(String),
    #[error("duplicate category id {0:?}")]
    DuplicateCategory(String),
    #[error("channel {channel:?} refers to unknown category {category:?}")]
    UnknownCategory { channel: String, category: String },
    #[error("channel {0:?} may not be assigned to the reserved \"all\" category")]
    ReservedCategory(String),
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    channels: Vec<Channel>,
}

impl Catalog {
    /// Build a validated catalog.  The `"all"` category is always present and
    /// always first.
    pub fn new(categories: Vec<Category>, channels: Vec<Channel>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::with_capacity(categories.len() + 1);
        let all = categories
            .iter()
            .find(|c| c.id == ALL_CATEGORY)
            .cloned()
            .unwrap_or_else(|| Category {
                id: ALL_CATEGORY.to_string(),
                name: "All".to_string(),
            });
        seen.insert(all.id.clone());
        ordered.push(all);

        let mut all_seen = false;
        for category in categories {
            if category.id == ALL_CATEGORY {
                if all_seen {
                    return Err(CatalogError::DuplicateCategory(category.id));
                }
                all_seen = true;
                continue;
            }
            if !seen.insert(category.id.clone()) {
                return Err(CatalogError::DuplicateCategory(category.id));
            }
            ordered.push(category);
        }

        let mut channel_ids = HashSet::new();
        for channel in &channels {
            if !channel_ids.insert(channel.id.as_str()) {
                return Err(CatalogError::DuplicateChannel(channel.id.clone()));
            }
            if channel.category == ALL_CATEGORY {
                return Err(CatalogError::ReservedCategory(channel.id.clone()));
            }
            if !seen.contains(&channel.category) {
                return Err(CatalogError::UnknownCategory {
                    channel: channel.id.clone(),
                    category: channel.category.clone(),
                });
            }
        }

        Ok(Self {
            categories: ordered,
            channels,
        })
    }

    /// The dataset bundled with the application.
    pub fn builtin() -> Self {
        let categories = [
            (ALL_CATEGORY, "Todos"),
            ("sports", "Esportes"),
            ("entertainment", "Entretenimento"),
            ("news", "Notícias"),
            ("documentaries", "Documentários"),
        ]
        .into_iter()
        .map(|(id, name)| Category {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let channels = [
            ("espn", "ESPN", "sports", "espn"),
            ("espn2", "ESPN 2", "sports", "espn2"),
            ("sportv", "SporTV", "sports", "sportv"),
            ("sportv2", "SporTV 2", "sports", "sportv2"),
            ("globors", "Globo RS", "entertainment", "globors"),
            ("discovery", "Discovery Channel", "documentaries", "discoverychannel"),
            ("history", "History Channel", "documentaries", "history"),
            ("multishow", "Multishow", "entertainment", "multishow"),
        ]
        .into_iter()
        .map(|(id, name, category, slug)| Channel {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            url: format!("https://embedcanaistv.com/{}/", slug),
        })
        .collect();

        Self {
            categories,
            channels,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains_channel(&self, id: &str) -> bool {
        self.channel(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Load a catalog file, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "toml" => parse_catalog_from_toml_str(&content),
            "json" => parse_catalog_from_json_str(&content),
            "m3u" | "m3u8" => parse_catalog_from_m3u_str(&content),
            other => Err(CatalogError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

// ── TOML / JSON loaders ───────────────────────────────────────────────────────

/// On-disk shape shared by the TOML (`[[category]]`, `[[channel]]`) and JSON
/// (`"categories"`, `"channels"`) formats.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, alias = "category")]
    categories: Vec<Category>,
    #[serde(default, alias = "channel")]
    channels: Vec<Channel>,
}

pub fn parse_catalog_from_toml_str(content: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    Catalog::new(file.categories, file.channels)
}

pub fn parse_catalog_from_json_str(content: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(content)?;
    Catalog::new(file.categories, file.channels)
}

// ── M3U loader ────────────────────────────────────────────────────────────────

/// Parse an extended M3U playlist.  `group-title` becomes the category and
/// `tvg-id` (or a slug of the display name) becomes the channel id; ids that
/// collide get a numeric suffix.
pub fn parse_catalog_from_m3u_str(content: &str) -> Result<Catalog, CatalogError> {
    let mut categories: Vec<Category> = Vec::new();
    let mut channels: Vec<Channel> = Vec::new();
    let mut used_ids: HashSet<String> = HashSet::new();
    let mut pending: Option<(String, Option<String>, Option<String>)> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("#EXTINF:") {
            let name = extinf_name(rest);
            let tvg_id = extinf_attr(rest, "tvg-id");
            let group = extinf_attr(rest, "group-title");
            pending = Some((name, tvg_id, group));
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let url = line.to_string();
        let (name, tvg_id, group) = pending.take().unwrap_or((String::new(), None, None));
        let name = if name.is_empty() { url.clone() } else { name };

        let (category_id, category_name) = match group {
            Some(g) if !slugify(&g).is_empty() && slugify(&g) != ALL_CATEGORY => (slugify(&g), g),
            _ => (UNCATEGORIZED.to_string(), "Uncategorized".to_string()),
        };
        if !categories.iter().any(|c| c.id == category_id) {
            categories.push(Category {
                id: category_id.clone(),
                name: category_name,
            });
        }

        let base = tvg_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| slugify(&name));
        let base = if base.is_empty() {
            "channel".to_string()
        } else {
            base
        };
        let mut id = base.clone();
        let mut n = 2;
        while !used_ids.insert(id.clone()) {
            id = format!("{}-{}", base, n);
            n += 1;
        }

        channels.push(Channel {
            id,
            name,
            category: category_id,
            url,
        });
    }

    Catalog::new(categories, channels)
}

/// Display name of an `#EXTINF` line: everything after the first comma that
/// sits outside a quoted attribute value.
fn extinf_name(line: &str) -> String {
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => return line[i + 1..].trim().to_string(),
            _ => {}
        }
    }
    String::new()
}

/// Extract `key="value"` from an `#EXTINF` line.
fn extinf_attr(line: &str, key: &str) -> Option<String> {
    let needle = format!("{}=\"", key);
    let start = line.find(&needle)? + needle.len();
    let end = line[start..].find('"')?;
    Some(line[start..start + end].trim().to_string())
}

fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut dash = false;
    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
