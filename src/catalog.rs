//! Emotion catalog: the flat list of labels candles are tagged with.
//!
//! The taxonomy file is a three-level JSON document,
//! `category -> subcategory -> [leaf, ...]`. Only the leaves are kept, in
//! document order. When the file is absent the built-in list is used instead.

use anyhow::{Context, Result, bail};
use rand::Rng;
use serde_json::{Map, Value};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Default location of the taxonomy, relative to the web app's root.
pub const DEFAULT_PATH: &str = "src/lib/emotions.json";

#[rustfmt::skip]
const FALLBACK: &[&str] = &[
    "inspired", "hopeful", "intimate", "sensitive", "thankful", "loving",
    "creative", "courageous", "valued", "respected", "confident", "successful",
    "inquisitive", "curious", "joyful", "free", "cheeky", "aroused",
    "energetic", "eager", "awe", "astonished", "perplexed", "disillusioned",
    "dismayed", "shocked", "unfocused", "sleepy", "overwhelmed", "worried",
    "rushed", "pressured", "apathetic", "indifferent", "helpless", "frightened",
    "inadequate", "inferior", "worthless", "insignificant", "excluded", "persecuted",
    "nervous", "exposed", "betrayed", "resentful", "disrespected", "ridiculed",
    "indignant", "violated", "furious", "jealous", "provoked", "hostile",
    "infuriated", "annoyed", "withdrawn", "numb", "skeptical", "dismissive",
    "judgemental", "embarrassed", "appalled", "revolted", "nauseated", "detestable",
    "horrified", "hesitant", "disappointed", "remorseful", "ashamed", "inferior",
    "empty", "powerless", "grief", "fragile", "victimized", "abandoned", "isolated",
];

/// Where a catalog's labels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Fallback,
}

/// Immutable, non-empty list of leaf emotion labels.
#[derive(Debug, Clone)]
pub struct Catalog {
    emotions: Vec<String>,
    source: Source,
}

impl Catalog {
    /// Load the taxonomy at `path`, falling back to the built-in list if the
    /// file does not exist. Any other failure is returned as an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "emotion taxonomy not found, using built-in list");
                return Ok(Self::fallback());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read emotion taxonomy: {}", path.display()));
            }
        };
        let catalog = Self::from_json(&text)
            .with_context(|| format!("invalid emotion taxonomy: {}", path.display()))?;
        debug!(path = %path.display(), emotions = catalog.len(), "loaded emotion taxonomy");
        Ok(catalog)
    }

    /// Flatten a `category -> subcategory -> [leaf]` document.
    pub fn from_json(text: &str) -> Result<Self> {
        let root: Map<String, Value> =
            serde_json::from_str(text).context("expected a JSON object of categories")?;

        let mut emotions = Vec::new();
        for (category, subcategories) in &root {
            let Value::Object(subcategories) = subcategories else {
                bail!("category `{category}` is not an object of subcategories");
            };
            for (subcategory, leaves) in subcategories {
                let Value::Array(leaves) = leaves else {
                    bail!("subcategory `{category}.{subcategory}` is not an array");
                };
                for leaf in leaves {
                    match leaf {
                        Value::String(s) if !s.trim().is_empty() => emotions.push(s.clone()),
                        Value::String(_) => {
                            bail!("blank emotion label in `{category}.{subcategory}`")
                        }
                        other => bail!(
                            "emotion label in `{category}.{subcategory}` is not a string: {other}"
                        ),
                    }
                }
            }
        }

        if emotions.is_empty() {
            bail!("taxonomy contains no emotions");
        }
        Ok(Self {
            emotions,
            source: Source::File,
        })
    }

    /// The built-in list used when no taxonomy file is present.
    pub fn fallback() -> Self {
        Self {
            emotions: FALLBACK.iter().map(|s| s.to_string()).collect(),
            source: Source::Fallback,
        }
    }

    /// Uniform draw with replacement.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        &self.emotions[rng.gen_range(0..self.emotions.len())]
    }

    pub fn contains(&self, emotion: &str) -> bool {
        self.emotions.iter().any(|e| e == emotion)
    }

    // Never empty, so no `is_empty`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn source(&self) -> Source {
        self.source
    }
}
