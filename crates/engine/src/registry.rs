//! Category registry and dispatcher.
//!
//! `resolve` is total: every tag, including malformed and future ones,
//! yields a normalizer. Tags outside the closed set go to the default
//! normalizer, which produces the unrecognised-category view.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::{debug, warn};

use tomebound_domain::{CategoryTag, Resolution};
use tomebound_shared::{ContentEntry, ContentResponse};

use crate::config::EngineConfig;
use crate::normalizers::{
    ArmorNormalizer, BackgroundNormalizer, ClassNormalizer, ConditionNormalizer,
    DefaultNormalizer, FeatNormalizer, MagicItemNormalizer, MonsterNormalizer, Normalizer,
    PlaneNormalizer, RaceNormalizer, SpellListNormalizer, SpellNormalizer, WeaponNormalizer,
};
use crate::source::SourcePair;

static DEFAULT_REGISTRY: OnceLock<NormalizerRegistry> = OnceLock::new();

/// Maps category tags to their normalizers.
pub struct NormalizerRegistry {
    normalizers: Vec<(CategoryTag, Arc<dyn Normalizer>)>,
    fallback: Arc<dyn Normalizer>,
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerRegistry {
    /// Create a registry with every built-in category normalizer.
    pub fn new() -> Self {
        Self::with_fallback(DefaultNormalizer::default())
    }

    /// Built-in registry honouring the configured raw-record policy.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_fallback(DefaultNormalizer::new(config.raw_debug))
    }

    fn with_fallback(fallback: DefaultNormalizer) -> Self {
        let mut registry = Self::empty_with(Arc::new(fallback));
        registry.register(CategoryTag::Armor, Arc::new(ArmorNormalizer));
        registry.register(CategoryTag::Weapon, Arc::new(WeaponNormalizer));
        registry.register(CategoryTag::Spells, Arc::new(SpellNormalizer));
        registry.register(CategoryTag::Monsters, Arc::new(MonsterNormalizer));
        registry.register(CategoryTag::MagicItem, Arc::new(MagicItemNormalizer));
        registry.register(CategoryTag::Feats, Arc::new(FeatNormalizer));
        registry.register(CategoryTag::Background, Arc::new(BackgroundNormalizer));
        registry.register(CategoryTag::Races, Arc::new(RaceNormalizer));
        registry.register(CategoryTag::Conditions, Arc::new(ConditionNormalizer));
        registry.register(CategoryTag::Planes, Arc::new(PlaneNormalizer));
        registry.register(CategoryTag::Classes, Arc::new(ClassNormalizer));
        registry.register(CategoryTag::SpellList, Arc::new(SpellListNormalizer));
        registry
    }

    /// Create an empty registry: every tag resolves to the default normalizer.
    pub fn empty() -> Self {
        Self::empty_with(Arc::new(DefaultNormalizer::default()))
    }

    fn empty_with(fallback: Arc<dyn Normalizer>) -> Self {
        Self {
            normalizers: Vec::new(),
            fallback,
        }
    }

    /// Register (or replace) the normalizer for a category.
    pub fn register(&mut self, category: CategoryTag, normalizer: Arc<dyn Normalizer>) {
        match self.normalizers.iter_mut().find(|(tag, _)| *tag == category) {
            Some(entry) => entry.1 = normalizer,
            None => self.normalizers.push((category, normalizer)),
        }
    }

    /// Get the normalizer registered for a category.
    pub fn get(&self, category: CategoryTag) -> Option<Arc<dyn Normalizer>> {
        self.normalizers
            .iter()
            .find(|(tag, _)| *tag == category)
            .map(|(_, normalizer)| normalizer.clone())
    }

    /// List registered categories with their normalizer names.
    pub fn list_categories(&self) -> Vec<(CategoryTag, &'static str)> {
        self.normalizers
            .iter()
            .map(|(tag, normalizer)| (*tag, normalizer.name()))
            .collect()
    }

    /// Resolve any tag to a normalizer. Never fails.
    pub fn resolve(&self, tag: &str) -> Resolved {
        let category = tag.parse::<CategoryTag>().ok();
        let normalizer = category.and_then(|category| self.get(category));
        let normalizer = match normalizer {
            Some(normalizer) => normalizer,
            None => {
                warn!(tag = %tag, "Unrecognized content category, using default normalizer");
                self.fallback.clone()
            }
        };
        Resolved {
            tag: tag.to_string(),
            category,
            normalizer,
        }
    }

    /// Resolve and normalize one entry into a response envelope.
    pub fn resolve_entry(&self, entry: &ContentEntry) -> ContentResponse {
        let resolved = self.resolve(entry.tag());
        let result = resolved.normalize(entry.metadata.as_ref(), entry.turkish_content.as_ref());
        ContentResponse::new(entry.tag(), resolved.normalizer().name(), result)
    }
}

/// A tag bound to the normalizer that handles it.
#[derive(Clone)]
pub struct Resolved {
    tag: String,
    category: Option<CategoryTag>,
    normalizer: Arc<dyn Normalizer>,
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("tag", &self.tag)
            .field("category", &self.category)
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}

impl Resolved {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The parsed category, `None` for unrecognised tags.
    pub fn category(&self) -> Option<CategoryTag> {
        self.category
    }

    pub fn is_recognized(&self) -> bool {
        self.category.is_some()
    }

    pub fn normalizer(&self) -> &dyn Normalizer {
        self.normalizer.as_ref()
    }

    /// Normalize the two raw sources.
    pub fn normalize(&self, metadata: Option<&Value>, turkish: Option<&Value>) -> Resolution {
        debug!(
            category = %self.tag,
            normalizer = self.normalizer.name(),
            "Normalizing content entry"
        );
        self.normalizer
            .normalize(&SourcePair::new(&self.tag, metadata, turkish))
    }
}

/// The process-wide built-in registry.
pub fn default_registry() -> &'static NormalizerRegistry {
    DEFAULT_REGISTRY.get_or_init(NormalizerRegistry::new)
}

/// Resolve a tag with the built-in registry.
pub fn resolve(tag: &str) -> Resolved {
    default_registry().resolve(tag)
}

/// Resolve and normalize an entry with the built-in registry.
pub fn resolve_entry(entry: &ContentEntry) -> ContentResponse {
    default_registry().resolve_entry(entry)
}
