//! Tomebound Engine library.
//!
//! Turns raw dual-source content entries into renderer-ready view models.
//!
//! ## Structure
//!
//! - `source` - Ordered fallback access over the localized and metadata records
//! - `normalizers/` - One stateless normalizer per content category
//! - `registry` - Category dispatch, total over every tag
//! - `config` - Environment-driven settings for the preview tool

pub mod config;
pub mod normalizers;
pub mod registry;
pub mod source;

pub use config::{load_dotenv_from_repo_root, ConfigError, EngineConfig};
pub use normalizers::{DefaultNormalizer, Normalizer};
pub use registry::{default_registry, resolve, resolve_entry, NormalizerRegistry, Resolved};
pub use source::SourcePair;
