//! Reconciliation core: loading locale files, resolving the layout, and
//! locating key tokens in document text.
//!
//! ## Module Structure
//!
//! - `data`: message trees, flattened translations, document positions
//! - `error`: errors raised while loading a translation file
//! - `family`: loading the set of locale files compared in one pass
//! - `layout`: single-file / folder layout resolution and document identity
//! - `locate`: key token lookup in raw JSON text
//! - `parsers`: JSON parsing and flattening

pub mod data;
pub mod error;
pub mod family;
pub mod layout;
pub mod locate;
pub mod parsers;

pub use data::{
    EmptyValues, FlatKey, KeyPosition, LocaleTranslation, MessageTree, Position, TextRange,
    TranslationFamily, leaf_segment, namespace_of, parent_of,
};
pub use family::LoadWarning;
