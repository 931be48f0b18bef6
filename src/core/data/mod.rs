//! Core data types shared by every stage of a reconciliation pass.
//!
//! ## Module Structure
//!
//! - `message`: message trees and flattened translations (MessageTree, FlatKey, LocaleTranslation)
//! - `position`: document positions used to anchor annotations (Position, TextRange, KeyPosition)

pub mod message;
pub mod position;

pub use message::{
    EmptyValues, FlatKey, LocaleTranslation, MessageTree, TranslationFamily, leaf_segment,
    namespace_of, parent_of,
};
pub use position::{KeyPosition, Position, TextRange};
