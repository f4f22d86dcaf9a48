//! Data types shared across matchfeat crates.
//! Input rows, pair identifiers, and the feature vocabulary.

pub mod collections;
pub mod features;
pub mod pair_id;
pub mod word_pair;

pub use collections::{FxHashMap, FxHashSet};
pub use features::{DerivedKind, DerivedSuffix, StatGroup, StatKind};
pub use pair_id::PairId;
pub use word_pair::{Category, Side, WordPairScore};
