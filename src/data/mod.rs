/// Data layer: core types, loading, filtering and bucketing.
///
/// Architecture:
/// ```text
///   assets/iris.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, immutable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species predicate → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ histogram │  equal-width bucket counts
///   └───────────┘
/// ```

pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;
