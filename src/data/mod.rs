/// Data layer: core types, loading, filtering and writing.
///
/// Architecture:
/// ```text
///     input.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  header + Vec<Record>, cells are Option<String>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  drop rows whose column cell is missing or "" → FilterReport
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  Dataset → output.csv
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
