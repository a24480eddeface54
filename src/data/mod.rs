/// Data layer: core types, file readers, metrics and the measure writer.
///
/// Architecture:
/// ```text
///  MC*-measure / token lists / ranked results
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Series / LabeledSeries / relevance
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  distance, precision/recall, squared difference
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  append `N;sum` to a measure file
///   └──────────┘
/// ```

pub mod loader;
pub mod metrics;
pub mod model;
pub mod writer;
