//! `ep-spatial` — initial datasets and spatial indexing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`dataset`] | `NodeRecord`, `EdgeRecord`, `Dataset`, `DatasetBuilder`     |
//! | [`loader`]  | CSV loaders for node and edge files                         |
//! | [`contact`] | `ContactIndex` — R-tree over agent positions                |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the `ep-core` types.    |

pub mod contact;
pub mod dataset;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use contact::ContactIndex;
pub use dataset::{Dataset, DatasetBuilder, EdgeRecord, NodeRecord};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_dataset_csv, load_edges_reader, load_nodes_reader};
