//! CSV dataset loader.
//!
//! # CSV format
//!
//! Nodes, one row per agent, in the order agents should be created:
//!
//! ```csv
//! id,x,y,z
//! mesh0,12.5,-3.0,40.1
//! mesh1,-7.25,0.0,2.0
//! ```
//!
//! Edges, optional:
//!
//! ```csv
//! id,from,to
//! 0-1,mesh0,mesh1
//! ```
//!
//! Duplicate nodes and dangling edges are handled by [`DatasetBuilder`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ep_core::Vec3;

use crate::{Dataset, DatasetBuilder, SpatialError, SpatialResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRow {
    id: String,
    x:  f64,
    y:  f64,
    z:  f64,
}

#[derive(Deserialize)]
struct EdgeRow {
    id:   String,
    from: String,
    to:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a dataset from a node CSV and an optional edge CSV.
pub fn load_dataset_csv(nodes: &Path, edges: Option<&Path>) -> SpatialResult<Dataset> {
    let mut builder = DatasetBuilder::new();
    load_nodes_reader(std::fs::File::open(nodes)?, &mut builder)?;
    if let Some(path) = edges {
        load_edges_reader(std::fs::File::open(path)?, &mut builder)?;
    }
    Ok(builder.build())
}

/// Append every node row in `reader` to `builder`.  Returns the number of
/// rows accepted (duplicates are not counted).
///
/// Accepts any `Read` source, so tests can pass a `std::io::Cursor`.
pub fn load_nodes_reader<R: Read>(reader: R, builder: &mut DatasetBuilder) -> SpatialResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut accepted = 0;
    for (line, result) in csv_reader.deserialize::<NodeRow>().enumerate() {
        let row = result.map_err(|e| SpatialError::Parse(format!("node row {}: {e}", line + 1)))?;
        if !(row.x.is_finite() && row.y.is_finite() && row.z.is_finite()) {
            return Err(SpatialError::Parse(format!(
                "node {:?} has a non-finite coordinate",
                row.id
            )));
        }
        if builder.add_node(row.id, Vec3::new(row.x, row.y, row.z)) {
            accepted += 1;
        }
    }
    Ok(accepted)
}

/// Append every edge row in `reader` to `builder`.  Load nodes first: edges
/// naming unknown nodes are dropped.
pub fn load_edges_reader<R: Read>(reader: R, builder: &mut DatasetBuilder) -> SpatialResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut accepted = 0;
    for (line, result) in csv_reader.deserialize::<EdgeRow>().enumerate() {
        let row = result.map_err(|e| SpatialError::Parse(format!("edge row {}: {e}", line + 1)))?;
        if builder.add_edge(row.id, row.from, row.to) {
            accepted += 1;
        }
    }
    Ok(accepted)
}
