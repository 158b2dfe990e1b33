//! Wheel input data: node names, adjacency matrix, optional package objects.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Input to the dependency wheel.
///
/// `matrix[i][j]` holds the weight of the dependency from node `i` to node
/// `j`. The matrix must be square with one row per node name; weights are
/// finite and non-negative. The diagonal is allowed but never drawn. Field
/// names follow the external JSON interface (`nodeNames`, `matrix`, `nodes`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelData {
	/// Display names, one per node. Node 0 is the root of the wheel.
	pub node_names: Vec<String>,
	/// Square weight matrix.
	pub matrix: Vec<Vec<f64>>,
	/// Optional per-node objects handed to the selection callback instead of
	/// the bare name. When present, must have one entry per node.
	#[serde(default)]
	pub nodes: Option<Vec<Value>>,
}

impl WheelData {
	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.matrix.len()
	}

	/// True when the wheel has no nodes.
	pub fn is_empty(&self) -> bool {
		self.matrix.is_empty()
	}

	/// Check name and package counts against the matrix, then the matrix
	/// itself. Fails fast on the first offending dimension.
	pub fn validate(&self) -> Result<(), ValidationError> {
		let rows = self.matrix.len();
		if self.node_names.len() != rows {
			return Err(ValidationError::NameCountMismatch {
				rows,
				names: self.node_names.len(),
			});
		}
		if let Some(nodes) = &self.nodes {
			if nodes.len() != rows {
				return Err(ValidationError::NodeCountMismatch {
					rows,
					nodes: nodes.len(),
				});
			}
		}
		validate_matrix(&self.matrix)
	}

	/// Reference a node for callback delivery: the package object when one
	/// was supplied, the display name otherwise.
	pub fn node_ref(&self, index: usize) -> NodeRef<'_> {
		match self.nodes.as_ref().and_then(|nodes| nodes.get(index)) {
			Some(package) => NodeRef::Package(package),
			None => NodeRef::Name(&self.node_names[index]),
		}
	}
}

/// Validate that `matrix` is square with finite, non-negative weights.
pub fn validate_matrix(matrix: &[Vec<f64>]) -> Result<(), ValidationError> {
	let expected = matrix.len();
	for (row, cols) in matrix.iter().enumerate() {
		if cols.len() != expected {
			return Err(ValidationError::RaggedRow {
				row,
				len: cols.len(),
				expected,
			});
		}
		for (col, &weight) in cols.iter().enumerate() {
			if !weight.is_finite() || weight < 0.0 {
				return Err(ValidationError::InvalidWeight { row, col, weight });
			}
		}
	}
	Ok(())
}

/// A node as seen by the selection callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeRef<'a> {
	/// Bare display name (no `nodes` array supplied).
	Name(&'a str),
	/// Caller-supplied package object for this node.
	Package(&'a Value),
}
