//! Error types for wheel input validation and chord layout.

use thiserror::Error;

/// Errors raised while validating wheel input data.
///
/// Validation fails fast on the first offending dimension; no silent
/// coercion is applied to the matrix.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
	/// Matrix row count does not match the node name count.
	#[error("matrix has {rows} rows but {names} node names")]
	NameCountMismatch {
		/// Number of matrix rows.
		rows: usize,
		/// Number of node names supplied.
		names: usize,
	},

	/// The optional per-node object array has the wrong length.
	#[error("nodes array has {nodes} entries but matrix has {rows} rows")]
	NodeCountMismatch {
		/// Number of matrix rows.
		rows: usize,
		/// Number of node objects supplied.
		nodes: usize,
	},

	/// A row is shorter or longer than the matrix is tall.
	#[error("row {row} has {len} columns, expected {expected}")]
	RaggedRow {
		/// Index of the offending row.
		row: usize,
		/// Actual column count of that row.
		len: usize,
		/// Expected column count (the row count).
		expected: usize,
	},

	/// A weight is negative or not a finite number.
	#[error("invalid weight {weight} at ({row}, {col}); weights must be finite and non-negative")]
	InvalidWeight {
		/// Row of the offending cell.
		row: usize,
		/// Column of the offending cell.
		col: usize,
		/// The rejected weight.
		weight: f64,
	},
}

/// Errors raised by the chord layout engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
	/// The input matrix failed validation.
	#[error(transparent)]
	Invalid(#[from] ValidationError),

	/// Inter-group padding is not a usable angle.
	#[error("padding {padding} is not a finite, non-negative angle")]
	InvalidPadding {
		/// The rejected padding value, radians.
		padding: f64,
	},

	/// The padding reserved between groups fills or exceeds the circle,
	/// leaving no angular space for the data. Checked before any angle is
	/// allocated so no negative-width sector is ever produced.
	#[error("padding {padding} over {groups} groups leaves no angular space for data")]
	PaddingTooLarge {
		/// The rejected padding value, radians.
		padding: f64,
		/// Number of groups the padding is applied between.
		groups: usize,
	},
}
