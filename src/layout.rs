//! Chord layout engine: angular group sectors and ribbon endpoints.
//!
//! [`layout`] is a pure function of the adjacency matrix and the inter-group
//! padding. The full circle, minus the padding reserved between consecutive
//! groups, is shared among nodes in proportion to their total weight; each
//! group is then subdivided into one sub-arc per non-zero incoming or
//! outgoing edge. Output is bit-reproducible for identical input: iteration
//! is index-ordered and the sub-arc sort is stable.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;

use crate::error::LayoutError;
use crate::types::validate_matrix;

/// An angular interval on the wheel, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularSpan {
	/// Start angle.
	pub start: f64,
	/// End angle; never less than `start`.
	pub end: f64,
}

impl AngularSpan {
	/// Angular width of the interval.
	pub fn width(self) -> f64 {
		self.end - self.start
	}

	/// Midpoint angle.
	pub fn mid(self) -> f64 {
		(self.start + self.end) / 2.0
	}

	/// Shift both endpoints by `offset`.
	///
	/// Layout angles are stored unrotated; the wheel rotation is applied as
	/// a pure transform like this at geometry time.
	pub fn rotate(self, offset: f64) -> Self {
		Self {
			start: self.start + offset,
			end: self.end + offset,
		}
	}
}

/// Angular sector assigned to one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Group {
	/// Node index this sector belongs to. Index 0 is the root: it keeps the
	/// neutral color and anchors the wheel rotation.
	pub index: usize,
	/// Sector bounds, before wheel rotation.
	pub span: AngularSpan,
	/// Total weight mapped to the sector: row plus column sums, diagonal
	/// excluded.
	pub total: f64,
}

/// One endpoint of a chord: the sub-arc of a group dedicated to a single
/// edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordEnd {
	/// Index of the group the sub-arc sits in.
	pub index: usize,
	/// Sub-arc bounds inside the parent group, before wheel rotation.
	pub span: AngularSpan,
	/// Edge weight this sub-arc represents.
	pub weight: f64,
}

/// A directed ribbon between two sub-arcs.
///
/// Asymmetric matrices produce two independent records for (i, j) and
/// (j, i); each direction is drawn as its own band so dependency strength
/// stays visually distinct per direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordRecord {
	/// Outgoing sub-arc on the depending node.
	pub source: ChordEnd,
	/// Incoming sub-arc on the depended-upon node.
	pub target: ChordEnd,
}

impl ChordRecord {
	/// Shift both endpoint spans by `offset`.
	pub fn rotate(self, offset: f64) -> Self {
		Self {
			source: ChordEnd {
				span: self.source.span.rotate(offset),
				..self.source
			},
			target: ChordEnd {
				span: self.target.span.rotate(offset),
				..self.target
			},
		}
	}
}

/// Output of [`layout`]: sectors, ribbons, and the root-centering rotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChordLayout {
	/// One sector per node, in node order.
	pub groups: Vec<Group>,
	/// One record per positive off-diagonal matrix cell, row-major.
	pub chords: Vec<ChordRecord>,
	/// Rotation that centers group 0 on angle zero. Applied uniformly to
	/// every rendered group and chord, never baked into the stored spans.
	pub rotation: f64,
}

/// Which side of an edge a sub-arc belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
	Outgoing,
	Incoming,
}

/// Compute group sectors and chord endpoints for `matrix` with `padding`
/// radians reserved between consecutive groups.
///
/// The matrix is validated first; `padding * N >= 2pi` is rejected before
/// any angle is allocated. An isolated node (all-zero row and column) gets
/// a zero-width sector and no chords, which downstream geometry accepts.
pub fn layout(matrix: &[Vec<f64>], padding: f64) -> Result<ChordLayout, LayoutError> {
	validate_matrix(matrix)?;
	let n = matrix.len();
	if !padding.is_finite() || padding < 0.0 {
		return Err(LayoutError::InvalidPadding { padding });
	}
	if n > 0 && padding * n as f64 >= 2.0 * PI {
		return Err(LayoutError::PaddingTooLarge { padding, groups: n });
	}

	let totals: Vec<f64> = (0..n)
		.map(|i| {
			(0..n)
				.filter(|&j| j != i)
				.map(|j| matrix[i][j] + matrix[j][i])
				.sum()
		})
		.collect();
	let grand_total: f64 = totals.iter().sum();
	let data_angle = 2.0 * PI - padding * n as f64;
	// All-zero matrices collapse every sector to zero width instead of
	// dividing by zero.
	let unit = if grand_total > 0.0 {
		data_angle / grand_total
	} else {
		0.0
	};

	let mut groups = Vec::with_capacity(n);
	let mut outgoing: HashMap<(usize, usize), ChordEnd> = HashMap::new();
	let mut incoming: HashMap<(usize, usize), ChordEnd> = HashMap::new();

	let mut cursor = 0.0;
	for i in 0..n {
		let mut subs: Vec<(Flow, usize, f64)> = Vec::new();
		for j in 0..n {
			if j == i {
				continue;
			}
			if matrix[i][j] > 0.0 {
				subs.push((Flow::Outgoing, j, matrix[i][j]));
			}
			if matrix[j][i] > 0.0 {
				subs.push((Flow::Incoming, j, matrix[j][i]));
			}
		}
		// Largest connections first; the sort is stable so equal weights
		// keep their scan order.
		subs.sort_by(|a, b| b.2.total_cmp(&a.2));

		let start = cursor;
		let mut sub_cursor = start;
		for (flow, other, weight) in subs {
			let span = AngularSpan {
				start: sub_cursor,
				end: sub_cursor + weight * unit,
			};
			sub_cursor = span.end;
			let end = ChordEnd {
				index: i,
				span,
				weight,
			};
			match flow {
				Flow::Outgoing => outgoing.insert((i, other), end),
				Flow::Incoming => incoming.insert((i, other), end),
			};
		}

		let span = AngularSpan {
			start,
			end: start + totals[i] * unit,
		};
		groups.push(Group {
			index: i,
			span,
			total: totals[i],
		});
		cursor = span.end + padding;
	}

	let mut chords = Vec::new();
	for i in 0..n {
		for j in 0..n {
			if i == j || matrix[i][j] <= 0.0 {
				continue;
			}
			// Both sub-arcs exist for every positive off-diagonal cell.
			let (Some(&source), Some(&target)) =
				(outgoing.get(&(i, j)), incoming.get(&(j, i)))
			else {
				continue;
			};
			chords.push(ChordRecord { source, target });
		}
	}

	let rotation = groups.first().map_or(0.0, |root| -root.span.mid());
	debug!(
		"chord layout: {} groups, {} chords, rotation {:.4}",
		n,
		chords.len(),
		rotation
	);

	Ok(ChordLayout {
		groups,
		chords,
		rotation,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ValidationError;

	const EPS: f64 = 1e-9;

	/// main -> a, main -> b, a -> b.
	fn triangle() -> Vec<Vec<f64>> {
		vec![
			vec![0.0, 1.0, 1.0],
			vec![0.0, 0.0, 1.0],
			vec![0.0, 0.0, 0.0],
		]
	}

	#[test]
	fn identical_input_gives_identical_output() {
		let matrix = triangle();
		let first = layout(&matrix, 0.02).unwrap();
		let second = layout(&matrix, 0.02).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn group_spans_plus_padding_cover_the_circle() {
		let padding = 0.05;
		let result = layout(&triangle(), padding).unwrap();
		let spans: f64 = result.groups.iter().map(|g| g.span.width()).sum();
		assert!((spans + 3.0 * padding - 2.0 * PI).abs() < EPS);
	}

	#[test]
	fn one_directed_chord_per_positive_cell() {
		let matrix = vec![vec![0.0, 2.0], vec![1.0, 0.0]];
		let result = layout(&matrix, 0.0).unwrap();
		// Asymmetric pair yields two independent ribbons, not one merged
		// bidirectional band.
		assert_eq!(result.chords.len(), 2);
		let forward = &result.chords[0];
		assert_eq!((forward.source.index, forward.target.index), (0, 1));
		assert_eq!(forward.source.weight, 2.0);
		let back = &result.chords[1];
		assert_eq!((back.source.index, back.target.index), (1, 0));
		assert_eq!(back.source.weight, 1.0);
	}

	#[test]
	fn diagonal_cells_produce_no_chords() {
		let matrix = vec![vec![5.0, 1.0], vec![0.0, 3.0]];
		let result = layout(&matrix, 0.0).unwrap();
		assert_eq!(result.chords.len(), 1);
		assert_eq!(result.chords[0].source.index, 0);
		// Diagonal weight does not inflate the sector either.
		assert_eq!(result.groups[0].total, 1.0);
		assert_eq!(result.groups[1].total, 1.0);
	}

	#[test]
	fn rotation_centers_the_root_group() {
		let result = layout(&triangle(), 0.02).unwrap();
		let mid = result.groups[0].span.rotate(result.rotation).mid();
		assert!(mid.abs() < EPS);
	}

	#[test]
	fn sub_arcs_tile_their_group_in_descending_weight_order() {
		let matrix = vec![
			vec![0.0, 1.0, 4.0],
			vec![2.0, 0.0, 0.0],
			vec![0.0, 0.0, 0.0],
		];
		let result = layout(&matrix, 0.0).unwrap();
		let group = result.groups[0];
		// Group 0 carries weights 4 (out to 2), 2 (in from 1), 1 (out to 1).
		let out_heavy = result
			.chords
			.iter()
			.find(|c| c.source.index == 0 && c.target.index == 2)
			.unwrap()
			.source;
		assert!((out_heavy.span.start - group.span.start).abs() < EPS);
		let expected_width = group.span.width() * 4.0 / 7.0;
		assert!((out_heavy.span.width() - expected_width).abs() < EPS);
	}

	#[test]
	fn isolated_node_gets_zero_width_sector() {
		let matrix = vec![
			vec![0.0, 1.0, 0.0],
			vec![0.0, 0.0, 0.0],
			vec![0.0, 0.0, 0.0],
		];
		let result = layout(&matrix, 0.01).unwrap();
		assert!(result.groups[2].span.width().abs() < EPS);
		assert!(result.chords.iter().all(|c| c.source.index != 2 && c.target.index != 2));
	}

	#[test]
	fn all_zero_matrix_degenerates_without_error() {
		let matrix = vec![vec![0.0; 3]; 3];
		let result = layout(&matrix, 0.02).unwrap();
		assert_eq!(result.groups.len(), 3);
		assert!(result.chords.is_empty());
		assert!(result.groups.iter().all(|g| g.span.width() == 0.0));
	}

	#[test]
	fn empty_matrix_is_an_empty_layout() {
		let result = layout(&[], 0.02).unwrap();
		assert!(result.groups.is_empty());
		assert!(result.chords.is_empty());
		assert_eq!(result.rotation, 0.0);
	}

	#[test]
	fn oversized_padding_is_rejected_before_allocation() {
		let err = layout(&triangle(), 3.0).unwrap_err();
		assert_eq!(
			err,
			LayoutError::PaddingTooLarge {
				padding: 3.0,
				groups: 3
			}
		);
	}

	#[test]
	fn negative_padding_is_rejected() {
		assert!(matches!(
			layout(&triangle(), -0.1),
			Err(LayoutError::InvalidPadding { .. })
		));
	}

	#[test]
	fn invalid_matrix_propagates_validation_error() {
		let ragged = vec![vec![0.0, 1.0], vec![0.0]];
		assert_eq!(
			layout(&ragged, 0.02),
			Err(LayoutError::Invalid(ValidationError::RaggedRow {
				row: 1,
				len: 1,
				expected: 2
			}))
		);
	}
}
