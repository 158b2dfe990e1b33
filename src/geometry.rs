//! Renderer-agnostic path generation for ring sectors and chord ribbons.
//!
//! Shapes are described as command lists in the 2D canvas vocabulary
//! (move/line/arc/quadratic/close) so any drawing surface can replay them;
//! [`Path::to_svg_data`] additionally encodes a shape as SVG path data.
//! All coordinates are centered on the wheel origin. Angle zero points to
//! twelve o'clock and positive angles run clockwise on screen.

use std::f64::consts::PI;

use crate::layout::{AngularSpan, ChordRecord};

/// Convert a wheel angle and radius to cartesian coordinates.
pub fn polar(angle: f64, radius: f64) -> (f64, f64) {
	let a = angle - PI / 2.0;
	(radius * a.cos(), radius * a.sin())
}

/// One drawing command, mirroring the 2D canvas API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	/// Begin a subpath at the given point.
	MoveTo {
		/// Point coordinates.
		x: f64,
		/// Point coordinates.
		y: f64,
	},
	/// Straight segment to the given point.
	LineTo {
		/// Point coordinates.
		x: f64,
		/// Point coordinates.
		y: f64,
	},
	/// Circular arc about the wheel center, from `start` to `end` wheel
	/// angles. Sweeps clockwise when `end > start`. The current point must
	/// already sit at `(start, radius)`.
	Arc {
		/// Arc radius.
		radius: f64,
		/// Start angle, radians.
		start: f64,
		/// End angle, radians.
		end: f64,
	},
	/// Quadratic curve through one control point.
	QuadTo {
		/// Control point coordinates.
		cx: f64,
		/// Control point coordinates.
		cy: f64,
		/// End point coordinates.
		x: f64,
		/// End point coordinates.
		y: f64,
	},
	/// Close the subpath.
	Close,
}

/// A shape outline as an ordered command list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
	/// Commands in drawing order.
	pub commands: Vec<PathCommand>,
}

impl Path {
	/// Encode the path as SVG path data (the `d` attribute).
	///
	/// Arc commands become `A` segments; the large-arc flag is set for
	/// sweeps longer than half the circle and the sweep flag follows the
	/// angular direction.
	pub fn to_svg_data(&self) -> String {
		let mut d = String::new();
		for command in &self.commands {
			if !d.is_empty() {
				d.push(' ');
			}
			match *command {
				PathCommand::MoveTo { x, y } => {
					d.push_str(&format!("M{x:.3},{y:.3}"));
				}
				PathCommand::LineTo { x, y } => {
					d.push_str(&format!("L{x:.3},{y:.3}"));
				}
				PathCommand::Arc { radius, start, end } => {
					let (x, y) = polar(end, radius);
					let large = u8::from((end - start).abs() > PI);
					let sweep = u8::from(end >= start);
					d.push_str(&format!(
						"A{radius:.3},{radius:.3} 0 {large},{sweep} {x:.3},{y:.3}"
					));
				}
				PathCommand::QuadTo { cx, cy, x, y } => {
					d.push_str(&format!("Q{cx:.3},{cy:.3} {x:.3},{y:.3}"));
				}
				PathCommand::Close => d.push('Z'),
			}
		}
		d
	}
}

/// Ring-sector outline for one group between two radii.
///
/// A zero-width span degenerates to a sliver between the two radii rather
/// than failing, so zero-weight nodes still render.
pub fn arc_path(span: AngularSpan, inner_radius: f64, outer_radius: f64) -> Path {
	let (outer_x, outer_y) = polar(span.start, outer_radius);
	let (inner_x, inner_y) = polar(span.end, inner_radius);
	Path {
		commands: vec![
			PathCommand::MoveTo {
				x: outer_x,
				y: outer_y,
			},
			PathCommand::Arc {
				radius: outer_radius,
				start: span.start,
				end: span.end,
			},
			PathCommand::LineTo {
				x: inner_x,
				y: inner_y,
			},
			PathCommand::Arc {
				radius: inner_radius,
				start: span.end,
				end: span.start,
			},
			PathCommand::Close,
		],
	}
}

/// Ribbon outline for one directed chord at `radius`.
///
/// The classic band shape: one arc segment per endpoint sub-arc, joined by
/// two quadratic curves pulled through the wheel center. Unequal sub-arc
/// widths taper the band towards its thinner end.
pub fn chord_path(record: &ChordRecord, radius: f64) -> Path {
	let source = record.source.span;
	let target = record.target.span;
	let (source_x, source_y) = polar(source.start, radius);
	let (target_x, target_y) = polar(target.start, radius);
	Path {
		commands: vec![
			PathCommand::MoveTo {
				x: source_x,
				y: source_y,
			},
			PathCommand::Arc {
				radius,
				start: source.start,
				end: source.end,
			},
			PathCommand::QuadTo {
				cx: 0.0,
				cy: 0.0,
				x: target_x,
				y: target_y,
			},
			PathCommand::Arc {
				radius,
				start: target.start,
				end: target.end,
			},
			PathCommand::QuadTo {
				cx: 0.0,
				cy: 0.0,
				x: source_x,
				y: source_y,
			},
			PathCommand::Close,
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::ChordEnd;

	const EPS: f64 = 1e-9;

	#[test]
	fn polar_points_up_at_angle_zero() {
		let (x, y) = polar(0.0, 10.0);
		assert!(x.abs() < EPS);
		assert!((y + 10.0).abs() < EPS);
	}

	#[test]
	fn polar_runs_clockwise() {
		// A quarter turn lands on the positive x axis (three o'clock).
		let (x, y) = polar(PI / 2.0, 10.0);
		assert!((x - 10.0).abs() < EPS);
		assert!(y.abs() < EPS);
	}

	#[test]
	fn arc_path_starts_on_the_outer_radius() {
		let span = AngularSpan {
			start: 0.0,
			end: 1.0,
		};
		let path = arc_path(span, 90.0, 110.0);
		assert_eq!(path.commands.len(), 5);
		let PathCommand::MoveTo { x, y } = path.commands[0] else {
			panic!("expected MoveTo");
		};
		assert!(((x * x + y * y).sqrt() - 110.0).abs() < EPS);
		assert!(matches!(path.commands[4], PathCommand::Close));
	}

	#[test]
	fn zero_width_span_still_produces_a_path() {
		let span = AngularSpan {
			start: 0.5,
			end: 0.5,
		};
		let path = arc_path(span, 90.0, 110.0);
		assert_eq!(path.commands.len(), 5);
		let d = path.to_svg_data();
		assert!(d.starts_with('M'));
		assert!(d.ends_with('Z'));
	}

	#[test]
	fn chord_path_joins_both_sub_arcs_through_the_center() {
		let record = ChordRecord {
			source: ChordEnd {
				index: 0,
				span: AngularSpan {
					start: 0.0,
					end: 0.4,
				},
				weight: 2.0,
			},
			target: ChordEnd {
				index: 1,
				span: AngularSpan {
					start: 3.0,
					end: 3.2,
				},
				weight: 1.0,
			},
		};
		let path = chord_path(&record, 100.0);
		let arcs = path
			.commands
			.iter()
			.filter(|c| matches!(c, PathCommand::Arc { .. }))
			.count();
		let quads: Vec<_> = path
			.commands
			.iter()
			.filter_map(|c| match c {
				PathCommand::QuadTo { cx, cy, .. } => Some((*cx, *cy)),
				_ => None,
			})
			.collect();
		assert_eq!(arcs, 2);
		assert_eq!(quads, vec![(0.0, 0.0), (0.0, 0.0)]);
	}

	#[test]
	fn svg_arc_flags_follow_sweep_length_and_direction() {
		let long = Path {
			commands: vec![PathCommand::Arc {
				radius: 50.0,
				start: 0.0,
				end: 4.0,
			}],
		};
		assert!(long.to_svg_data().contains("0 1,1"));

		let reverse = Path {
			commands: vec![PathCommand::Arc {
				radius: 50.0,
				start: 1.0,
				end: 0.5,
			}],
		};
		assert!(reverse.to_svg_data().contains("0 0,0"));
	}
}
