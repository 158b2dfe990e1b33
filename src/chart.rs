//! Chart facade: configuration, scene assembly, and selection callbacks.
//!
//! [`DependencyWheel`] wires the layout engine, geometry generators, color
//! resolver, and interaction controller together. `render` turns input data
//! into a [`Scene`] of paintable shapes; pointer and selection events from
//! the external drawing surface come back through `pointer_enter`,
//! `pointer_leave`, and `select`.

use std::f64::consts::PI;

use log::{debug, warn};

use crate::error::LayoutError;
use crate::geometry::{arc_path, chord_path, polar, Path};
use crate::highlight::{self, FULL_OPACITY};
use crate::layout::{layout, ChordLayout};
use crate::theme::{node_color, ribbon_stroke, Color};
use crate::types::{NodeRef, WheelData};

/// Radial thickness of the group ring.
const RING_THICKNESS: f64 = 20.0;
/// Gap between the outer ring edge and label anchors.
const LABEL_GAP: f64 = 8.0;

/// Wheel dimensions and spacing.
///
/// A plain value struct; override fields with struct-update syntax off
/// [`WheelConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
	/// Overall diagram width and height.
	pub width: f64,
	/// Margin reserved around the ring for labels.
	pub margin: f64,
	/// Angular gap between consecutive groups, radians. Must stay well
	/// under `2pi / N`; layout rejects anything at or past that bound.
	pub padding: f64,
}

impl Default for WheelConfig {
	fn default() -> Self {
		Self {
			width: 700.0,
			margin: 150.0,
			padding: 0.02,
		}
	}
}

/// Ring sector shape plus its label placement.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcShape {
	/// Node index.
	pub index: usize,
	/// Sector outline, wheel rotation applied.
	pub path: Path,
	/// Fill color.
	pub fill: Color,
	/// Display label.
	pub label: String,
	/// Label anchor point just outside the ring.
	pub label_anchor: (f64, f64),
	/// Label angle, radians, wheel rotation applied.
	pub label_angle: f64,
	/// Whether the label sits in the lower half of the wheel, where text
	/// reads better flipped.
	pub label_flipped: bool,
	/// Current opacity; mutated by the fade operations.
	pub opacity: f64,
}

/// Ribbon shape for one directed dependency.
#[derive(Clone, Debug, PartialEq)]
pub struct RibbonShape {
	/// Source (depending) node index.
	pub source: usize,
	/// Target (depended-upon) node index.
	pub target: usize,
	/// Ribbon outline, wheel rotation applied.
	pub path: Path,
	/// Fill color, inherited from the source node.
	pub fill: Color,
	/// Stroke color, a darker variant of the fill.
	pub stroke: Color,
	/// Current opacity; mutated by the fade operations.
	pub opacity: f64,
}

/// Everything an external drawing surface needs to paint the wheel.
///
/// Re-rendering with new data replaces the scene wholesale; nothing is
/// diffed or carried over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// One sector per node, in node order.
	pub arcs: Vec<ArcShape>,
	/// One band per directed dependency, row-major.
	pub ribbons: Vec<RibbonShape>,
}

/// Selection callback: the chosen node, the nodes it depends on, and the
/// nodes that depend on it.
pub type NodeChosen = dyn Fn(NodeRef<'_>, &[NodeRef<'_>], &[NodeRef<'_>]);

/// The dependency wheel chart.
///
/// Owns the configuration and the optional selection callback; all derived
/// state lives in the [`ChordLayout`] and [`Scene`] values returned by
/// `render`, which stay read-only (layout) or caller-owned (scene) so event
/// handlers share nothing hidden.
pub struct DependencyWheel {
	config: WheelConfig,
	on_node_chosen: Option<Box<NodeChosen>>,
}

impl DependencyWheel {
	/// Create a wheel with the given configuration.
	pub fn new(config: WheelConfig) -> Self {
		Self {
			config,
			on_node_chosen: None,
		}
	}

	/// The active configuration.
	pub fn config(&self) -> WheelConfig {
		self.config
	}

	/// Register the selection callback. Errors raised inside the callback
	/// are not caught here; they propagate to whoever delivered the event.
	pub fn on_node_chosen<F>(&mut self, callback: F)
	where
		F: Fn(NodeRef<'_>, &[NodeRef<'_>], &[NodeRef<'_>]) + 'static,
	{
		self.on_node_chosen = Some(Box::new(callback));
	}

	/// Validate `data` and compute its chord layout with the configured
	/// padding.
	pub fn layout(&self, data: &WheelData) -> Result<ChordLayout, LayoutError> {
		data.validate()?;
		layout(&data.matrix, self.config.padding)
	}

	/// Build the paintable scene for a layout of `data`.
	pub fn scene(&self, data: &WheelData, layout: &ChordLayout) -> Scene {
		let mut inner_radius = self.config.width / 2.0 - self.config.margin;
		if inner_radius <= 0.0 {
			warn!(
				"margin {} leaves no ring radius at width {}",
				self.config.margin, self.config.width
			);
			inner_radius = 0.0;
		}
		let outer_radius = inner_radius + RING_THICKNESS;
		let rotation = layout.rotation;

		let arcs = layout
			.groups
			.iter()
			.map(|group| {
				let span = group.span.rotate(rotation);
				let label = data.node_names[group.index].clone();
				let mid = span.mid();
				let turn = mid.rem_euclid(2.0 * PI);
				ArcShape {
					index: group.index,
					path: arc_path(span, inner_radius, outer_radius),
					fill: node_color(group.index, &label),
					label_anchor: polar(mid, outer_radius + LABEL_GAP),
					label_angle: mid,
					label_flipped: turn > PI / 2.0 && turn < 3.0 * PI / 2.0,
					label,
					opacity: FULL_OPACITY,
				}
			})
			.collect();

		let ribbons = layout
			.chords
			.iter()
			.map(|chord| {
				let source = chord.source.index;
				let fill = node_color(source, &data.node_names[source]);
				RibbonShape {
					source,
					target: chord.target.index,
					path: chord_path(&chord.rotate(rotation), inner_radius),
					fill,
					stroke: ribbon_stroke(fill),
					opacity: FULL_OPACITY,
				}
			})
			.collect();

		debug!(
			"wheel scene: {} arcs, {} ribbons, radius {:.1}",
			layout.groups.len(),
			layout.chords.len(),
			inner_radius
		);
		Scene { arcs, ribbons }
	}

	/// Render `data` into a layout and its scene. The layout is returned
	/// alongside the scene so interaction handlers can share it read-only.
	pub fn render(&self, data: &WheelData) -> Result<(ChordLayout, Scene), LayoutError> {
		let layout = self.layout(data)?;
		let scene = self.scene(data, &layout);
		Ok((layout, scene))
	}

	/// Pointer entered the shape of node `index`: dim everything outside
	/// its neighborhood.
	pub fn pointer_enter(&self, scene: &mut Scene, layout: &ChordLayout, index: usize) {
		highlight::fade_out(scene, &layout.chords, index);
	}

	/// Pointer left the wheel: restore full opacity everywhere.
	pub fn pointer_leave(&self, scene: &mut Scene) {
		highlight::fade_in(scene);
	}

	/// Node `index` was chosen: derive its dependency lists and invoke the
	/// registered callback, if any. Callback panics propagate.
	pub fn select(&self, data: &WheelData, index: usize) {
		let Some(callback) = &self.on_node_chosen else {
			return;
		};
		if index >= data.len() {
			warn!("selection index {} out of range for {} nodes", index, data.len());
			return;
		}
		let dependencies = dependencies_of(data, index);
		let dependents = dependents_of(data, index);
		callback(data.node_ref(index), &dependencies, &dependents);
	}
}

/// Nodes that `index` depends on: non-zero columns of row `index`, in
/// column order. Zero weights and the diagonal are omitted.
pub fn dependencies_of<'a>(data: &'a WheelData, index: usize) -> Vec<NodeRef<'a>> {
	let Some(row) = data.matrix.get(index) else {
		return Vec::new();
	};
	row.iter()
		.enumerate()
		.filter(|&(col, &weight)| col != index && weight > 0.0)
		.map(|(col, _)| data.node_ref(col))
		.collect()
}

/// Nodes that depend on `index`: non-zero rows of column `index`, in row
/// order. Zero weights and the diagonal are omitted.
pub fn dependents_of<'a>(data: &'a WheelData, index: usize) -> Vec<NodeRef<'a>> {
	data.matrix
		.iter()
		.enumerate()
		.filter(|&(row, cols)| row != index && cols.get(index).is_some_and(|&w| w > 0.0))
		.map(|(row, _)| data.node_ref(row))
		.collect()
}
