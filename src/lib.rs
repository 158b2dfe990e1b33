//! chord-wheel: chord layout and interaction engine for dependency wheels.
//!
//! Converts an N x N weighted adjacency matrix over named nodes into angular
//! group sectors around a ring, per-edge ribbon geometry, deterministic node
//! colors, and a fading highlight model. The crate produces renderer-agnostic
//! path descriptions; an external drawing surface paints them and feeds
//! pointer and selection events back in through the [`DependencyWheel`]
//! facade.
//!
//! # Example
//!
//! ```
//! use chord_wheel::{DependencyWheel, WheelConfig, WheelData};
//!
//! let data = WheelData {
//! 	node_names: vec!["main".into(), "dep".into()],
//! 	matrix: vec![vec![0.0, 3.0], vec![0.0, 0.0]],
//! 	nodes: None,
//! };
//!
//! let wheel = DependencyWheel::new(WheelConfig::default());
//! let (layout, mut scene) = wheel.render(&data)?;
//! assert_eq!(scene.arcs.len(), 2);
//! assert_eq!(scene.ribbons.len(), 1);
//!
//! // Hovering "main" keeps both nodes lit; leaving restores neutral.
//! wheel.pointer_enter(&mut scene, &layout, 0);
//! wheel.pointer_leave(&mut scene);
//! # Ok::<(), chord_wheel::LayoutError>(())
//! ```

pub mod chart;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod layout;
pub mod theme;
pub mod types;

pub use chart::{
	dependencies_of, dependents_of, ArcShape, DependencyWheel, RibbonShape, Scene, WheelConfig,
};
pub use error::{LayoutError, ValidationError};
pub use geometry::{arc_path, chord_path, polar, Path, PathCommand};
pub use highlight::{fade_in, fade_out, related_set, RelatedSet, DIMMED_OPACITY, FULL_OPACITY};
pub use layout::{layout, AngularSpan, ChordEnd, ChordLayout, ChordRecord, Group};
pub use theme::{node_color, ribbon_stroke, Color, ROOT_COLOR};
pub use types::{validate_matrix, NodeRef, WheelData};
