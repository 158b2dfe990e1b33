//! Focus highlighting: neighborhood derivation and the binary fade state.
//!
//! There are exactly two opacity states: neutral (everything at full
//! opacity) and focused on node `k` (the neighborhood of `k` at full
//! opacity, everything else dimmed). Transitions are edge-triggered by
//! pointer events and fully re-derived from the chord list each time; no
//! state is cached between events, and the layout outputs are passed in
//! explicitly rather than captured.

use std::collections::HashSet;

use crate::chart::Scene;
use crate::layout::ChordRecord;

/// Opacity applied to everything outside the focused neighborhood.
pub const DIMMED_OPACITY: f64 = 0.1;
/// Opacity of neutral and related elements.
pub const FULL_OPACITY: f64 = 1.0;

/// The neighborhood of a focused node, derived from the chord list.
#[derive(Clone, Debug, PartialEq)]
pub struct RelatedSet {
	focus: usize,
	groups: HashSet<usize>,
}

impl RelatedSet {
	/// The focused node index.
	pub fn focus(&self) -> usize {
		self.focus
	}

	/// Indices of all related groups, focus included.
	pub fn groups(&self) -> &HashSet<usize> {
		&self.groups
	}

	/// True when the group at `index` survives the fade.
	pub fn contains_group(&self, index: usize) -> bool {
		self.groups.contains(&index)
	}

	/// True when a chord between `source` and `target` survives the fade.
	pub fn contains_chord(&self, source: usize, target: usize) -> bool {
		source == self.focus || target == self.focus
	}
}

/// Compute the set of groups and chords related to `focus`.
///
/// A chord is related iff one of its endpoints is `focus`; a group is
/// related iff it is `focus` or shares a related chord with it. One pass
/// over the chord list, no adjacency index.
pub fn related_set(chords: &[ChordRecord], focus: usize) -> RelatedSet {
	let mut groups = HashSet::new();
	groups.insert(focus);
	for chord in chords {
		if chord.source.index == focus {
			groups.insert(chord.target.index);
		} else if chord.target.index == focus {
			groups.insert(chord.source.index);
		}
	}
	RelatedSet { focus, groups }
}

/// Focus on a node: dim every shape outside its neighborhood and keep the
/// neighborhood at full opacity. Re-derives the whole scene state, so
/// switching focus without an intervening [`fade_in`] behaves the same as
/// focusing from neutral.
pub fn fade_out(scene: &mut Scene, chords: &[ChordRecord], focus: usize) {
	let related = related_set(chords, focus);
	for arc in &mut scene.arcs {
		arc.opacity = if related.contains_group(arc.index) {
			FULL_OPACITY
		} else {
			DIMMED_OPACITY
		};
	}
	for ribbon in &mut scene.ribbons {
		ribbon.opacity = if related.contains_chord(ribbon.source, ribbon.target) {
			FULL_OPACITY
		} else {
			DIMMED_OPACITY
		};
	}
}

/// Return to neutral: restore every shape to full opacity, whatever the
/// previous focus was.
pub fn fade_in(scene: &mut Scene) {
	for arc in &mut scene.arcs {
		arc.opacity = FULL_OPACITY;
	}
	for ribbon in &mut scene.ribbons {
		ribbon.opacity = FULL_OPACITY;
	}
}
