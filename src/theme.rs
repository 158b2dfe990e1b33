//! Deterministic node and ribbon coloring.
//!
//! Colors are a pure function of node identity: the root node keeps a fixed
//! neutral gray and every other node hashes its full name to a hue. Hashing
//! the whole name keeps the mapping stable for arbitrary Unicode names and
//! spreads neighboring names across the hue wheel.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and an alpha value.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white).
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black).
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// CSS hex string, alpha ignored.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Neutral gray reserved for the root node (index 0).
pub const ROOT_COLOR: Color = Color::rgb(148, 148, 148);

/// Saturation for hue-derived node fills.
const FILL_SATURATION: f64 = 0.55;
/// Lightness for hue-derived node fills.
const FILL_LIGHTNESS: f64 = 0.55;
/// Fraction by which ribbon strokes are darkened from their fill.
const STROKE_DARKEN: f64 = 0.3;

/// Deterministic fill color for a node.
///
/// The root keeps [`ROOT_COLOR`] so the rotation anchor stands apart from
/// the hue wheel; every other node maps its name to one of 360 hues.
pub fn node_color(index: usize, name: &str) -> Color {
	if index == 0 {
		return ROOT_COLOR;
	}
	let hue = (fnv1a(name.as_bytes()) % 360) as f64;
	hsl_to_color(hue, FILL_SATURATION, FILL_LIGHTNESS)
}

/// Stroke color for a ribbon: a darker variant of its source node's fill.
pub fn ribbon_stroke(fill: Color) -> Color {
	fill.darken(STROKE_DARKEN)
}

/// 64-bit FNV-1a over the node name bytes. Stable across runs and
/// platforms.
fn fnv1a(bytes: &[u8]) -> u64 {
	let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
	for &byte in bytes {
		hash ^= u64::from(byte);
		hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
	}
	hash
}

/// Convert HSL (hue in degrees, saturation/lightness in 0..=1) to an opaque
/// [`Color`].
fn hsl_to_color(h: f64, s: f64, l: f64) -> Color {
	let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
	let hp = (h / 60.0) % 6.0;
	let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
	let (r1, g1, b1) = match hp as u32 {
		0 => (c, x, 0.0),
		1 => (x, c, 0.0),
		2 => (0.0, c, x),
		3 => (0.0, x, c),
		4 => (x, 0.0, c),
		_ => (c, 0.0, x),
	};
	let m = l - c / 2.0;
	Color::rgb(
		((r1 + m) * 255.0).round() as u8,
		((g1 + m) * 255.0).round() as u8,
		((b1 + m) * 255.0).round() as u8,
	)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn root_is_always_neutral_gray() {
		assert_eq!(node_color(0, "anything"), ROOT_COLOR);
		assert_eq!(node_color(0, ""), ROOT_COLOR);
	}

	#[test]
	fn colors_are_stable_across_calls() {
		assert_eq!(node_color(3, "serde"), node_color(3, "serde"));
	}

	#[test]
	fn color_depends_on_name_not_call_order() {
		let forward: Vec<_> = ["a", "b", "c"]
			.iter()
			.map(|n| node_color(1, n))
			.collect();
		let reversed: Vec<_> = ["c", "b", "a"]
			.iter()
			.map(|n| node_color(1, n))
			.collect();
		assert_eq!(forward[0], reversed[2]);
		assert_eq!(forward[2], reversed[0]);
	}

	#[test]
	fn unicode_names_get_colors_without_panicking() {
		let color = node_color(5, "graphe-de-dépendances-図");
		assert_eq!(color.a, 1.0);
	}

	#[test]
	fn palette_offers_many_distinct_hues() {
		let colors: HashSet<_> = (0..40)
			.map(|i| {
				let c = node_color(1, &format!("package-{i}"));
				(c.r, c.g, c.b)
			})
			.collect();
		assert!(colors.len() >= 20, "only {} distinct colors", colors.len());
	}

	#[test]
	fn stroke_is_darker_than_fill() {
		let fill = node_color(2, "tokio");
		let stroke = ribbon_stroke(fill);
		assert!(stroke.r <= fill.r);
		assert!(stroke.g <= fill.g);
		assert!(stroke.b <= fill.b);
		assert!(u16::from(stroke.r) + u16::from(stroke.g) + u16::from(stroke.b)
			< u16::from(fill.r) + u16::from(fill.g) + u16::from(fill.b));
	}

	#[test]
	fn css_encoding_matches_alpha() {
		assert_eq!(Color::rgb(255, 0, 128).to_css(), "#ff0080");
		assert_eq!(
			Color::rgb(255, 0, 128).with_alpha(0.5).to_css(),
			"rgba(255, 0, 128, 0.5)"
		);
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css_rgb(), "#010203");
	}

	#[test]
	fn lighten_and_darken_clamp_their_factors() {
		let base = Color::rgb(100, 150, 200);
		assert_eq!(base.lighten(2.0), Color::rgb(255, 255, 255));
		assert_eq!(base.darken(2.0), Color::rgb(0, 0, 0));
		assert_eq!(base.lighten(0.0), base);
	}
}
