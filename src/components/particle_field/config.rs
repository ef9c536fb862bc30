//! Tunable constants for the particle field.
//!
//! Every number the engine uses lives here. The defaults reproduce the
//! portfolio site's look; a page can override any subset by embedding JSON in a
//! `<script id="field-config" type="application/json">` element.

use std::ops::Range;

use serde::Deserialize;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Upper bound on the particle count regardless of viewport width.
	pub max_particles: usize,
	/// One particle per this many pixels of viewport width.
	pub spacing: f64,
	/// Per-axis initial velocity is drawn from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	/// Particle radius range in pixels.
	pub radius: Range<f64>,
	/// Particle opacity range.
	pub opacity: Range<f64>,
	/// Link distance threshold. Pairs closer than this are linked.
	pub link_distance: f64,
	/// Link opacity at distance zero.
	pub link_max_opacity: f64,
	/// Stroke width for links in pixels.
	pub link_line_width: f64,
	/// Pointer force only applies within this distance.
	pub pointer_radius: f64,
	/// Scale applied to the pointer offset when nudging a particle.
	pub pointer_strength: f64,
	/// Above this many particles links are found with a uniform grid
	/// instead of checking every pair.
	pub grid_threshold: usize,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 100,
			spacing: 20.0,
			max_speed: 0.25,
			radius: 1.0..3.0,
			opacity: 0.2..0.7,
			link_distance: 100.0,
			link_max_opacity: 0.1,
			link_line_width: 1.0,
			pointer_radius: 100.0,
			pointer_strength: 0.01,
			grid_threshold: 400,
		}
	}
}

impl FieldConfig {
	/// Number of particles to spawn for a viewport.
	///
	/// Non-positive or non-finite dimensions yield an empty field.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
			return 0;
		}
		if self.spacing <= 0.0 {
			return self.max_particles;
		}
		let by_width = (width / self.spacing).floor() as usize;
		by_width.min(self.max_particles)
	}

	/// Parses a JSON override. Missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
