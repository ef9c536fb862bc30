//! Particle model and batch spawning.

use std::ops::Range;

use rand::Rng;

use super::config::FieldConfig;
use super::theme::Color;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
}

impl Particle {
	/// Uniformly random particle inside `width` x `height`.
	pub fn random<R: Rng + ?Sized>(
		rng: &mut R,
		config: &FieldConfig,
		width: f64,
		height: f64,
		color: Color,
	) -> Self {
		let speed = config.max_speed.abs();
		Self {
			x: sample(rng, &(0.0..width)),
			y: sample(rng, &(0.0..height)),
			vx: sample(rng, &(-speed..speed)),
			vy: sample(rng, &(-speed..speed)),
			radius: sample(rng, &config.radius),
			opacity: sample(rng, &config.opacity),
			color,
		}
	}

	/// Euclidean distance between two particle centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Spawns a fresh batch sized for the viewport.
pub fn spawn_batch<R: Rng + ?Sized>(
	rng: &mut R,
	config: &FieldConfig,
	width: f64,
	height: f64,
	color: Color,
) -> Vec<Particle> {
	let count = config.particle_count(width, height);
	(0..count)
		.map(|_| Particle::random(rng, config, width, height, color))
		.collect()
}

/// `gen_range` panics on empty ranges; a collapsed range yields its start.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
	if range.start < range.end {
		rng.gen_range(range.clone())
	} else {
		range.start
	}
}
