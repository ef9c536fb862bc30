//! Proximity links between nearby particles.
//!
//! Links are recomputed from scratch every tick. The pairwise scan is
//! quadratic, which is fine at the default 100-particle cap (at most 4950
//! checks per frame). Raising the cap past `grid_threshold` switches to a
//! uniform grid whose cells are one link distance wide, so only the 3x3 block
//! of neighboring cells has to be searched.

use std::collections::HashMap;

use super::config::FieldConfig;
use super::particles::Particle;
use super::theme::Color;

/// A faint line between two particles closer than the link distance.
///
/// `a < b` always holds; both are indices into the field's particle list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub opacity: f64,
	pub color: Color,
}

/// Opacity for a pair at `distance`, or `None` when they are too far apart.
///
/// Falls linearly from `link_max_opacity` at zero distance to zero at the
/// link distance.
pub fn link_opacity(config: &FieldConfig, distance: f64) -> Option<f64> {
	if config.link_distance <= 0.0 || !(distance < config.link_distance) {
		return None;
	}
	Some((config.link_distance - distance) / config.link_distance * config.link_max_opacity)
}

/// Computes every link, picking the grid path for large fields.
pub fn compute_links(particles: &[Particle], config: &FieldConfig, color: Color) -> Vec<Link> {
	if particles.len() > config.grid_threshold {
		compute_links_grid(particles, config, color)
	} else {
		compute_links_pairwise(particles, config, color)
	}
}

/// Checks every unordered pair.
pub fn compute_links_pairwise(
	particles: &[Particle],
	config: &FieldConfig,
	color: Color,
) -> Vec<Link> {
	let mut links = Vec::new();
	for (a, pa) in particles.iter().enumerate() {
		for (b, pb) in particles.iter().enumerate().skip(a + 1) {
			push_link(&mut links, config, color, a, b, pa, pb);
		}
	}
	links
}

/// Same result as [`compute_links_pairwise`], bucketing particles by cell first.
pub fn compute_links_grid(particles: &[Particle], config: &FieldConfig, color: Color) -> Vec<Link> {
	if config.link_distance <= 0.0 {
		return Vec::new();
	}
	let cell_size = config.link_distance;
	let cell_of = |p: &Particle| {
		(
			(p.x / cell_size).floor() as i64,
			(p.y / cell_size).floor() as i64,
		)
	};

	let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
	for (i, p) in particles.iter().enumerate() {
		cells.entry(cell_of(p)).or_default().push(i);
	}

	let mut links = Vec::new();
	for (a, pa) in particles.iter().enumerate() {
		let (cx, cy) = cell_of(pa);
		// Tiny cells push far particles to the i64 limits; saturate instead of overflowing.
		for nx in cx.saturating_sub(1)..=cx.saturating_add(1) {
			for ny in cy.saturating_sub(1)..=cy.saturating_add(1) {
				let Some(bucket) = cells.get(&(nx, ny)) else {
					continue;
				};
				for &b in bucket.iter().filter(|&&b| b > a) {
					push_link(&mut links, config, color, a, b, pa, &particles[b]);
				}
			}
		}
	}

	links.sort_unstable_by_key(|link| (link.a, link.b));
	links
}

fn push_link(
	links: &mut Vec<Link>,
	config: &FieldConfig,
	color: Color,
	a: usize,
	b: usize,
	pa: &Particle,
	pb: &Particle,
) {
	let distance = pa.distance_to(pb);
	if let Some(opacity) = link_opacity(config, distance) {
		links.push(Link {
			a,
			b,
			distance,
			opacity,
			color,
		});
	}
}
