//! Particle field state and the per-frame stepper.
//!
//! `FieldState` owns everything the animation needs: particles, viewport
//! bounds, the last pointer position, and the theme flag. Hosts mutate it
//! through a handful of methods and call [`FieldState::tick`] once per rendered
//! frame. Ticks are not time-scaled; velocities are in pixels per tick.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::links::{Link, compute_links};
use super::particles::{Particle, spawn_batch};
use super::theme::{Palette, ThemeMode};

/// The complete animation state for one canvas.
#[derive(Clone, Debug)]
pub struct FieldState {
	config: FieldConfig,
	particles: Vec<Particle>,
	links: Vec<Link>,
	width: f64,
	height: f64,
	pointer: Option<(f64, f64)>,
	theme: ThemeMode,
	rng: SmallRng,
}

impl FieldState {
	/// Creates a light-themed field with default configuration, seeded from entropy.
	pub fn new(width: f64, height: f64) -> Self {
		Self::with_config(FieldConfig::default(), width, height, false, SmallRng::from_entropy())
	}

	/// Same as [`FieldState::new`] but reproducible.
	pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
		Self::with_config(
			FieldConfig::default(),
			width,
			height,
			false,
			SmallRng::seed_from_u64(seed),
		)
	}

	/// Fully explicit construction: configuration, theme, and RNG.
	pub fn with_config(
		config: FieldConfig,
		width: f64,
		height: f64,
		is_dark: bool,
		rng: SmallRng,
	) -> Self {
		let mut state = Self {
			config,
			particles: Vec::new(),
			links: Vec::new(),
			width: sanitize_extent(width),
			height: sanitize_extent(height),
			pointer: None,
			theme: ThemeMode::from_dark(is_dark),
			rng,
		};
		state.populate();
		state
	}

	/// Builds a field around an explicit particle batch.
	///
	/// Particle colors are replaced with the theme color; everything else is
	/// kept as given.
	pub fn with_particles(
		width: f64,
		height: f64,
		is_dark: bool,
		mut particles: Vec<Particle>,
	) -> Self {
		let theme = ThemeMode::from_dark(is_dark);
		let color = Palette::for_mode(theme).particle;
		for p in &mut particles {
			p.color = color;
		}
		let mut state = Self {
			config: FieldConfig::default(),
			particles,
			links: Vec::new(),
			width: sanitize_extent(width),
			height: sanitize_extent(height),
			pointer: None,
			theme,
			rng: SmallRng::seed_from_u64(0),
		};
		state.refresh_links();
		state
	}

	/// Updates the bounds and replaces every particle with a fresh batch.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = sanitize_extent(width);
		self.height = sanitize_extent(height);
		self.populate();
	}

	/// Switches theme and recolors particles and links in place.
	pub fn set_theme(&mut self, is_dark: bool) {
		self.theme = ThemeMode::from_dark(is_dark);
		let palette = self.palette();
		for p in &mut self.particles {
			p.color = palette.particle;
		}
		for link in &mut self.links {
			link.color = palette.link;
		}
		debug!("particle-field: theme set to {}", self.theme.as_str());
	}

	/// Records the pointer position relative to the canvas. `None` turns the
	/// pointer force off until a position is set again.
	pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
		self.pointer = pointer.filter(|(x, y)| x.is_finite() && y.is_finite());
	}

	/// Advances every particle by one tick, then recomputes links.
	pub fn tick(&mut self) {
		let (width, height) = (self.width, self.height);
		let pointer = self.pointer;
		let (radius, strength) = (self.config.pointer_radius, self.config.pointer_strength);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if let Some((px, py)) = pointer {
				let (dx, dy) = (px - p.x, py - p.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < radius {
					let force = (radius - distance) / radius;
					p.x -= dx * force * strength;
					p.y -= dy * force * strength;
				}
			}

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			p.x = p.x.max(0.0).min(width);
			p.y = p.y.max(0.0).min(height);
		}

		self.refresh_links();
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Links computed by the last tick, repopulation, or theme change.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	pub fn is_dark(&self) -> bool {
		self.theme.is_dark()
	}

	pub fn theme(&self) -> ThemeMode {
		self.theme
	}

	pub fn palette(&self) -> Palette {
		Palette::for_mode(self.theme)
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	fn populate(&mut self) {
		let color = self.palette().particle;
		self.particles = spawn_batch(&mut self.rng, &self.config, self.width, self.height, color);
		self.refresh_links();
		debug!(
			"particle-field: spawned {} particles for {}x{}",
			self.particles.len(),
			self.width,
			self.height
		);
	}

	fn refresh_links(&mut self) {
		self.links = compute_links(&self.particles, &self.config, self.palette().link);
	}
}

/// Non-finite or negative extents collapse to zero so clamping stays well-defined.
fn sanitize_extent(value: f64) -> f64 {
	if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
