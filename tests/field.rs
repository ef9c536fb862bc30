// Wasm-only deps of the lib are unused here.
#![allow(unused_crate_dependencies)]

use particle_field::{Color, FieldConfig, FieldState, Palette, Particle};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Particle at `(x, y)` moving with `(vx, vy)`; color is overwritten by the field.
pub fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
	Particle {
		x,
		y,
		vx,
		vy,
		radius: 2.0,
		opacity: 0.5,
		color: Color::rgb(0, 0, 0),
	}
}

pub fn in_bounds(field: &FieldState) -> bool {
	field.particles().iter().all(|p| {
		(0.0..=field.width()).contains(&p.x) && (0.0..=field.height()).contains(&p.y)
	})
}

// ==================================================================================
// Population
// ==================================================================================

#[test]
fn particle_count_tracks_viewport_width() {
	let mut rng = SmallRng::seed_from_u64(11);
	for _ in 0..200 {
		let width: f64 = rng.gen_range(1.0..5000.0);
		let height: f64 = rng.gen_range(1.0..2000.0);
		let field = FieldState::with_seed(width, height, rng.r#gen());
		let expected = ((width / 20.0).floor() as usize).min(100);
		assert_eq!(field.particles().len(), expected, "width {width}");
	}
}

#[test]
fn documented_scenarios() {
	assert_eq!(FieldState::with_seed(1000.0, 500.0, 0).particles().len(), 50);
	assert_eq!(FieldState::with_seed(100.0, 100.0, 0).particles().len(), 5);
	assert_eq!(FieldState::with_seed(0.0, 500.0, 0).particles().len(), 0);
	assert_eq!(FieldState::with_seed(500.0, -1.0, 0).particles().len(), 0);
}

#[test]
fn fresh_particles_start_in_configured_ranges() {
	let field = FieldState::with_seed(1920.0, 1080.0, 5);
	let light = Palette::light();
	for p in field.particles() {
		assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
		assert!((1.0..=3.0).contains(&p.radius));
		assert!((0.2..=0.7).contains(&p.opacity));
		assert_eq!(p.color, light.particle);
	}
	assert!(in_bounds(&field));
}

#[test]
fn resize_recomputes_count_from_new_dimensions_only() {
	let mut field = FieldState::with_seed(3000.0, 900.0, 21);
	assert_eq!(field.particles().len(), 100);

	field.resize(640.0, 480.0);
	assert_eq!(field.particles().len(), 32);
	assert_eq!((field.width(), field.height()), (640.0, 480.0));
	assert!(in_bounds(&field));

	field.resize(-5.0, 480.0);
	assert!(field.particles().is_empty());
	assert!(field.links().is_empty());

	field.resize(640.0, 480.0);
	assert_eq!(field.particles().len(), 32);
}

#[test]
fn custom_config_caps_population() {
	let config = FieldConfig {
		max_particles: 10,
		..FieldConfig::default()
	};
	let field = FieldState::with_config(config, 1000.0, 800.0, true, SmallRng::seed_from_u64(2));
	assert_eq!(field.particles().len(), 10);
	assert!(field.is_dark());
}

// ==================================================================================
// Stepping
// ==================================================================================

#[test]
fn particles_stay_in_bounds_across_many_ticks() {
	let mut field = FieldState::with_seed(800.0, 600.0, 99);
	let mut rng = SmallRng::seed_from_u64(100);
	for i in 0..2000 {
		if i % 7 == 0 {
			field.set_pointer(Some((rng.gen_range(-50.0..850.0), rng.gen_range(-50.0..650.0))));
		}
		if i % 13 == 0 {
			field.set_pointer(None);
		}
		field.tick();
		assert!(in_bounds(&field), "escaped on tick {i}");
	}
}

#[test]
fn boundary_contact_flips_velocity_sign() {
	let particles = vec![
		particle(0.1, 50.0, -0.2, 0.0),
		particle(99.95, 50.0, 0.2, 0.0),
		particle(50.0, 0.05, 0.0, -0.1),
		particle(50.0, 99.99, 0.0, 0.1),
	];
	let mut field = FieldState::with_particles(100.0, 100.0, false, particles);
	field.tick();

	let ps = field.particles();
	assert_eq!(ps[0].vx, 0.2);
	assert_eq!(ps[0].x, 0.0);
	assert_eq!(ps[1].vx, -0.2);
	assert_eq!(ps[1].x, 100.0);
	assert_eq!(ps[2].vy, 0.1);
	assert_eq!(ps[2].y, 0.0);
	assert_eq!(ps[3].vy, -0.1);
	assert_eq!(ps[3].y, 100.0);
}

#[test]
fn interior_motion_keeps_velocity() {
	let mut field =
		FieldState::with_particles(200.0, 200.0, false, vec![particle(100.0, 100.0, 0.2, 0.1)]);
	for _ in 0..10 {
		field.tick();
	}
	let p = &field.particles()[0];
	assert_eq!((p.vx, p.vy), (0.2, 0.1));
	assert!((p.x - 102.0).abs() < 1e-9);
	assert!((p.y - 101.0).abs() < 1e-9);
}

#[test]
fn absent_pointer_means_pure_drift() {
	let mut field = FieldState::with_seed(1200.0, 800.0, 8);
	field.set_pointer(Some((600.0, 400.0)));
	field.set_pointer(None);
	let before: Vec<Particle> = field.particles().to_vec();
	field.tick();

	for (old, new) in before.iter().zip(field.particles()) {
		let expected_x = (old.x + old.vx).clamp(0.0, 1200.0);
		let expected_y = (old.y + old.vy).clamp(0.0, 800.0);
		assert_eq!(new.x, expected_x);
		assert_eq!(new.y, expected_y);
	}
}

#[test]
fn pointer_scenario_without_pointer() {
	let mut field =
		FieldState::with_particles(100.0, 100.0, false, vec![particle(50.0, 50.0, 0.1, -0.1)]);
	field.set_pointer(None);
	field.tick();
	let p = &field.particles()[0];
	assert!((p.x - 50.1).abs() < 1e-12);
	assert!((p.y - 49.9).abs() < 1e-12);
}

#[test]
fn pointer_force_scales_with_distance() {
	let particles = vec![particle(100.0, 200.0, 0.0, 0.0), particle(100.0, 270.0, 0.0, 0.0)];
	let mut field = FieldState::with_particles(400.0, 400.0, false, particles);
	field.set_pointer(Some((100.0, 220.0)));
	field.tick();

	// Near particle: d = 20, force 0.8, shift 20 * 0.8 * 0.01 = 0.16
	// Far particle:  d = 50, force 0.5, shift 50 * 0.5 * 0.01 = 0.25
	let ps = field.particles();
	assert!((ps[0].y - (200.0 - 0.16)).abs() < 1e-12);
	assert!((ps[1].y - (270.0 + 0.25)).abs() < 1e-12);
	assert_eq!(ps[0].x, 100.0);
}

#[test]
fn pointer_on_top_of_particle_is_stable() {
	let mut field =
		FieldState::with_particles(400.0, 400.0, false, vec![particle(100.0, 100.0, 0.0, 0.0)]);
	field.set_pointer(Some((100.0, 100.0)));
	field.tick();
	assert_eq!((field.particles()[0].x, field.particles()[0].y), (100.0, 100.0));
}

// ==================================================================================
// Links
// ==================================================================================

#[test]
fn links_are_unique_pairs_below_threshold() {
	let mut field = FieldState::with_seed(1000.0, 300.0, 77);
	for _ in 0..50 {
		field.tick();
	}
	let ps = field.particles();
	let links = field.links();
	assert!(!links.is_empty());

	for link in links {
		assert!(link.a < link.b);
		let d = ps[link.a].distance_to(&ps[link.b]);
		assert!(d < 100.0);
		assert!((link.distance - d).abs() < 1e-12);
		assert!((ps[link.b].distance_to(&ps[link.a]) - d).abs() < 1e-12);
		assert!(link.opacity > 0.0 && link.opacity <= 0.1);
	}

	// Every close pair is present.
	let mut expected = 0;
	for a in 0..ps.len() {
		for b in a + 1..ps.len() {
			if ps[a].distance_to(&ps[b]) < 100.0 {
				expected += 1;
			}
		}
	}
	assert_eq!(links.len(), expected);
}

#[test]
fn link_opacity_decreases_with_distance() {
	let particles = vec![
		particle(0.0, 0.0, 0.0, 0.0),
		particle(10.0, 0.0, 0.0, 0.0),
		particle(0.0, 60.0, 0.0, 0.0),
	];
	let field = FieldState::with_particles(500.0, 500.0, false, particles);
	let links = field.links();
	assert_eq!(links.len(), 3);

	let mut by_distance: Vec<_> = links.iter().map(|l| (l.distance, l.opacity)).collect();
	by_distance.sort_by(|x, y| x.0.total_cmp(&y.0));
	for pair in by_distance.windows(2) {
		assert!(pair[0].1 > pair[1].1);
	}
}

#[test]
fn links_follow_the_particles_each_tick() {
	let particles = vec![particle(10.0, 10.0, 5.0, 0.0), particle(115.0, 10.0, 0.0, 0.0)];
	let mut field = FieldState::with_particles(500.0, 500.0, false, particles);
	assert!(field.links().is_empty());
	field.tick();
	assert!(field.links().is_empty());
	field.tick();
	assert_eq!(field.links().len(), 1);
}

// ==================================================================================
// Theme
// ==================================================================================

#[test]
fn theme_change_only_touches_color() {
	let mut field = FieldState::with_seed(900.0, 700.0, 4);
	let before: Vec<Particle> = field.particles().to_vec();

	field.set_theme(true);
	let dark = Palette::dark();
	for (old, new) in before.iter().zip(field.particles()) {
		assert_eq!((old.x, old.y, old.vx, old.vy), (new.x, new.y, new.vx, new.vy));
		assert_eq!((old.radius, old.opacity), (new.radius, new.opacity));
		assert_eq!(new.color, dark.particle);
	}
	assert!(field.links().iter().all(|l| l.color == dark.link));

	field.set_theme(false);
	assert!(field.particles().iter().all(|p| p.color == Palette::light().particle));
}

#[test]
fn theme_survives_resize() {
	let mut field = FieldState::with_seed(900.0, 700.0, 4);
	field.set_theme(true);
	field.resize(400.0, 400.0);
	assert!(field.particles().iter().all(|p| p.color == Palette::dark().particle));
}
