//! Drawing the field onto a 2D surface.
//!
//! The engine never draws. Each frame the host hands the current snapshots to
//! [`render_frame`], which issues draw calls in a fixed order:
//! 1. Clear the whole surface
//! 2. One filled circle per particle
//! 3. One stroked line per link

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::FieldState;
use super::theme::Color;

/// Minimal immediate-mode drawing target.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// Renders the current particles and links.
pub fn render_frame<S: Surface + ?Sized>(field: &FieldState, surface: &mut S) {
	surface.clear(field.width(), field.height());

	let particles = field.particles();
	for p in particles {
		surface.fill_circle(p.x, p.y, p.radius, p.color.with_alpha(p.opacity));
	}

	let line_width = field.config().link_line_width;
	for link in field.links() {
		let (Some(a), Some(b)) = (particles.get(link.a), particles.get(link.b)) else {
			continue;
		};
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			line_width,
			link.color.with_alpha(link.opacity),
		);
	}
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}
