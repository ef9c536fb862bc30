//! Decorative particle field.
//!
//! A drifting cloud of small dots joined by faint lines when they come close,
//! nudged by the pointer and colored by the site theme:
//! - [`FieldState`] owns particles, bounds, pointer, and theme, and advances
//!   one tick at a time
//! - Proximity links are recomputed after every tick
//! - [`render_frame`] draws the snapshots to any [`Surface`]
//!
//! # Example
//!
//! ```
//! use particle_field::{FieldState, render_frame, Surface, Color};
//!
//! struct Count(usize);
//! impl Surface for Count {
//!     fn clear(&mut self, _: f64, _: f64) {}
//!     fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Color) { self.0 += 1; }
//!     fn stroke_line(&mut self, _: (f64, f64), _: (f64, f64), _: f64, _: Color) {}
//! }
//!
//! let mut field = FieldState::with_seed(1000.0, 500.0, 7);
//! field.set_pointer(Some((500.0, 250.0)));
//! field.tick();
//!
//! let mut surface = Count(0);
//! render_frame(&field, &mut surface);
//! assert_eq!(surface.0, 50);
//! ```

mod component;
pub mod config;
pub mod links;
pub mod particles;
pub mod render;
mod state;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use links::Link;
pub use particles::Particle;
pub use render::{Surface, render_frame};
pub use state::FieldState;
pub use theme::{Color, Palette, ThemeMode};
