//! particle-field: decorative particle animation for a static portfolio site.
//!
//! This crate provides a WASM canvas background of drifting particles joined by
//! faint proximity lines, reacting to the pointer and to the site's light/dark
//! theme. The animation engine itself ([`FieldState`]) is plain Rust with no
//! browser dependencies and can be ticked synchronously.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, MouseEvent, Storage, Window};

// Pulled in only for its `js` feature, which gives `rand` an entropy source on wasm32.
use getrandom as _;

pub mod components;

pub use components::particle_field::{
	Color, FieldConfig, FieldState, Link, Palette, Particle, ParticleFieldCanvas, Surface,
	ThemeMode, links, particles, render_frame,
};

/// `localStorage` key holding the chosen theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

fn local_storage() -> Option<Storage> {
	let window: Window = web_sys::window()?;
	window.local_storage().ok().flatten()
}

/// Reads the saved theme, defaulting to light.
fn load_saved_theme() -> ThemeMode {
	local_storage()
		.and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
		.map(|value| ThemeMode::parse(&value))
		.unwrap_or_default()
}

fn persist_theme(mode: ThemeMode) {
	let Some(storage) = local_storage() else {
		warn!("particle-field: localStorage unavailable, theme not saved");
		return;
	};
	let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
}

/// Load field overrides from a script element with id="field-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config (max {} particles, link distance {})",
				config.max_particles, config.link_distance
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Restores the saved theme, renders the toggle button and the particle canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (theme, set_theme) = signal(load_saved_theme());
	let dark = Signal::derive(move || theme.get().is_dark());
	let config = load_field_config();

	Effect::new(move |prev: Option<ThemeMode>| {
		let mode = theme.get();
		if prev.is_some_and(|p| p != mode) {
			persist_theme(mode);
		}
		mode
	});

	let toggle = move |_: MouseEvent| set_theme.update(|mode| *mode = mode.toggled());

	view! {
		<Html attr:lang="en" attr:data-theme=move || theme.get().as_str() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas dark=dark config=config />
		<button id="themeToggle" class="theme-toggle" on:click=toggle>
			<i class=move || theme.get().icon_class()></i>
		</button>
	}
}
