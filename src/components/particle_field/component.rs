//! Leptos component hosting the particle field on a canvas.
//!
//! The component sizes the canvas to the viewport, forwards pointer movement
//! and theme changes into the [`FieldState`], and drives the animation with
//! `requestAnimationFrame`, ticking and rendering once per frame. Once the
//! component is unmounted the next frame stops the loop, removes the resize
//! listener, and releases the frame closure.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::render::render_frame;
use super::state::FieldState;

/// Renders the animated particle field as a full-viewport canvas.
///
/// `dark` selects the particle colors and can change at any time; the canvas
/// follows window resizes by repopulating the field. Pass `config` to override
/// the default particle count, speeds, and link distance.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] dark: Signal<bool>,
	#[prop(default = None)] config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<FieldState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let stopped = StopSignal::default();
	let (field_init, animate_init, resize_cb_init, stopped_init) =
		(field.clone(), animate.clone(), resize_cb.clone(), stopped.clone());

	on_cleanup({
		let stopped = stopped.clone();
		move || stopped.stop()
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle-field: no window, animation disabled");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("particle-field: viewport size unavailable, animation disabled");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("particle-field: 2d context unavailable, animation disabled");
			return;
		};

		let state = FieldState::with_config(
			config.clone().unwrap_or_default(),
			w,
			h,
			dark.get_untracked(),
			SmallRng::from_entropy(),
		);
		info!(
			"particle-field: mounted {}x{} with {} particles",
			w,
			h,
			state.particles().len()
		);
		*field_init.borrow_mut() = Some(state);

		let (field_resize, canvas_resize, stopped_resize) =
			(field_init.clone(), canvas.clone(), stopped_init.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if stopped_resize.is_stopped() {
				return;
			}
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			match field_resize.try_borrow_mut() {
				Ok(mut guard) => {
					if let Some(state) = guard.as_mut() {
						state.resize(nw, nh);
					}
				}
				Err(_) => contract_violation("resize arrived while a frame was in flight"),
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner, resize_cb_anim, stopped_anim) = (
			field_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			stopped_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if stopped_anim.is_stopped() {
				if stopped_anim.claim_teardown() {
					teardown(&animate_inner, &resize_cb_anim);
				}
				return;
			}
			match field_anim.try_borrow_mut() {
				Ok(mut guard) => {
					if let Some(state) = guard.as_mut() {
						state.tick();
						render_frame(state, &mut ctx);
					}
				}
				Err(_) => contract_violation("tick re-entered while a frame was in flight"),
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let field_theme = field.clone();
	Effect::new(move |_| {
		let is_dark = dark.get();
		if let Some(ref mut state) = *field_theme.borrow_mut() {
			state.set_theme(is_dark);
		}
	});

	let field_mm = field.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut state) = *field_mm.borrow_mut() {
			state.set_pointer(Some((x, y)));
		}
	};

	let field_ml = field.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut state) = *field_ml.borrow_mut() {
			state.set_pointer(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="particleCanvas"
			class="particle-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}

/// Unmount flag shared between the reactive owner and the frame loop.
#[derive(Clone, Debug, Default)]
struct StopSignal {
	stopped: Arc<AtomicBool>,
	torn_down: Arc<AtomicBool>,
}

impl StopSignal {
	fn stop(&self) {
		self.stopped.store(true, Ordering::Relaxed);
	}

	fn is_stopped(&self) -> bool {
		self.stopped.load(Ordering::Relaxed)
	}

	/// True exactly once, and only after [`StopSignal::stop`].
	fn claim_teardown(&self) -> bool {
		self.is_stopped() && !self.torn_down.swap(true, Ordering::Relaxed)
	}
}

type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Detaches the resize listener and frees both closures.
///
/// Runs inside the frame closure, which cannot drop itself while executing,
/// so its release is deferred to a one-shot timeout.
fn teardown(animate: &CallbackSlot, resize_cb: &CallbackSlot) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(cb) = resize_cb.borrow_mut().take() {
		let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}
	let animate = animate.clone();
	let release = Closure::once_into_js(move || {
		animate.borrow_mut().take();
	});
	let _ = window.set_timeout_with_callback(release.unchecked_ref());
	info!("particle-field: frame loop stopped");
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Overlapping access to the field breaks the one-frame-at-a-time contract.
/// Debug builds stop here; release builds drop the offending call.
fn contract_violation(what: &str) {
	if cfg!(debug_assertions) {
		panic!("particle-field: {what}");
	}
	warn!("particle-field: {what}, dropped");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn teardown_is_claimed_once_after_stop() {
		let signal = StopSignal::default();
		let shared = signal.clone();
		assert!(!signal.claim_teardown());

		shared.stop();
		assert!(signal.is_stopped());
		assert!(signal.claim_teardown());
		assert!(!signal.claim_teardown());
		assert!(!shared.claim_teardown());
	}

	#[cfg(debug_assertions)]
	#[test]
	#[should_panic(expected = "particle-field: tick re-entered while a frame was in flight")]
	fn overlapping_access_panics_in_debug_builds() {
		contract_violation("tick re-entered while a frame was in flight");
	}

	#[cfg(not(debug_assertions))]
	#[test]
	fn overlapping_access_is_dropped_in_release_builds() {
		contract_violation("resize arrived while a frame was in flight");
	}
}
