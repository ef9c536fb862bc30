//! Light/dark theming for the particle field.
//!
//! The field only ever uses two colors per theme: one for particles and one for
//! the proximity links between them.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Whether two colors share the same RGB channels, ignoring alpha.
	pub fn same_rgb(self, other: Color) -> bool {
		self.r == other.r && self.g == other.g && self.b == other.b
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Site-wide color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	pub fn from_dark(is_dark: bool) -> Self {
		if is_dark { Self::Dark } else { Self::Light }
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Value stored in `localStorage` and the `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Parses a stored theme name. Anything other than `"dark"` is light.
	pub fn parse(value: &str) -> Self {
		if value.trim().eq_ignore_ascii_case("dark") {
			Self::Dark
		} else {
			Self::Light
		}
	}

	/// Font Awesome icon class for the toggle button (shows the mode you switch to).
	pub fn icon_class(self) -> &'static str {
		match self {
			Self::Dark => "fas fa-sun",
			Self::Light => "fas fa-moon",
		}
	}
}

/// Particle and link colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	pub particle: Color,
	pub link: Color,
}

impl Palette {
	/// White particles on a dark page.
	pub const fn dark() -> Self {
		Self {
			particle: Color::rgb(255, 255, 255),
			link: Color::rgb(255, 255, 255),
		}
	}

	/// Indigo particles on a light page.
	pub const fn light() -> Self {
		Self {
			particle: Color::rgb(99, 102, 241),
			link: Color::rgb(99, 102, 241),
		}
	}

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::dark(),
			ThemeMode::Light => Self::light(),
		}
	}
}
