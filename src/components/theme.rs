//! Light/dark colour mode for the dashboard chrome.
//!
//! The mode lives in three places that must stay in sync: the `data-theme`
//! marker on the document root, the enabled/disabled state of the contrast
//! stylesheet, and the persisted value in localStorage. `set_theme` writes
//! all three; `toggle_colour_mode` reads only the live marker.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement, Storage};

/// localStorage key holding the persisted colour mode.
pub const MODE_STORAGE_KEY: &str = "mode";

const TOGGLE_BUTTON_ID: &str = "colour-mode-button";
const CONTRAST_STYLESHEET_ID: &str = "contrast-stylesheet";

/// The two colour modes. Any marker value that is not explicitly dark reads
/// as light.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
	Light,
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn from_marker(value: &str) -> Self {
		if value == "dark" {
			ThemeMode::Dark
		} else {
			ThemeMode::Light
		}
	}

	pub fn opposite(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

fn document() -> Document {
	web_sys::window()
		.expect("no window in this environment")
		.document()
		.expect("window has no document")
}

fn local_storage() -> Storage {
	web_sys::window()
		.expect("no window in this environment")
		.local_storage()
		.expect("localStorage is not accessible")
		.expect("localStorage is disabled")
}

/// Apply `mode` to the page and persist it.
pub fn set_theme(mode: ThemeMode) {
	let document = document();

	let root = document
		.document_element()
		.expect("document has no root element");
	root.set_attribute("data-theme", mode.as_str())
		.expect("cannot set the theme marker");

	let button = document
		.get_element_by_id(TOGGLE_BUTTON_ID)
		.expect("colour mode button is missing from the page");
	let classes = button.class_list();
	match mode {
		ThemeMode::Dark => {
			classes
				.remove_1("fa-dragon")
				.expect("cannot swap the button icon");
			classes
				.add_1("fa-dungeon")
				.expect("cannot swap the button icon");
		}
		ThemeMode::Light => {
			classes
				.add_1("fa-dragon")
				.expect("cannot swap the button icon");
			classes
				.remove_1("fa-dungeon")
				.expect("cannot swap the button icon");
		}
	}

	let stylesheet: HtmlLinkElement = document
		.get_element_by_id(CONTRAST_STYLESHEET_ID)
		.expect("contrast stylesheet link is missing from the page")
		.dyn_into()
		.expect("contrast stylesheet element is not a <link>");
	stylesheet.set_disabled(mode == ThemeMode::Light);

	local_storage()
		.set_item(MODE_STORAGE_KEY, mode.as_str())
		.expect("cannot persist the colour mode");
}

/// Flip the colour mode based on the live theme marker, never the persisted
/// value.
pub fn toggle_colour_mode() {
	let current = document()
		.document_element()
		.expect("document has no root element")
		.get_attribute("data-theme")
		.map(|marker| ThemeMode::from_marker(&marker))
		.unwrap_or(ThemeMode::Light);
	set_theme(current.opposite());
}

/// The persisted colour mode, if one was ever stored.
pub fn stored_theme() -> Option<ThemeMode> {
	local_storage()
		.get_item(MODE_STORAGE_KEY)
		.expect("cannot read the persisted colour mode")
		.map(|value| ThemeMode::from_marker(&value))
}

/// Button flipping the colour mode. Applies the stored mode once on mount so
/// the choice survives reloads.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	Effect::new(move |_| {
		if let Some(mode) = stored_theme() {
			set_theme(mode);
		}
	});

	view! {
		<button
			id="colour-mode-button"
			class="colour-mode fa fa-dragon"
			title="Toggle colour mode"
			on:click=move |_| toggle_colour_mode()
		></button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn marker_values_other_than_dark_read_as_light() {
		assert_eq!(ThemeMode::from_marker("dark"), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_marker("light"), ThemeMode::Light);
		assert_eq!(ThemeMode::from_marker(""), ThemeMode::Light);
		assert_eq!(ThemeMode::from_marker("Dark"), ThemeMode::Light);
	}

	#[test]
	fn opposite_flips_both_ways() {
		assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
	}

	#[test]
	fn marker_round_trips_through_storage_values() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_eq!(ThemeMode::from_marker(mode.as_str()), mode);
		}
	}
}
