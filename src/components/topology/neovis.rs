//! Binding and configuration for the NeoVis renderer.
//!
//! The library is loaded globally by the host page; this module builds its
//! configuration object and hands a query over. Rendering is fire-and-forget:
//! the library owns layout and stabilization, and a later draw into the same
//! container simply replaces the previous visualization.

use js_sys::Reflect;
use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::query::TopologyQuery;
use crate::config::DashboardConfig;

#[wasm_bindgen]
extern "C" {
	/// Renderer class exported as `NeoVis.default` by the bundled library.
	#[wasm_bindgen(js_namespace = NeoVis, js_name = "default")]
	pub type Renderer;

	/// `new NeoVis.default(config)`
	#[wasm_bindgen(constructor, js_namespace = NeoVis, js_class = "default")]
	pub fn new(config: &JsValue) -> Renderer;

	/// Kick off querying and layout; returns immediately.
	#[wasm_bindgen(method, js_class = "default")]
	pub fn render(this: &Renderer);

	/// Key under which the library looks up the fallback relationship style.
	#[wasm_bindgen(thread_local_v2, js_namespace = NeoVis)]
	pub static NEOVIS_DEFAULT_CONFIG: JsValue;
}

/// Full renderer configuration for one draw request.
#[derive(Serialize)]
pub struct VizConfig<'a> {
	pub container_id: &'a str,
	pub server_url: &'a str,
	pub server_user: &'a str,
	pub server_password: &'a str,
	pub initial_cypher: &'a str,
	pub arrows: bool,
	pub fix_nodes_in_place_on_drag: bool,
	pub physics: Physics,
	pub labels: LabelStyles,
	pub relationships: RelationshipStyles,
}

#[derive(Serialize)]
pub struct Physics {
	#[serde(rename = "adaptiveTimestep")]
	pub adaptive_timestep: bool,
	#[serde(rename = "barnesHut")]
	pub barnes_hut: BarnesHut,
	pub stabilization: Stabilization,
}

/// Left empty: the library's own Barnes-Hut defaults apply.
#[derive(Serialize)]
pub struct BarnesHut {}

#[derive(Serialize)]
pub struct Stabilization {
	pub iterations: u32,
	pub fit: bool,
}

/// Visual attributes for one node label.
#[derive(Serialize)]
pub struct LabelStyle {
	pub caption: &'static str,
	pub size: u32,
	pub image: &'static str,
	pub font: FontStyle,
}

#[derive(Serialize)]
pub struct FontStyle {
	pub size: u32,
	pub color: &'static str,
}

/// Styles keyed by graph label, serialized under the database's label names.
#[derive(Serialize)]
pub struct LabelStyles {
	#[serde(rename = "Node")]
	pub node: LabelStyle,
	#[serde(rename = "Pod")]
	pub pod: LabelStyle,
	#[serde(rename = "VM_Host")]
	pub vm_host: LabelStyle,
	#[serde(rename = "Switch")]
	pub switch: LabelStyle,
}

/// Visual attributes for one relationship kind. Unset fields are omitted so
/// the library falls back to its defaults.
#[derive(Serialize)]
pub struct RelationshipStyle {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dashes: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thickness: Option<&'static str>,
}

#[derive(Serialize)]
pub struct RelationshipStyles {
	#[serde(rename = "PEERED_INTO")]
	pub peered_into: RelationshipStyle,
	#[serde(rename = "CONNECTED_TO")]
	pub connected_to: RelationshipStyle,
}

/// Rule applied to every relationship kind without an explicit entry.
pub fn fallback_relationship_style() -> RelationshipStyle {
	RelationshipStyle {
		color: None,
		dashes: None,
		caption: Some("defaultCaption"),
		thickness: Some("defaultThicknessProperty"),
	}
}

/// Build the configuration for one draw request. Pods are captioned with
/// their own name only when `show_pod_names` is set; every other label is
/// always captioned by name.
pub fn viz_config<'a>(
	show_pod_names: bool,
	container_id: &'a str,
	cypher: &'a str,
	connection: &'a DashboardConfig,
) -> VizConfig<'a> {
	let pod_caption = if show_pod_names { "name" } else { "pod" };

	VizConfig {
		container_id,
		server_url: &connection.server_url,
		server_user: &connection.server_user,
		server_password: &connection.server_password,
		initial_cypher: cypher,
		arrows: show_pod_names,
		fix_nodes_in_place_on_drag: true,
		physics: Physics {
			adaptive_timestep: true,
			barnes_hut: BarnesHut {},
			stabilization: Stabilization {
				iterations: 350,
				fit: true,
			},
		},
		labels: LabelStyles {
			node: LabelStyle {
				caption: "name",
				size: 3,
				image: "./assets/img/node.svg",
				font: FontStyle {
					size: 20,
					color: "#6e1313",
				},
			},
			pod: LabelStyle {
				caption: pod_caption,
				size: 2,
				image: "./assets/img/pod.svg",
				font: FontStyle {
					size: 18,
					color: "#41136e",
				},
			},
			vm_host: LabelStyle {
				caption: "name",
				size: 5,
				image: "./assets/img/esxi.png",
				font: FontStyle {
					size: 22,
					color: "#000000",
				},
			},
			switch: LabelStyle {
				caption: "name",
				size: 4,
				image: "./assets/img/switch.png",
				font: FontStyle {
					size: 22,
					color: "#000000",
				},
			},
		},
		relationships: RelationshipStyles {
			peered_into: RelationshipStyle {
				color: Some("#CD5C5C"),
				dashes: Some("true"),
				caption: None,
				thickness: None,
			},
			connected_to: RelationshipStyle {
				color: Some("#7A8A24"),
				dashes: None,
				caption: Some("interface"),
				thickness: None,
			},
		},
	}
}

/// Hand `query` to the renderer, targeting the container with id
/// `container_id`. The previous visualization in that container, if any, is
/// replaced without teardown.
pub fn render_topology(connection: &DashboardConfig, container_id: &str, query: &TopologyQuery) {
	let config = viz_config(query.show_pod_names, container_id, &query.cypher, connection);
	let js_config =
		serde_wasm_bindgen::to_value(&config).expect("renderer config must serialize");
	attach_fallback_style(&js_config).expect("renderer config must accept the fallback style");

	debug!("rendering into #{container_id}: {}", query.cypher);
	let viz = Renderer::new(&js_config);
	viz.render();
}

// The fallback rule lives under a key owned by the library, so it cannot go
// through serde with the rest of the relationship map.
fn attach_fallback_style(config: &JsValue) -> Result<(), JsValue> {
	let relationships = Reflect::get(config, &JsValue::from_str("relationships"))?;
	let fallback = serde_wasm_bindgen::to_value(&fallback_relationship_style())
		.map_err(JsValue::from)?;
	NEOVIS_DEFAULT_CONFIG.with(|key| Reflect::set(&relationships, key, &fallback))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config_json(show_pod_names: bool) -> serde_json::Value {
		let connection = DashboardConfig::default();
		let config = viz_config(show_pod_names, "viz", "MATCH (n) RETURN n", &connection);
		serde_json::to_value(&config).unwrap()
	}

	#[test]
	fn pod_caption_follows_the_flag() {
		assert_eq!(config_json(true)["labels"]["Pod"]["caption"], "name");
		assert_eq!(config_json(false)["labels"]["Pod"]["caption"], "pod");
	}

	#[test]
	fn other_labels_always_use_name() {
		for flag in [true, false] {
			let json = config_json(flag);
			for label in ["Node", "VM_Host", "Switch"] {
				assert_eq!(json["labels"][label]["caption"], "name");
			}
		}
	}

	#[test]
	fn arrows_mirror_the_caption_flag() {
		assert_eq!(config_json(true)["arrows"], true);
		assert_eq!(config_json(false)["arrows"], false);
	}

	#[test]
	fn query_and_container_are_threaded_through() {
		let json = config_json(false);
		assert_eq!(json["container_id"], "viz");
		assert_eq!(json["initial_cypher"], "MATCH (n) RETURN n");
	}

	#[test]
	fn physics_parameters_are_fixed() {
		let json = config_json(false);
		assert_eq!(json["physics"]["adaptiveTimestep"], true);
		assert_eq!(json["physics"]["stabilization"]["iterations"], 350);
		assert_eq!(json["physics"]["stabilization"]["fit"], true);
		assert_eq!(json["fix_nodes_in_place_on_drag"], true);
	}

	#[test]
	fn relationship_styles_match_the_legend() {
		let json = config_json(false);
		assert_eq!(json["relationships"]["PEERED_INTO"]["color"], "#CD5C5C");
		assert_eq!(json["relationships"]["PEERED_INTO"]["dashes"], "true");
		assert!(json["relationships"]["PEERED_INTO"].get("caption").is_none());
		assert_eq!(json["relationships"]["CONNECTED_TO"]["color"], "#7A8A24");
		assert_eq!(json["relationships"]["CONNECTED_TO"]["caption"], "interface");
	}

	#[test]
	fn fallback_rule_uses_library_default_properties() {
		let json = serde_json::to_value(fallback_relationship_style()).unwrap();
		assert_eq!(json["thickness"], "defaultThicknessProperty");
		assert_eq!(json["caption"], "defaultCaption");
		assert!(json.get("color").is_none());
	}

	#[test]
	fn connection_fields_come_from_the_dashboard_config() {
		let connection = DashboardConfig {
			server_url: "bolt://db:7687".into(),
			server_user: "viewer".into(),
			server_password: "secret".into(),
			namespaces: vec![],
		};
		let config = viz_config(false, "viz", "MATCH (n) RETURN n", &connection);
		let json = serde_json::to_value(&config).unwrap();
		assert_eq!(json["server_url"], "bolt://db:7687");
		assert_eq!(json["server_user"], "viewer");
		assert_eq!(json["server_password"], "secret");
	}
}
