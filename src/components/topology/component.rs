use leptos::prelude::*;

use super::neovis::render_topology;
use super::query::{leaf_query, node_query, pod_query};
use super::types::{ALL_NAMESPACES, Selection, TopologyView};
use crate::config::DashboardConfig;

/// Container the canned cluster views render into.
const CLUSTER_CONTAINER: &str = "viz";

/// Select `view` and redraw the cluster container under the current
/// namespace filter.
pub fn draw_view(selection: RwSignal<Selection>, config: &DashboardConfig, view: TopologyView) {
	selection.update(|s| s.select_view(view));
	let query = selection.with_untracked(Selection::current_query);
	render_topology(config, CLUSTER_CONTAINER, &query);
}

/// Narrow the namespace filter and redraw the currently selected view.
pub fn draw_namespace(selection: RwSignal<Selection>, config: &DashboardConfig, namespace: &str) {
	selection.update(|s| s.select_namespace(namespace));
	let query = selection.with_untracked(Selection::current_query);
	render_topology(config, CLUSTER_CONTAINER, &query);
}

/// Cluster pane: view and namespace selectors next to the main container.
#[component]
pub fn ClusterTopology() -> impl IntoView {
	let selection = expect_context::<RwSignal<Selection>>();
	let config = expect_context::<DashboardConfig>();

	let mut namespaces = vec![ALL_NAMESPACES.to_owned()];
	namespaces.extend(config.namespaces.iter().cloned());

	view! {
		<div class="pane pane--cluster">
			<aside class="pane__sidebar">
				<h3>"Different Views"</h3>
				<ul id="selected_views">
					{TopologyView::ALL
						.into_iter()
						.map(|view| {
							let cfg = config.clone();
							view! {
								<li>
									<a
										id=view.id()
										class:selected=move || selection.with(|s| s.view == view)
										on:click=move |_| draw_view(selection, &cfg, view)
									>
										{view.label()}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>

				<h3>"Namespaces"</h3>
				<ul id="selected_namespace">
					{namespaces
						.into_iter()
						.map(|ns| {
							let cfg = config.clone();
							let label = if ns == ALL_NAMESPACES {
								"All Namespaces".to_owned()
							} else {
								ns.clone()
							};
							let ns_current = ns.clone();
							let ns_click = ns.clone();
							view! {
								<li>
									<a
										id=ns
										class:selected=move || {
											selection.with(|s| s.namespace == ns_current)
										}
										on:click=move |_| draw_namespace(selection, &cfg, &ns_click)
									>
										{label}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</aside>
			<div id="viz" class="viz"></div>
		</div>
	}
}

/// Leaf pane: lookup of one leaf switch by name.
#[component]
pub fn LeafTopology() -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let input = NodeRef::<leptos::html::Input>::new();

	let on_submit = move |_| {
		let name = input.get().expect("leaf name input is not mounted").value();
		render_topology(&config, "viz_leaf", &leaf_query(&name));
	};

	view! {
		<div class="pane">
			<p class="pane__hint">"Type the leaf name"</p>
			<input id="leafname" node_ref=input type="text" />
			<button id="leafBttn" on:click=on_submit>"Submit"</button>
			<div id="viz_leaf" class="viz"></div>
		</div>
	}
}

/// Node pane: lookup of one node by name.
#[component]
pub fn NodeTopology() -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let input = NodeRef::<leptos::html::Input>::new();

	let on_submit = move |_| {
		let name = input.get().expect("node name input is not mounted").value();
		render_topology(&config, "viz_node", &node_query(&name));
	};

	view! {
		<div class="pane">
			<p class="pane__hint">"Type the node name"</p>
			<input id="nodename" node_ref=input type="text" />
			<button id="nodeBttn" on:click=on_submit>"Submit"</button>
			<div id="viz_node" class="viz"></div>
		</div>
	}
}

/// Pod pane: lookup of one pod by name or IP, under the active namespace.
#[component]
pub fn PodTopology() -> impl IntoView {
	let selection = expect_context::<RwSignal<Selection>>();
	let config = expect_context::<DashboardConfig>();
	let input = NodeRef::<leptos::html::Input>::new();

	let on_submit = move |_| {
		let name = input.get().expect("pod name input is not mounted").value();
		render_topology(&config, "viz_pod", &pod_query(&name));
	};

	view! {
		<div class="pane">
			<p class="pane__hint">
				"Selected Namespace: " {move || selection.with(|s| s.namespace.clone())}
			</p>
			<p class="pane__hint">"Type the pod name"</p>
			<input id="podname" node_ref=input type="text" />
			<button id="podBttn" on:click=on_submit>"Submit"</button>
			<div id="viz_pod" class="viz"></div>
		</div>
	}
}

/// Table pane. The table widget itself is external, like the graph renderer;
/// this pane only provides its mount point and the view selector.
#[component]
pub fn TopologyTable() -> impl IntoView {
	view! {
		<div class="pane">
			<h3>"Table Views"</h3>
			<ul id="table_views">
				<li>
					<a class="selected">"Complete Topology"</a>
				</li>
			</ul>
			<div id="table" class="table-container"></div>
		</div>
	}
}
