use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::theme::ThemeToggle;
use crate::components::topology::{
	ClusterTopology, LeafTopology, NodeTopology, PodTopology, Selection, TopologyTable,
	render_topology,
};
use crate::config::DashboardConfig;

/// The five top-level tabs; exactly one pane is visible at a time.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
	Cluster,
	Leaf,
	Node,
	Pod,
	Table,
}

impl Tab {
	const ALL: [Tab; 5] = [Tab::Cluster, Tab::Leaf, Tab::Node, Tab::Pod, Tab::Table];

	fn id(self) -> &'static str {
		match self {
			Tab::Cluster => "ct_tab",
			Tab::Leaf => "lt_tab",
			Tab::Node => "nt_tab",
			Tab::Pod => "pt_tab",
			Tab::Table => "tt_tab",
		}
	}

	fn label(self) -> &'static str {
		match self {
			Tab::Cluster => "Cluster Topology",
			Tab::Leaf => "Leaf Topology",
			Tab::Node => "Node Topology",
			Tab::Pod => "Pod Topology",
			Tab::Table => "Topology Table",
		}
	}
}

/// Dashboard page: masthead, tab bar, one pane per tab, the three modals.
#[component]
pub fn Home() -> impl IntoView {
	let config = DashboardConfig::from_page();
	provide_context(config.clone());

	let selection = RwSignal::new(Selection::new());
	provide_context(selection);

	let (active_tab, set_active_tab) = signal(Tab::Cluster);

	let info_open = RwSignal::new(false);
	let legend_open = RwSignal::new(false);
	let regenerate_open = RwSignal::new(false);

	// First paint: the default view under the match-all namespace.
	let initial = config.clone();
	Effect::new(move |_| {
		let query = selection.with_untracked(Selection::current_query);
		render_topology(&initial, "viz", &query);
	});

	let regen = config.clone();
	let on_regenerate = move |_| {
		let query = selection.with_untracked(Selection::current_query);
		render_topology(&regen, "viz", &query);
		regenerate_open.set(false);
	};

	view! {
		<header class="masthead">
			<h1 class="masthead__title">"Kubernetes ACI Topology"</h1>
			<nav class="masthead__actions">
				<a
					class="masthead__icon fa fa-info-circle"
					data-balloon="Open dashboard information"
					data-balloon-pos="down"
					on:click=move |_| info_open.set(true)
				></a>
				<a
					class="masthead__icon fa fa-map"
					data-balloon="Graph Legend"
					data-balloon-pos="down"
					on:click=move |_| legend_open.set(true)
				></a>
				<a
					class="masthead__icon fa fa-sync"
					data-balloon="Regenerate Topology"
					data-balloon-pos="down"
					on:click=move |_| regenerate_open.set(true)
				></a>
				<ThemeToggle />
			</nav>
		</header>

		<ul class="tabs">
			{Tab::ALL
				.into_iter()
				.map(|tab| {
					view! {
						<li class="tabs__item">
							<a
								id=tab.id()
								class:active=move || active_tab.get() == tab
								on:click=move |_| set_active_tab.set(tab)
							>
								{tab.label()}
							</a>
						</li>
					}
				})
				.collect_view()}
		</ul>

		<div class="tab-pane" class:active=move || active_tab.get() == Tab::Cluster>
			<ClusterTopology />
		</div>
		<div class="tab-pane" class:active=move || active_tab.get() == Tab::Leaf>
			<LeafTopology />
		</div>
		<div class="tab-pane" class:active=move || active_tab.get() == Tab::Node>
			<NodeTopology />
		</div>
		<div class="tab-pane" class:active=move || active_tab.get() == Tab::Pod>
			<PodTopology />
		</div>
		<div class="tab-pane" class:active=move || active_tab.get() == Tab::Table>
			<TopologyTable />
		</div>

		<Modal id="modal-default" title="Dashboard Information" open=info_open>
			<p>
				"Visualizes the Kubernetes and ACI network topology stored in the "
				"graph database. Pick a view and a namespace under Cluster Topology, "
				"or look up a single leaf, node or pod by name."
			</p>
		</Modal>

		<Modal id="modal-legend" title="Graph Legend" open=legend_open>
			<ul class="legend">
				<li>"Node: kubernetes worker, dark red caption"</li>
				<li>"Pod: workload, purple caption"</li>
				<li>"VM Host: hypervisor the node runs in"</li>
				<li>"Switch: fabric leaf"</li>
				<li>"Dashed red edge: BGP peering"</li>
				<li>"Olive edge: physical connection, captioned by interface"</li>
			</ul>
		</Modal>

		<Modal id="modal-small" title="Regenerate Topology" open=regenerate_open>
			<p>"Redraw the current view against the latest topology data."</p>
			<button class="button" on:click=on_regenerate>
				"Regenerate"
			</button>
		</Modal>
	}
}
