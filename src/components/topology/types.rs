use super::query::{TopologyQuery, view_query};

/// Pattern matching every namespace; the filter in effect before anything
/// narrower is picked.
pub const ALL_NAMESPACES: &str = ".*";

/// The canned views, in the order their selector links are listed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TopologyView {
	All,
	WithoutPods,
	WithoutBgpPeers,
	PodsAndNodes,
	OnlyBgpPeers,
}

impl TopologyView {
	/// Registry order, mirrored by the selector list in the cluster pane.
	pub const ALL: [TopologyView; 5] = [
		TopologyView::All,
		TopologyView::WithoutPods,
		TopologyView::WithoutBgpPeers,
		TopologyView::PodsAndNodes,
		TopologyView::OnlyBgpPeers,
	];

	/// Stable identifier, doubling as the DOM id of the view's selector link.
	pub fn id(self) -> &'static str {
		match self {
			TopologyView::All => "All",
			TopologyView::WithoutPods => "WithoutPods",
			TopologyView::WithoutBgpPeers => "WithoutBgpPeers",
			TopologyView::PodsAndNodes => "PodsAndNodes",
			TopologyView::OnlyBgpPeers => "OnlyBgpPeers",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			TopologyView::All => "All",
			TopologyView::WithoutPods => "Without Pods",
			TopologyView::WithoutBgpPeers => "Without BGP Peers",
			TopologyView::PodsAndNodes => "Pods and Nodes",
			TopologyView::OnlyBgpPeers => "Only BGP Peers",
		}
	}
}

/// The active view and namespace filter. A single instance lives behind one
/// signal for the whole session; selector links write it, draws read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
	pub view: TopologyView,
	pub namespace: String,
}

impl Selection {
	pub fn new() -> Self {
		Selection {
			view: TopologyView::WithoutPods,
			namespace: ALL_NAMESPACES.to_owned(),
		}
	}

	pub fn select_view(&mut self, view: TopologyView) {
		self.view = view;
	}

	/// Changing the namespace keeps the current view; the caller redraws it.
	pub fn select_namespace(&mut self, namespace: &str) {
		self.namespace = namespace.to_owned();
	}

	/// The query for the current view under the current namespace filter.
	pub fn current_query(&self) -> TopologyQuery {
		view_query(self.view, &self.namespace)
	}
}

impl Default for Selection {
	fn default() -> Self {
		Selection::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_selection_is_without_pods_across_all_namespaces() {
		let selection = Selection::new();
		assert_eq!(selection.view, TopologyView::WithoutPods);
		assert_eq!(selection.namespace, ALL_NAMESPACES);
	}

	#[test]
	fn selector_link_ids_are_stable() {
		let ids: Vec<&str> = TopologyView::ALL.iter().map(|view| view.id()).collect();
		assert_eq!(
			ids,
			[
				"All",
				"WithoutPods",
				"WithoutBgpPeers",
				"PodsAndNodes",
				"OnlyBgpPeers"
			]
		);
	}

	#[test]
	fn namespace_change_keeps_the_selected_view() {
		let mut selection = Selection::new();
		selection.select_view(TopologyView::WithoutBgpPeers);
		selection.select_namespace("prod");

		assert_eq!(selection.view, TopologyView::WithoutBgpPeers);
		let query = selection.current_query();
		assert!(query.cypher.contains("p.ns =~ 'prod'"));
		assert!(query.cypher.contains("RUNNING_IN"));
	}

	#[test]
	fn view_change_keeps_the_selected_namespace() {
		let mut selection = Selection::new();
		selection.select_namespace("kube-system");
		selection.select_view(TopologyView::All);

		assert_eq!(selection.namespace, "kube-system");
		assert!(
			selection
				.current_query()
				.cypher
				.contains("p.ns =~ 'kube-system'")
		);
	}
}
