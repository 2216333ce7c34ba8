//! Cypher templates for the canned views and the ad-hoc lookups.
//!
//! The query text is a contract with the graph database and is preserved
//! verbatim, casing quirks included. The namespace is interpolated as a
//! regex pattern and lookup inputs are interpolated as typed; neither is
//! escaped. This dashboard is an operator-facing tool and treats its inputs
//! as trusted.

use std::net::Ipv4Addr;

use super::types::TopologyView;

/// A ready-to-run query plus the caption mode it should be rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologyQuery {
	pub cypher: String,
	/// When set, pods are captioned with their own name instead of the
	/// generic "pod" label, and edges get direction arrows.
	pub show_pod_names: bool,
}

/// Build the query for one of the canned views, filtered by `namespace`.
pub fn view_query(view: TopologyView, namespace: &str) -> TopologyQuery {
	match view {
		TopologyView::All => TopologyQuery {
			cypher: format!(
				"MATCH (p:Pod)-[r]->(m:Node)-[r2*1..2]->(a) where p.ns =~ '{namespace}' return *"
			),
			show_pod_names: false,
		},
		TopologyView::WithoutPods => TopologyQuery {
			cypher: format!(
				"MATCH (p:Pod)-[r]->(m:Node)-[r2*1..2]->(a) where p.ns =~ '{namespace}' return m,r2,a"
			),
			show_pod_names: false,
		},
		TopologyView::WithoutBgpPeers => TopologyQuery {
			cypher: format!(
				"MATCH (p:Pod)-->(n:Node)-[r:RUNNING_IN]-(v:VM_Host)-[r1:CONNECTED_TO]-(l:Switch) WHERE p.ns =~ '{namespace}' RETURN r, r1, n, v, l"
			),
			show_pod_names: false,
		},
		TopologyView::PodsAndNodes => TopologyQuery {
			cypher: format!("MATCH (p:Pod)-[r]->(n2) WHERE p.ns =~ '{namespace}' RETURN *"),
			show_pod_names: true,
		},
		TopologyView::OnlyBgpPeers => TopologyQuery {
			cypher: format!(
				"MATCH (p:Pod)-->(n:Node)-[r:PEERED_INTO]->(s:Switch) WHERE p.ns =~ '{namespace}' RETURN r, n,s"
			),
			show_pod_names: false,
		},
	}
}

/// Lookup of a single node by exact name, up to three hops out.
pub fn node_query(name: &str) -> TopologyQuery {
	TopologyQuery {
		cypher: format!(
			"MATCH (p:Pod)-[r]->(n:Node)-[r1*1..3]->(m) WHERE n.name= \"{name}\" RETURN *"
		),
		show_pod_names: true,
	}
}

/// Lookup of a single pod by name, or by address when the input reads as an
/// IPv4 address.
pub fn pod_query(input: &str) -> TopologyQuery {
	let attribute = if is_valid_ip(input) { "ip" } else { "name" };
	TopologyQuery {
		cypher: format!(
			"MATCH (p:Pod)-[r*1..3]->(m) WHERE p.{attribute}= \"{input}\" RETURN p, r,m"
		),
		show_pod_names: true,
	}
}

/// Lookup of a single leaf switch by exact name, up to three hops out.
pub fn leaf_query(name: &str) -> TopologyQuery {
	TopologyQuery {
		cypher: format!("MATCH (s:Switch)-[r*1..3]-(m) WHERE s.name= \"{name}\" RETURN *"),
		show_pod_names: true,
	}
}

/// True iff `input` is a dotted-quad IPv4 address: four octets 0-255, no
/// leading zeros, nothing else in the string.
pub fn is_valid_ip(input: &str) -> bool {
	input.parse::<Ipv4Addr>().is_ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_plain_dotted_quads() {
		assert!(is_valid_ip("192.168.1.1"));
		assert!(is_valid_ip("0.0.0.0"));
		assert!(is_valid_ip("255.255.255.255"));
	}

	#[test]
	fn rejects_out_of_range_octets() {
		assert!(!is_valid_ip("256.1.1.1"));
		assert!(!is_valid_ip("1.2.3.300"));
	}

	#[test]
	fn rejects_wrong_segment_counts() {
		assert!(!is_valid_ip("1.2.3"));
		assert!(!is_valid_ip("1.2.3.4.5"));
		assert!(!is_valid_ip(""));
	}

	#[test]
	fn rejects_leading_zeros_and_whitespace() {
		assert!(!is_valid_ip("01.2.3.4"));
		assert!(!is_valid_ip(" 1.2.3.4"));
		assert!(!is_valid_ip("1.2.3.4 "));
	}

	#[test]
	fn namespace_is_substituted_into_every_view() {
		for view in TopologyView::ALL {
			let query = view_query(view, "prod");
			assert!(
				query.cypher.contains("p.ns =~ 'prod'"),
				"missing namespace filter in {:?}: {}",
				view,
				query.cypher
			);
		}
	}

	#[test]
	fn all_and_without_pods_differ_only_in_the_return_clause() {
		let all = view_query(TopologyView::All, ".*");
		let without_pods = view_query(TopologyView::WithoutPods, ".*");
		assert!(all.cypher.ends_with("return *"));
		assert!(without_pods.cypher.ends_with("return m,r2,a"));
		assert_eq!(
			all.cypher.trim_end_matches("return *"),
			without_pods.cypher.trim_end_matches("return m,r2,a")
		);
	}

	#[test]
	fn only_pods_and_nodes_shows_pod_names() {
		for view in TopologyView::ALL {
			let expected = view == TopologyView::PodsAndNodes;
			assert_eq!(view_query(view, ".*").show_pod_names, expected);
		}
	}

	#[test]
	fn bgp_views_traverse_their_relationships() {
		let without = view_query(TopologyView::WithoutBgpPeers, ".*");
		assert!(without.cypher.contains("[r:RUNNING_IN]"));
		assert!(without.cypher.contains("[r1:CONNECTED_TO]"));

		let only = view_query(TopologyView::OnlyBgpPeers, ".*");
		assert!(only.cypher.contains("[r:PEERED_INTO]"));
	}

	#[test]
	fn pod_lookup_picks_the_attribute_by_input_shape() {
		let by_ip = pod_query("10.0.0.5");
		assert!(by_ip.cypher.contains("p.ip= \"10.0.0.5\""));

		let by_name = pod_query("pod-abc");
		assert!(by_name.cypher.contains("p.name= \"pod-abc\""));

		assert!(by_ip.show_pod_names);
		assert!(by_name.show_pod_names);
	}

	#[test]
	fn node_lookup_matches_on_exact_name() {
		let query = node_query("1234abc");
		assert!(query.cypher.contains("n.name= \"1234abc\""));
		assert!(query.cypher.contains("[r1*1..3]"));
		assert!(query.show_pod_names);
	}

	#[test]
	fn leaf_lookup_is_anchored_on_the_switch() {
		let query = leaf_query("leaf-204");
		assert!(query.cypher.contains("(s:Switch)"));
		assert!(query.cypher.contains("s.name= \"leaf-204\""));
	}
}
