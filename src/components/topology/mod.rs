mod component;
mod neovis;
mod query;
mod types;

pub use component::{
	ClusterTopology, LeafTopology, NodeTopology, PodTopology, TopologyTable, draw_namespace,
	draw_view,
};
pub use neovis::{render_topology, viz_config};
pub use query::{TopologyQuery, is_valid_ip, leaf_query, node_query, pod_query, view_query};
pub use types::{ALL_NAMESPACES, Selection, TopologyView};
