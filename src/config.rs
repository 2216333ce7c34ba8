//! Deployment parameters injected by the host page.
//!
//! The operator fills a handful of `<meta>` tags in `index.html`; the app
//! reads them once at startup. Connection fields default to empty, which
//! tells the renderer to use same-origin, pre-authenticated access to the
//! graph database.

use web_sys::Document;

/// Graph-database connection fields plus the namespace list offered by the
/// cluster-topology filter.
#[derive(Clone, Debug, Default)]
pub struct DashboardConfig {
	pub server_url: String,
	pub server_user: String,
	pub server_password: String,
	pub namespaces: Vec<String>,
}

impl DashboardConfig {
	/// Read the configuration from the current page's meta tags.
	pub fn from_page() -> Self {
		let document = web_sys::window()
			.expect("no window in this environment")
			.document()
			.expect("window has no document");

		Self {
			server_url: meta_content(&document, "topology:server-url").unwrap_or_default(),
			server_user: meta_content(&document, "topology:server-user").unwrap_or_default(),
			server_password: meta_content(&document, "topology:server-password")
				.unwrap_or_default(),
			namespaces: parse_namespace_list(
				&meta_content(&document, "topology:namespaces").unwrap_or_default(),
			),
		}
	}
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
	document
		.query_selector(&format!("meta[name='{name}']"))
		.ok()
		.flatten()
		.and_then(|tag| tag.get_attribute("content"))
}

/// Split a comma-separated namespace list, dropping empty entries.
pub fn parse_namespace_list(raw: &str) -> Vec<String> {
	raw.split(',')
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn namespace_list_splits_on_commas() {
		assert_eq!(
			parse_namespace_list("kube-system, prod ,dev"),
			vec!["kube-system", "prod", "dev"]
		);
	}

	#[test]
	fn empty_value_yields_no_namespaces() {
		assert!(parse_namespace_list("").is_empty());
		assert!(parse_namespace_list(" , ,").is_empty());
	}

	#[test]
	fn default_connection_is_same_origin() {
		let config = DashboardConfig::default();
		assert!(config.server_url.is_empty());
		assert!(config.server_user.is_empty());
		assert!(config.server_password.is_empty());
	}
}
