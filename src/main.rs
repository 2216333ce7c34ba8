//! Binary entry for the Trunk build.

use topology_dashboard::App;

fn main() {
	topology_dashboard::init_logging();
	leptos::mount::mount_to_body(App);
}
