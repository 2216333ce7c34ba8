use leptos::prelude::*;

/// Overlay dialog with a title bar and a close control. Visibility is driven
/// by the `open` signal so triggers can live anywhere on the page.
#[component]
pub fn Modal(
	id: &'static str,
	title: &'static str,
	open: RwSignal<bool>,
	children: Children,
) -> impl IntoView {
	view! {
		<div id=id class="modal" class:open=move || open.get()>
			<div class="modal__dialog" role="dialog" aria-label=title>
				<header class="modal__header">
					<h2>{title}</h2>
					<button class="modal__close" on:click=move |_| open.set(false)>
						"\u{2715}"
					</button>
				</header>
				<div class="modal__body">{children()}</div>
			</div>
		</div>
	}
}
