use leptos::*;
use leptos_router::RouterContext;

use crate::components::{
    common::{Button, ButtonVariant},
    toast::Toasts,
};

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
];

const NAV_LINK_BASE: &str = "px-3 py-2 rounded-md text-sm font-medium";

pub fn is_active_path(current: &str, href: &str) -> bool {
    if href == "/" {
        current.is_empty() || current == "/"
    } else {
        current == href || current.starts_with(&format!("{}/", href))
    }
}

fn nav_link_class(current: &str, href: &str) -> String {
    if is_active_path(current, href) {
        format!("{NAV_LINK_BASE} bg-action-primary-bg text-action-primary-text")
    } else {
        format!("{NAV_LINK_BASE} text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover")
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_context::<RouterContext>().map(|router| router.pathname());
    let current_path = Signal::derive(move || pathname.map(|path| path.get()).unwrap_or_default());
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|(href, label)| {
                let href = *href;
                view! {
                    <a
                        href=href
                        class=move || {
                            let class = nav_link_class(&current_path.get(), href);
                            if mobile { format!("block {class}") } else { class }
                        }
                        aria-current=move || is_active_path(&current_path.get(), href).then_some("page")
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"HRMS Lite"</a>
                    <nav class="hidden lg:flex space-x-4">{links(false)}</nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">{links(true)}</nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
            <Toasts/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {message.map(|message| view! { <p class="text-sm text-fg-muted">{message}</p> })}
        </div>
    }
}

/// Full-panel error with an optional retry affordance.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex items-center justify-between gap-4">
                <div class="flex">
                    <div class="flex-shrink-0">
                        <i class="fas fa-exclamation-circle"></i>
                    </div>
                    <div class="ml-3">
                        <p class="text-sm">{message}</p>
                    </div>
                </div>
                {on_retry.map(|retry| view! {
                    <Button variant=ButtonVariant::Outline on_click=retry>"Try Again"</Button>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_active_only_on_exact_match() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/employees", "/"));
    }

    #[test]
    fn nested_paths_keep_section_active() {
        assert!(is_active_path("/attendance", "/attendance"));
        assert!(is_active_path("/attendance/history", "/attendance"));
        assert!(!is_active_path("/attendances", "/attendance"));
        assert!(nav_link_class("/employees", "/employees").contains("bg-action-primary-bg"));
        assert!(nav_link_class("/", "/employees").contains("text-fg-muted"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_every_section_link() {
        let html = render_to_string(|| view! { <Header /> });
        assert!(html.contains("HRMS Lite"));
        for (href, label) in NAV_ITEMS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(|| view! { <Layout><div>"child"</div></Layout> });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner message="Loading dashboard..." />
                    <ErrorMessage message="Failed to load dashboard data" on_retry=Callback::new(|_| {}) />
                </div>
            }
        });
        assert!(html.contains("Loading dashboard..."));
        assert!(html.contains("Failed to load dashboard data"));
        assert!(html.contains("Try Again"));
    }
}
