use leptos::*;
use std::future::Future;

/// Runs `f` inside a fresh reactive runtime, disposing it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Async flavour of [`with_runtime`] for view-model tests that await API calls.
pub async fn with_runtime_async<T, Fut>(f: impl FnOnce() -> Fut) -> T
where
    Fut: Future<Output = T>,
{
    let runtime = create_runtime();
    let result = f().await;
    runtime.dispose();
    result
}

/// Renders a view to HTML without letting resources fire their fetchers.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
