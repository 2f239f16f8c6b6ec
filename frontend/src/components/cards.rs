use leptos::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] actions: Option<View>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || actions.is_some();
    view! {
        <div class=format!("bg-surface-elevated shadow rounded-lg border border-border {}", class)>
            {has_header.then(|| view! {
                <div class="flex items-center justify-between gap-4 px-6 pt-5">
                    <h2 class="text-base font-semibold text-fg">{title.clone().unwrap_or_default()}</h2>
                    {actions.clone()}
                </div>
            })}
            <div class="p-6">{children()}</div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Danger,
}

impl StatTone {
    pub fn value_class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "text-fg",
            StatTone::Success => "text-status-success-text",
            StatTone::Danger => "text-status-error-text",
        }
    }
}

/// Single labelled number.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] tone: StatTone,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm">
            <div class="flex items-center gap-4">
                {icon.map(|icon| view! {
                    <div class="w-10 h-10 flex items-center justify-center rounded-xl bg-surface-muted text-action-primary-bg">
                        <i class=icon></i>
                    </div>
                })}
                <div>
                    <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
                    <p class=format!("mt-1 text-3xl font-extrabold {}", tone.value_class())>
                        {move || value.get()}
                    </p>
                </div>
            </div>
        </div>
    }
}
