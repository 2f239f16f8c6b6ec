use leptos::*;

use crate::api::AttendanceSummary;
use crate::components::cards::{StatCard, StatTone};

#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<Option<AttendanceSummary>>) -> impl IntoView {
    let count = move |pick: fn(&AttendanceSummary) -> u32| {
        Signal::derive(move || {
            summary
                .get()
                .map(|summary| pick(&summary).to_string())
                .unwrap_or_default()
        })
    };
    view! {
        <Show when=move || summary.with(Option::is_some)>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <StatCard label="Total Records" value=count(|s| s.total_records) />
                <StatCard label="Present Days" value=count(|s| s.total_present) tone=StatTone::Success />
                <StatCard label="Absent Days" value=count(|s| s.total_absent) tone=StatTone::Danger />
            </div>
        </Show>
    }
}
