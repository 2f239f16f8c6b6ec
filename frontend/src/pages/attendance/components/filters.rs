use leptos::*;

use crate::components::{
    cards::Card,
    common::{Button, ButtonVariant},
    forms::{FormField, SelectField},
};
use crate::pages::attendance::{
    utils::{filter_options, FilterField},
    view_model::AttendanceViewModel,
};

#[component]
pub fn AttendanceFiltersCard(vm: AttendanceViewModel) -> impl IntoView {
    let options = Signal::derive(move || vm.state.with(|state| filter_options(&state.employees)));
    let value = move |field: FilterField| {
        Signal::derive(move || vm.state.with(|state| state.filters.get(field).to_string()))
    };
    let on_change = move |field: FilterField| {
        Callback::new(move |value: String| spawn_local(vm.set_filter(field, value)))
    };
    let clear = Callback::new(move |_| spawn_local(vm.clear_filters()));

    let actions = view! {
        <Show when=move || vm.has_active_filters()>
            <Button variant=ButtonVariant::Outline on_click=clear>"Clear Filters"</Button>
        </Show>
    }
    .into_view();

    view! {
        <Card title="Filters" actions=actions>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                <SelectField
                    label="Filter by Employee"
                    name="filterEmployee"
                    value=value(FilterField::EmployeeId)
                    options=options
                    placeholder="All Employees"
                    on_change=on_change(FilterField::EmployeeId)
                />
                <FormField
                    label="Start Date"
                    name="filterStartDate"
                    input_type="date"
                    value=value(FilterField::StartDate)
                    on_input=on_change(FilterField::StartDate)
                />
                <FormField
                    label="End Date"
                    name="filterEndDate"
                    input_type="date"
                    value=value(FilterField::EndDate)
                    on_input=on_change(FilterField::EndDate)
                />
            </div>
        </Card>
    }
}
