use leptos::prelude::*;

use super::about::SectionHeading;
use super::state::use_page_state;
use crate::content::{Experience as ExperienceEntry, ProjectRole};

#[component]
pub fn Experience() -> impl IntoView {
    let entries = use_page_state().content().experience.clone();

    view! {
        <section id="experience" class="py-20 bg-white">
            <div class="container mx-auto px-6 max-w-4xl">
                <SectionHeading badge="Professional Experience" title="Work Experience" />
                <div class="space-y-4">
                    {entries.into_iter().map(|entry| view! { <ExperienceItem entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceItem(entry: ExperienceEntry) -> impl IntoView {
    let state = use_page_state();
    let id = entry.expand_id();
    let expanded = {
        let id = id.clone();
        Memo::new(move |_| state.snapshot.with(|s| s.is_expanded(&id)))
    };
    let status_class = if entry.is_current() {
        "rounded bg-blue-600 px-2 py-0.5 text-xs text-white"
    } else {
        "rounded bg-gray-100 px-2 py-0.5 text-xs"
    };
    let roles = StoredValue::new(entry.project_roles.clone());

    view! {
        <div class="border rounded-lg p-4 bg-white">
            <button
                class="w-full flex items-center justify-between text-left cursor-pointer"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| {
                    state.dispatch(|c| c.toggle_expand(&id));
                }
            >
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">{entry.role}</h3>
                    <p class="text-blue-600 font-medium">{entry.company}</p>
                    <p class="text-gray-600 text-sm">{entry.description}</p>
                    <div class="flex items-center gap-2 mt-2">
                        <span class="rounded border px-2 py-0.5 text-xs">{entry.kind}</span>
                        <span class=status_class>{entry.status}</span>
                    </div>
                </div>
                <span class="text-gray-500">{move || if expanded.get() { "▲" } else { "▼" }}</span>
            </button>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        view! {
                            <div class="mt-6 pt-4 border-t">
                                <h4 class="font-semibold text-gray-900 mb-4">"Project Roles:"</h4>
                                {roles
                                    .get_value()
                                    .into_iter()
                                    .map(|role| view! { <RoleDetails role /> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn RoleDetails(role: ProjectRole) -> impl IntoView {
    view! {
        <div class="mb-6 last:mb-0 bg-gray-50 rounded-lg p-4">
            <h5 class="font-semibold text-gray-900 mb-1">{role.project}</h5>
            <p class="text-blue-600 font-medium mb-3">"Role: " {role.role}</p>
            <h6 class="font-medium text-gray-800 mb-2">"Key Responsibilities:"</h6>
            <ul class="space-y-1 mb-4 list-disc list-inside text-sm text-gray-700">
                {role
                    .responsibilities
                    .into_iter()
                    .map(|r| view! { <li>{r}</li> })
                    .collect_view()}
            </ul>
            <h6 class="font-medium text-gray-800 mb-2">"Technologies Used:"</h6>
            <div class="flex flex-wrap gap-2">
                {role
                    .technologies
                    .into_iter()
                    .map(|t| view! { <span class="rounded bg-gray-200 px-2 py-0.5 text-xs">{t}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
