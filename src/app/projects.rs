use leptos::{either::EitherOf4, prelude::*};

use super::about::SectionHeading;
use super::state::use_page_state;
use crate::content::{Project, PROJECT_TABS, PROJECT_TAB_GROUP};

fn status_class(status: &str) -> &'static str {
    match status {
        "Active" => "rounded px-3 py-1 text-xs bg-green-100 text-green-800",
        "Completed" => "rounded px-3 py-1 text-xs bg-blue-100 text-blue-800",
        _ => "rounded px-3 py-1 text-xs bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let state = use_page_state();
    let content = state.content();
    let projects = content.projects.clone();

    let selected = move || {
        state
            .snapshot
            .with(|s| s.selected_project)
            .and_then(|id| content.project(id).cloned())
    };

    view! {
        <section id="projects" class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <SectionHeading badge="Projects Portfolio" title="Featured Projects" />
                <div class="grid lg:grid-cols-2 gap-8 mb-12">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
            {move || selected().map(|project| view! { <ProjectDialog project /> })}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let state = use_page_state();
    let id = project.id;

    view! {
        <div class="rounded-lg border bg-white p-6 hover:shadow-xl transition-all duration-300 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div class="flex-1">
                    <span class="rounded border px-2 py-0.5 text-xs">{project.category}</span>
                    <h3 class="text-xl font-bold text-gray-900 my-2 leading-tight">{project.title}</h3>
                    <p class="text-gray-600">{project.client}</p>
                </div>
                <span class=status_class(&project.status)>{project.status.clone()}</span>
            </div>
            <p class="text-sm text-gray-500">{project.duration}</p>
            <p class="text-gray-700 leading-relaxed">{project.overview}</p>
            <div class="grid grid-cols-2 gap-4">
                {project
                    .metrics
                    .into_iter()
                    .take(2)
                    .map(|m| {
                        view! {
                            <div class="text-center p-3 bg-blue-50 rounded-lg">
                                <div class="text-lg font-bold text-blue-600">{m.value}</div>
                                <div class="text-xs text-gray-600">{m.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="w-full rounded-md border px-4 py-2 hover:bg-gray-100"
                on:click=move |_| {
                    state.dispatch(|c| c.open_project(id));
                }
            >
                "View Details"
            </button>
        </div>
    }
}

#[component]
fn ProjectDialog(project: Project) -> impl IntoView {
    let state = use_page_state();
    let active = move || {
        state.snapshot.with(|s| {
            s.active_tab(PROJECT_TAB_GROUP)
                .unwrap_or(PROJECT_TABS[0].0)
                .to_string()
        })
    };
    let project = StoredValue::new(project);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60"
            on:click=move |_| {
                state.dispatch(|c| c.close_project());
            }
        >
            <div
                role="dialog"
                aria-modal="true"
                class="max-w-4xl w-full max-h-[80vh] overflow-y-auto rounded-lg bg-white p-6"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-start justify-between mb-4">
                    <h2 class="text-2xl font-bold text-gray-900">
                        {project.with_value(|p| p.title.clone())}
                    </h2>
                    <button
                        aria-label="Close"
                        class="text-gray-500 hover:text-gray-900"
                        on:click=move |_| {
                            state.dispatch(|c| c.close_project());
                        }
                    >
                        "✕"
                    </button>
                </div>
                <div role="tablist" class="grid w-full grid-cols-4 gap-2 mb-4">
                    {PROJECT_TABS
                        .iter()
                        .map(|(key, label)| {
                            let key = *key;
                            view! {
                                <button
                                    role="tab"
                                    class=move || {
                                        if active() == key {
                                            "rounded-md bg-gray-100 px-3 py-2 text-sm font-medium"
                                        } else {
                                            "rounded-md px-3 py-2 text-sm text-gray-500"
                                        }
                                    }
                                    on:click=move |_| {
                                        state.dispatch(|c| c.select_tab(PROJECT_TAB_GROUP, key));
                                    }
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-4">
                    {move || project.with_value(|p| detail_panel(p, &active()))}
                </div>
            </div>
        </div>
    }
}

fn bullet_list(items: &[String]) -> impl IntoView {
    let items = items.to_vec();
    view! {
        <ul class="space-y-2 list-disc list-inside text-gray-700">
            {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
        </ul>
    }
}

fn detail_panel(project: &Project, tab: &str) -> impl IntoView {
    match tab {
        "technical" => EitherOf4::A(view! {
            <h4 class="font-semibold">"Technologies"</h4>
            <div class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .clone()
                    .into_iter()
                    .map(|t| view! { <span class="rounded bg-gray-100 px-2 py-0.5 text-xs">{t}</span> })
                    .collect_view()}
            </div>
            <h4 class="font-semibold">"Key Responsibilities"</h4>
            {bullet_list(&project.responsibilities)}
        }),
        "achievements" => EitherOf4::B(view! {
            <h4 class="font-semibold">"Key Achievements"</h4>
            {bullet_list(&project.achievements)}
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {project
                    .metrics
                    .clone()
                    .into_iter()
                    .map(|m| {
                        view! {
                            <div class="text-center p-3 bg-blue-50 rounded-lg">
                                <div class="text-lg font-bold text-blue-600">{m.value}</div>
                                <div class="text-xs text-gray-600">{m.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }),
        "challenges" => EitherOf4::C(view! {
            <h4 class="font-semibold">"Challenges Overcome"</h4>
            {bullet_list(&project.challenges)}
        }),
        _ => EitherOf4::D(view! {
            <p class="text-gray-700 leading-relaxed">{project.description.clone()}</p>
            <h4 class="font-semibold">"Business Impact"</h4>
            <p class="text-gray-700">{project.impact.clone()}</p>
            <p class="text-sm text-gray-500">
                {format!("{} · {}", project.client, project.duration)}
            </p>
        }),
    }
}
