use leptos::prelude::*;

use super::about::SectionHeading;
use super::state::use_page_state;
use crate::content::{Skill, SKILLS_TAB_GROUP};

#[component]
pub fn Skills() -> impl IntoView {
    let state = use_page_state();
    let skills = state.content().skills.clone();
    let categories = skills.categories.clone();

    let is_active = move |key: &str| {
        state
            .snapshot
            .with(|s| s.active_tab(SKILLS_TAB_GROUP) == Some(key))
    };

    view! {
        <section id="skills" class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <SectionHeading badge="Technical Skills" title="Expertise & Proficiency" />
                <div role="tablist" class="grid w-full grid-cols-2 md:grid-cols-4 gap-2 mb-8">
                    {categories
                        .iter()
                        .map(|category| {
                            let key = category.key.clone();
                            let class_key = key.clone();
                            let selected_key = key.clone();
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || is_active(&selected_key).to_string()
                                    class=move || {
                                        if is_active(&class_key) {
                                            "rounded-md bg-white px-3 py-2 text-sm font-medium shadow"
                                        } else {
                                            "rounded-md px-3 py-2 text-sm text-gray-500 hover:text-gray-900"
                                        }
                                    }
                                    on:click=move |_| {
                                        state.dispatch(|c| c.select_tab(SKILLS_TAB_GROUP, &key));
                                    }
                                >
                                    {category.tab_label.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {categories
                    .into_iter()
                    .map(|category| {
                        let key = category.key.clone();
                        view! {
                            <div
                                role="tabpanel"
                                class="grid gap-6 mb-12"
                                class:hidden=move || !is_active(&key)
                            >
                                {category.skills.into_iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="rounded-lg bg-white p-6 shadow-sm">
                    <h3 class="text-center font-semibold mb-4">"Tools & Technologies"</h3>
                    <div class="flex flex-wrap gap-3 justify-center">
                        {skills
                            .tools
                            .into_iter()
                            .map(|tool| {
                                view! {
                                    <span class="rounded-md bg-gray-100 px-4 py-2 text-sm hover:bg-blue-100 hover:text-blue-800 transition-colors duration-200">
                                        {tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let state = use_page_state();
    let metric = skill.metric.clone();
    let level = Memo::new(move |_| state.snapshot.with(|s| s.metric(&metric)));

    view! {
        <div class="rounded-lg border bg-white p-6 hover:shadow-lg transition-all duration-300">
            <div class="flex justify-between items-center mb-3">
                <h4 class="text-lg font-semibold">{skill.name}</h4>
                <span class="rounded-md bg-gray-100 px-2 py-0.5 text-xs">
                    {move || format!("{}%", level.get())}
                </span>
            </div>
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-gray-200 mb-4"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || level.get().to_string()
            >
                <div
                    class="h-full bg-gradient-to-r from-blue-600 to-purple-600"
                    style:width=move || format!("{}%", level.get())
                ></div>
            </div>
            <div class="flex flex-wrap gap-2">
                {skill
                    .tools
                    .into_iter()
                    .map(|tool| view! { <span class="rounded border px-2 py-0.5 text-xs">{tool}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
