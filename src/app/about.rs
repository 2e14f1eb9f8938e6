use leptos::prelude::*;

use super::state::use_page_state;

#[component]
pub fn About() -> impl IntoView {
    let about = use_page_state().content().about.clone();

    view! {
        <section id="about" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <SectionHeading badge="About Me" title="Career Objective" />
                <div class="grid lg:grid-cols-2 gap-12 items-center mb-16">
                    <div class="space-y-6">
                        {about
                            .objective
                            .into_iter()
                            .map(|p| view! { <p class="text-lg text-gray-700 leading-relaxed">{p}</p> })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {about
                            .highlights
                            .into_iter()
                            .map(|h| {
                                view! {
                                    <div class="rounded-lg border p-6 hover:shadow-lg transition-all duration-300">
                                        <h3 class="font-semibold text-gray-900 mb-2">{h.title}</h3>
                                        <p class="text-sm text-gray-600">{h.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="bg-gray-50 rounded-2xl p-8">
                    <h3 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                        "Core Competencies"
                    </h3>
                    <div class="grid md:grid-cols-3 gap-6">
                        {about
                            .competencies
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <div class="text-center">
                                        <h4 class="font-semibold text-gray-900 mb-2">{c.title}</h4>
                                        <p class="text-gray-600 text-sm">{c.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Badge, title and underline shared by every section.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let title_class = if dark {
        "text-4xl font-bold text-white mb-6"
    } else {
        "text-4xl font-bold text-gray-900 mb-6"
    };
    view! {
        <div class="text-center mb-16">
            <span class="inline-block mb-4 rounded-full border px-3 py-1 text-xs font-medium">
                {badge}
            </span>
            <h2 class=title_class>{title}</h2>
            <div class="w-24 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto mb-8"></div>
        </div>
    }
}
