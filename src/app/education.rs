use leptos::prelude::*;

use super::about::SectionHeading;
use super::state::use_page_state;

#[component]
pub fn Education() -> impl IntoView {
    let education = use_page_state().content().education.clone();
    let cert = education.certification.clone();

    view! {
        <section id="education" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <SectionHeading badge="Education & Certifications" title="Academic Background" />
                <div class="grid lg:grid-cols-2 gap-8 mb-12">
                    <div class="rounded-lg border p-6 hover:shadow-lg transition-all duration-300">
                        <h3 class="text-lg font-bold text-gray-900">{education.degree}</h3>
                        <p class="text-blue-600 font-semibold">{education.university.clone()}</p>
                        <p class="text-sm text-gray-500 mb-4">{education.location}</p>
                        <p class="text-gray-700 mb-4">
                            {format!(
                                "Completed comprehensive study in Computer Science from {}, building a strong foundation in software development and system design.",
                                education.university,
                            )}
                        </p>
                        <h4 class="font-semibold text-gray-900 mb-2">"Key Highlights:"</h4>
                        <ul class="space-y-1 list-disc list-inside text-sm text-gray-700">
                            {education
                                .highlights
                                .into_iter()
                                .map(|h| view! { <li>{h}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="rounded-lg border p-6 hover:shadow-lg transition-all duration-300 space-y-4">
                        <div>
                            <h3 class="text-lg font-bold text-gray-900">{cert.short_title}</h3>
                            <p class="text-green-600 font-semibold">{cert.issuer}</p>
                            <span class="rounded bg-green-100 px-2 py-0.5 text-xs text-green-800">
                                {cert.status}
                            </span>
                        </div>
                        <p class="text-gray-700">{cert.description}</p>
                        <div class="flex flex-wrap gap-2">
                            {cert
                                .skills
                                .into_iter()
                                .map(|s| view! { <span class="rounded border px-2 py-0.5 text-xs">{s}</span> })
                                .collect_view()}
                        </div>
                        <a
                            href=cert.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block rounded-md bg-green-600 px-4 py-2 text-white hover:bg-green-700"
                            title=cert.title
                        >
                            "View Credential"
                        </a>
                    </div>
                </div>
                <div class="bg-gray-50 rounded-2xl p-8">
                    <h3 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                        "Continuous Learning"
                    </h3>
                    <div class="grid md:grid-cols-3 gap-6">
                        {education
                            .learning
                            .into_iter()
                            .map(|track| {
                                view! {
                                    <div>
                                        <h4 class="font-semibold text-gray-900 mb-2">{track.category}</h4>
                                        <ul class="space-y-1 text-sm text-gray-600">
                                            {track.items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                                        </ul>
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
