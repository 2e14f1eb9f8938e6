use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::state::use_page_state;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = use_page_state().content();
    let profile = content.profile.clone();
    let footer = content.footer.clone();

    view! {
        <footer class="bg-slate-900 text-gray-300 py-12">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="space-y-4">
                        <a href="#home" class="text-xl font-bold text-white">{profile.name.clone()}</a>
                        <p class="text-sm">{footer.blurb}</p>
                        <p class="text-sm">{profile.email}</p>
                        <p class="text-sm">{profile.phone}</p>
                        <p class="text-sm">{profile.location}</p>
                    </div>
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm">
                            {footer
                                .links
                                .into_iter()
                                .map(|l| view! { <li><a href=l.href class="hover:text-white">{l.name}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Services"</h4>
                        <ul class="space-y-2 text-sm">
                            {footer.services.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Technologies"</h4>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {footer
                                .technologies
                                .into_iter()
                                .map(|t| view! { <span class="rounded bg-gray-800 px-2 py-0.5 text-xs">{t}</span> })
                                .collect_view()}
                        </div>
                        <div class="flex gap-3 text-sm">
                            <a href=profile.linkedin target="_blank" rel="noopener noreferrer" class="hover:text-white">
                                "LinkedIn"
                            </a>
                            <a href=profile.github target="_blank" rel="noopener noreferrer" class="hover:text-white">
                                "GitHub"
                            </a>
                            <a href=profile.credly target="_blank" rel="noopener noreferrer" class="hover:text-white">
                                "Credly"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-700 mt-8 pt-6 flex flex-col md:flex-row justify-between gap-2 text-xs">
                    <span>{format!("© {} {}. All rights reserved.", build_year(), profile.name)}</span>
                    <span title=BUILD_TIME>"Built with Rust & Leptos"</span>
                    <a href="#home" class="hover:text-white">"Back to top ↑"</a>
                </div>
            </div>
        </footer>
    }
}
