use leptos::prelude::*;

use super::state::use_page_state;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_page_state();
    let content = state.content();
    let hero = content.hero.clone();
    let profile = content.profile.clone();

    let revealed = move || state.snapshot.with(|s| s.revealed_text.clone());
    let typing = move || state.snapshot.with(|s| !s.typing_complete);

    view! {
        <div class="relative min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-slate-800 flex items-center justify-center overflow-hidden">
            <div class="container mx-auto px-6 pt-24 relative z-10">
                <div class="text-white space-y-8 max-w-3xl">
                    <div class="space-y-4">
                        <span class="inline-block rounded-full border border-blue-400 bg-blue-500/20 px-3 py-1 text-sm text-blue-300">
                            {profile.title}
                        </span>
                        <h1 class="text-5xl lg:text-7xl font-bold leading-tight">
                            <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                {hero.headline}
                            </span>
                            <br />
                            <span class="text-white">{hero.headline_accent}</span>
                        </h1>
                        <p class="text-xl text-gray-300 leading-relaxed max-w-lg">{hero.summary}</p>
                        <p class="text-base text-gray-400 leading-relaxed min-h-[6rem] font-mono">
                            {revealed}
                            <span class=move || {
                                if typing() { "animate-pulse" } else { "hidden" }
                            }>"▍"</span>
                        </p>
                    </div>
                    <div class="flex flex-wrap gap-4 text-sm text-gray-300">
                        <span>{profile.location}</span>
                        <span>{profile.email}</span>
                    </div>
                    <div class="flex flex-wrap gap-4">
                        <button
                            class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-lg transition-all duration-300"
                            on:click=move |_| state.dispatch(|c| c.request_resume_download())
                        >
                            "Download Resume"
                        </button>
                        <a
                            href="#contact"
                            class="border border-gray-400 text-gray-300 hover:bg-white hover:text-gray-900 px-8 py-3 rounded-lg transition-all duration-300"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                    <div class="pt-8">
                        <p class="text-sm text-gray-400 mb-3">"Specialized in:"</p>
                        <div class="flex flex-wrap gap-2">
                            {hero
                                .specialties
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md bg-gray-800 px-2 py-1 text-xs text-gray-300">
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
