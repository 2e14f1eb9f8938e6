mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;
mod state;
mod toast;

use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_interval_fn, utils::Pausable};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use state::PageState;
use toast::Toaster;

use crate::content::Content;
use crate::view_state::ControllerConfig;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | DevOps & Cloud Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match Content::load() {
        Ok(content) => Either::Left(view! { <Portfolio content=Arc::new(content) /> }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <div class="min-h-screen flex items-center justify-center">
                    <p class="text-red-600">{format!("Portfolio unavailable: {e}")}</p>
                </div>
            })
        }
    }
}

#[component]
fn Portfolio(content: Arc<Content>) -> impl IntoView {
    let name = content.profile.name.clone();
    let state = PageState::new(content, ControllerConfig::default()).provide();

    let Pausable { pause, resume, .. } =
        use_interval_fn(move || state.tick(), state.frame.as_millis() as u64);
    // only spend frames while something is moving
    Effect::new(move |_| {
        if state.animating.get() {
            resume();
        } else {
            pause();
        }
    });

    // effects only run in the browser, so the page renders unanimated on the server
    Effect::new(move |_| {
        state.dispatch(|c| {
            c.start_skill_animations();
            c.start_bio_typing();
        });
    });

    view! {
        <Title text=name />
        <Navigation />
        <main>
            <section id="home">
                <Hero />
            </section>
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Education />
            <Contact />
        </main>
        <Footer />
        <Toaster />
    }
}

#[component]
fn Navigation() -> impl IntoView {
    let content = state::use_page_state().content();
    let name = content.profile.name.clone();
    let links = content.footer.links.clone();

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-slate-900/90 backdrop-blur-sm text-white shadow">
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    {name}
                </a>
                <ul class="hidden md:flex gap-6 text-sm">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href class="hover:text-blue-300 transition-colors">
                                        {link.name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
