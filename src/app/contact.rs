use leptos::{ev::SubmitEvent, prelude::*};

use super::about::SectionHeading;
use super::state::{use_page_state, PageState};
use crate::view_state::{FormField, SubmissionFailure, SubmissionState};

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_page_state();
    let content = state.content();
    let profile = content.profile.clone();
    let reasons = content.contact.reasons.clone();
    let availability = content.contact.availability.clone();

    let submitting = move || state.snapshot.with(|s| s.submission.is_submitting());
    let status = move || {
        state.snapshot.with(|s| match &s.submission {
            SubmissionState::Failed(SubmissionFailure::Validation(e)) => {
                Some(("text-red-300", e.to_string()))
            }
            SubmissionState::Failed(SubmissionFailure::Network(e)) => {
                Some(("text-red-300", format!("{e}. You can try sending again.")))
            }
            SubmissionState::Succeeded => Some(("text-green-300", "Message sent.".to_string())),
            _ => None,
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <section id="contact" class="py-20 bg-gradient-to-br from-slate-900 via-blue-900 to-slate-800">
            <div class="container mx-auto px-6">
                <SectionHeading badge="Let's Connect" title="Get In Touch" dark=true />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="rounded-lg bg-white/10 border border-white/20 p-6">
                        <h3 class="text-2xl font-bold text-white mb-2">"Send a Message"</h3>
                        <p class="text-gray-300 mb-6">
                            "Fill out the form below and I'll get back to you soon."
                        </p>
                        <form class="space-y-6" novalidate=true on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-4">
                                <Field state field=FormField::Name label="Full Name *" placeholder="Enter your full name" />
                                <Field state field=FormField::Email label="Email Address *" placeholder="your.email@company.com" />
                            </div>
                            <Field state field=FormField::Company label="Company/Organization" placeholder="Your company name" />
                            <Field state field=FormField::Subject label="Subject *" placeholder="What would you like to discuss?" />
                            <div class="space-y-2">
                                <label for="message" class="text-white">"Message *"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows=5
                                    class="w-full rounded-md bg-white/10 border border-white/20 text-white placeholder:text-gray-400 resize-none p-2"
                                    placeholder="Tell me about your project, requirements, or any questions you have..."
                                    prop:value=move || state.snapshot.with(|s| s.form.message.clone())
                                    on:input=move |ev| state.update_field(FormField::Message, event_target_value(&ev))
                                ></textarea>
                            </div>
                            {move || status().map(|(class, text)| view! { <p class=class>{text}</p> })}
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full rounded-md bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 disabled:opacity-60 text-white py-3"
                            >
                                {move || if submitting() { "Sending Message..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                    <div class="space-y-8">
                        <div class="rounded-lg bg-white/10 border border-white/20 p-6 space-y-4 text-white">
                            <h3 class="text-2xl font-bold">"Contact Information"</h3>
                            <p><span class="font-semibold">"Email: "</span>{profile.email.clone()}</p>
                            <p><span class="font-semibold">"Phone: "</span>{profile.phone.clone()}</p>
                            <p><span class="font-semibold">"Location: "</span>{profile.location}</p>
                        </div>
                        <div class="rounded-lg bg-white/10 border border-white/20 p-6">
                            <h3 class="text-xl font-bold text-white mb-4">"Why Get In Touch?"</h3>
                            <div class="space-y-4">
                                {reasons
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <div>
                                                <h4 class="font-semibold text-white mb-1">{r.title}</h4>
                                                <p class="text-sm text-gray-300">{r.description}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="rounded-xl p-6 text-center border border-green-500/20 bg-green-600/10">
                            <h3 class="text-xl font-bold text-white mb-4">"Currently Available"</h3>
                            <p class="text-gray-300">{availability}</p>
                        </div>
                    </div>
                </div>
                <div class="text-center mt-16 flex flex-wrap justify-center gap-4">
                    <a
                        href=format!("mailto:{}", profile.email)
                        class="rounded-md border border-white/20 px-4 py-2 text-white hover:bg-white hover:text-gray-900"
                    >
                        "Email Directly"
                    </a>
                    <a
                        href=format!("tel:{}", profile.phone.replace([' ', '-'], ""))
                        class="rounded-md border border-white/20 px-4 py-2 text-white hover:bg-white hover:text-gray-900"
                    >
                        "Call Now"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(
    state: PageState,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let input_type = if field == FormField::Email { "email" } else { "text" };
    view! {
        <div class="space-y-2">
            <label for=field.as_str() class="text-white">
                {label}
            </label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                class="w-full rounded-md bg-white/10 border border-white/20 text-white placeholder:text-gray-400 p-2"
                placeholder=placeholder
                prop:value=move || state.snapshot.with(|s| s.form.get(field).to_string())
                on:input=move |ev| state.update_field(field, event_target_value(&ev))
            />
        </div>
    }
}
