use leptos::{
    either::{Either, EitherOf3},
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
    task::spawn_local,
};

use crate::{
    contact::{ContactForm, Field, SubmissionStatus, RESET_DELAY},
    content::{SocialKind, CONTACT_EMAIL, SOCIAL_LINKS},
    mail::{EmailJsRelay, MailConfig, MailRelay},
};

use super::hero::social_icon;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT_CLASS} border-red-500")
    } else {
        INPUT_CLASS.to_string()
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|msg| view! { <p class="text-red-500 text-xs mt-1">{msg}</p> })
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let config = StoredValue::new(MailConfig::from_env());
    let relay = EmailJsRelay::default();

    let value = move |field: Field| move || form.with(|f| f.fields().get(field).to_string());
    let has_error = move |field: Field| move || input_class(form.with(|f| f.error(field).is_some()));
    let on_input = move |field: Field| {
        move |ev: Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };
    let is_submitting = move || form.with(|f| f.status() == SubmissionStatus::Submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => message,
            _ => return,
        };
        let config = config.get_value();
        // the signal can't be borrowed across the await, so this runs
        // ContactForm::submit's steps one at a time
        spawn_local(async move {
            let outcome = relay.send(&config, &message).await;
            let token = if let Some(token) = form.try_update(|f| f.complete(outcome)).flatten() {
                token
            } else {
                return;
            };
            set_timeout(
                move || {
                    form.try_update(|f| f.auto_reset(token));
                },
                RESET_DELAY,
            );
        });
    };

    view! {
        <div class="bg-card border rounded-xl p-6 shadow-sm">
            <form on:submit=on_submit class="space-y-4" novalidate=true>
                <div class="space-y-2">
                    <label for="name" class="text-sm font-medium">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        placeholder="Your name"
                        prop:value=value(Field::Name)
                        on:input=on_input(Field::Name)
                        class=has_error(Field::Name)
                    />
                    <FieldError form field=Field::Name />
                </div>
                <div class="space-y-2">
                    <label for="email" class="text-sm font-medium">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Your email"
                        prop:value=value(Field::Email)
                        on:input=on_input(Field::Email)
                        class=has_error(Field::Email)
                    />
                    <FieldError form field=Field::Email />
                </div>
                <div class="space-y-2">
                    <label for="message" class="text-sm font-medium">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="Your message"
                        rows=5
                        prop:value=value(Field::Message)
                        on:input=on_input(Field::Message)
                        class=has_error(Field::Message)
                    ></textarea>
                    <FieldError form field=Field::Message />
                </div>

                <button
                    type="submit"
                    class="w-full h-10 rounded-md bg-primary hover:bg-primary/90 text-white disabled:opacity-70"
                    disabled=is_submitting
                >
                    {move || {
                        if is_submitting() {
                            Either::Left(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <span class="animate-spin h-4 w-4 rounded-full border-2 border-white border-t-transparent"></span>
                                        "Sending..."
                                    </span>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        "➤ Send Message"
                                    </span>
                                },
                            )
                        }
                    }}
                </button>

                {move || match form.with(|f| f.status()) {
                    SubmissionStatus::Success => {
                        EitherOf3::A(
                            view! {
                                <div class="flex items-center gap-2 text-green-600 bg-green-50 p-3 rounded-md mt-4">
                                    <span>"✔"</span>
                                    <span>"Message sent successfully! I'll get back to you soon."</span>
                                </div>
                            },
                        )
                    }
                    SubmissionStatus::Error => {
                        EitherOf3::B(
                            view! {
                                <div class="flex items-center gap-2 text-red-600 bg-red-50 p-3 rounded-md mt-4">
                                    <span>"⚠"</span>
                                    <span>
                                        "There was an error sending your message. Please try again later."
                                    </span>
                                </div>
                            },
                        )
                    }
                    SubmissionStatus::Idle | SubmissionStatus::Submitting => EitherOf3::C(()),
                }}
            </form>
        </div>
    }
}

#[component]
pub fn ContactSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=node_ref id="contact" class="min-h-screen py-20 flex items-center">
            <div class="container px-4 mx-auto space-y-16">
                <div class="text-center space-y-4">
                    <h2 class="text-4xl font-bold text-primary">"Get In Touch"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "I'm always open to new opportunities and interesting projects. Feel free to reach out!"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <ContactFormCard />

                    <div class="space-y-8">
                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold">"Contact Information"</h3>
                            <p class="text-muted-foreground">
                                "Feel free to reach out through the form or directly via email or social media."
                            </p>
                            <div class="flex items-center gap-3 mt-6">
                                <div class="flex-shrink-0 w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center text-primary">
                                    "✉"
                                </div>
                                <div>
                                    <p class="font-medium">"Email"</p>
                                    <a
                                        href=format!("mailto:{CONTACT_EMAIL}")
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        {CONTACT_EMAIL}
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold">"Connect With Me"</h3>
                            <p class="text-muted-foreground">
                                "Follow me on social media to see my latest projects and updates."
                            </p>
                            <div class="flex flex-wrap gap-4 mt-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-4 py-2 rounded-full border hover:border-primary hover:bg-primary/5 hover:-translate-y-0.5 transition-all"
                                            >
                                                {if social.kind == SocialKind::Email {
                                                    Either::Left(view! { <span class="text-primary">"✉"</span> })
                                                } else {
                                                    Either::Right(
                                                        view! { <i class=format!("{} text-primary", social_icon(social.kind))></i> },
                                                    )
                                                }}
                                                <span>{social.name}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="space-y-4 pt-6">
                            <h3 class="text-xl font-semibold">"Let's Work Together"</h3>
                            <p class="text-muted-foreground">
                                "I'm currently available for freelance work and open to new opportunities. If you have a project that you want to get started, think you need my help with something, or just want to say hello, then get in touch."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
