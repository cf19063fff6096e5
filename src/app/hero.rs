use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::{SocialKind, OWNER_NAME, OWNER_ROLE, OWNER_TAGLINE, SOCIAL_LINKS};

const TYPING_DURATION: Duration = Duration::from_secs(1);

pub(super) fn social_icon(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "devicon-github-original",
        SocialKind::LinkedIn => "devicon-linkedin-plain",
        SocialKind::Email => "",
    }
}

#[component]
pub fn HeroSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let (is_typing, set_is_typing) = signal(true);

    Effect::new(move |_| {
        set_timeout(move || set_is_typing(false), TYPING_DURATION);
    });

    let links = SOCIAL_LINKS
        .iter()
        .filter(|l| l.kind != SocialKind::Email)
        .map(|l| {
            view! {
                <a
                    href=l.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=l.name
                    class="w-12 h-12 flex items-center justify-center rounded-full bg-background border-2 border-primary/20 hover:border-primary transition-colors duration-300 text-2xl"
                >
                    <i class=social_icon(l.kind)></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=node_ref
            id="home"
            class="min-h-screen flex items-center justify-center relative"
        >
            <div class="text-center space-y-6">
                <div class="flex items-center justify-center">
                    <h1
                        class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-primary to-primary-light bg-clip-text text-transparent overflow-hidden whitespace-nowrap"
                        class:typing=is_typing
                    >
                        {OWNER_NAME}
                    </h1>
                    <Show when=is_typing>
                        <span class="typing-cursor ml-1 w-[3px] h-12 md:h-16 bg-primary"></span>
                    </Show>
                </div>
                <p class="text-2xl md:text-3xl font-semibold text-foreground/90">{OWNER_ROLE}</p>
                <p class="text-lg text-muted-foreground max-w-xl mx-auto">{OWNER_TAGLINE}</p>
                <div class="flex justify-center gap-4 pt-4">{links}</div>
            </div>
        </section>
    }
}
