use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::{Technology, TECHNOLOGIES};

/// Card width plus its horizontal margins.
const CARD_STEP: f64 = 216.0;

#[component]
fn TechCard(tech: &'static Technology) -> impl IntoView {
    view! {
        <div class="flex-[0_0_200px] min-h-[240px] mx-2 flex flex-col items-center p-4 rounded-xl border bg-gradient-to-b from-primary/10 to-transparent hover:border-primary hover:-translate-y-1 transition-all duration-300 snap-center">
            <div class="w-20 h-20 flex items-center justify-center mb-4">
                <img src=tech.icon alt=tech.name class="w-16 h-16 object-contain" loading="lazy" />
            </div>
            <h3 class="font-semibold text-lg mb-1">{tech.name}</h3>
            <p class="text-xs text-muted-foreground text-center">{tech.description}</p>
        </div>
    }
}

#[component]
pub fn StackSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();

    let scroll_track = move |cards: f64| {
        let el = if let Some(el) = track_ref.get_untracked() {
            el
        } else {
            return;
        };
        let opts = ScrollToOptions::new();
        opts.set_left(cards * CARD_STEP);
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&opts);
    };

    view! {
        <section
            node_ref=node_ref
            id="stack"
            class="min-h-screen flex items-center bg-gradient-to-b from-muted/50 to-background"
        >
            <div class="w-full space-y-12">
                <div class="text-center space-y-4">
                    <h2 class="text-4xl font-bold text-primary">"Tech Stack"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Technologies and tools I use to bring products to life"
                    </p>
                </div>
                <div class="relative max-w-5xl mx-auto px-4">
                    <div
                        node_ref=track_ref
                        class="flex overflow-x-auto snap-x scrollbar-hide py-2"
                    >
                        {TECHNOLOGIES
                            .iter()
                            .map(|tech| view! { <TechCard tech /> })
                            .collect_view()}
                    </div>
                    <div class="hidden md:block">
                        <button
                            class="absolute left-2 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full border bg-background/80 backdrop-blur-sm hover:bg-primary hover:text-white transition-all duration-300"
                            aria-label="Previous"
                            on:click=move |_| scroll_track(-1.0)
                        >
                            "‹"
                        </button>
                        <button
                            class="absolute right-2 top-1/2 -translate-y-1/2 h-8 w-8 rounded-full border bg-background/80 backdrop-blur-sm hover:bg-primary hover:text-white transition-all duration-300"
                            aria-label="Next"
                            on:click=move |_| scroll_track(1.0)
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
