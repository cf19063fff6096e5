use leptos::{either::Either, prelude::*};
use leptos_use::{use_color_mode, ColorMode, UseColorModeReturn};

const CHOICES: [(&str, ColorMode); 3] = [
    ("Light", ColorMode::Light),
    ("Dark", ColorMode::Dark),
    ("System", ColorMode::Auto),
];

/// Light / dark / system switch. The choice is kept in local storage and
/// applied as a class on `<html>`.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let UseColorModeReturn { mode, set_mode, .. } = use_color_mode();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="h-9 w-9 rounded-md hover:bg-primary/10 text-foreground hover:text-primary transition-colors"
                aria-label="Toggle theme"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || {
                    if mode.get() == ColorMode::Dark {
                        Either::Left(view! { <span>"☾"</span> })
                    } else {
                        Either::Right(view! { <span>"☀"</span> })
                    }
                }}
            </button>
            <Show when=open>
                <ul class="absolute right-0 mt-2 w-32 rounded-md border bg-background shadow-md py-1">
                    {CHOICES
                        .into_iter()
                        .map(|(label, choice)| {
                            view! {
                                <li>
                                    <button
                                        class="w-full text-left px-3 py-1.5 text-sm hover:bg-primary/10"
                                        on:click=move |_| {
                                            set_mode.set(choice.clone());
                                            set_open(false);
                                        }
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
