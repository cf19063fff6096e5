use leptos::prelude::*;

use crate::content::NavItem;

use super::theme::ModeToggle;

const DESKTOP_LINK: &str = "h-9 px-4 text-sm font-medium transition-colors rounded-md text-foreground/70 hover:text-primary hover:bg-primary/10";
const DESKTOP_ACTIVE: &str = "text-primary relative after:absolute after:bottom-0 after:left-0 after:right-0 after:h-[2px] after:bg-primary";
const MOBILE_LINK: &str = "justify-start text-left h-11 px-4 mb-1 rounded-md font-medium transition-colors text-foreground/70 hover:text-primary hover:bg-primary/10";
const MOBILE_ACTIVE: &str = "bg-primary/10 text-primary";

fn link_class(base: &'static str, active_extra: &'static str, is_active: bool) -> String {
    if is_active {
        format!("{base} {active_extra}")
    } else {
        base.to_string()
    }
}

/// Sticky header with the section nav and the theme switch.
///
/// `active` is only read; the page decides what is active and `on_navigate`
/// hands clicks back to it.
#[component]
pub fn SiteHeader(
    items: &'static [NavItem],
    #[prop(into)] active: Signal<String>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-background/80 backdrop-blur-md">
            <div class="container flex h-16 max-w-screen-xl mx-auto items-center justify-between px-4">
                <div class="md:hidden">
                    <button
                        class="mr-2 h-9 w-9 rounded-md hover:bg-primary/10 text-foreground hover:text-primary"
                        on:click=move |_| set_menu_open(true)
                    >
                        "☰"
                        <span class="sr-only">"Toggle menu"</span>
                    </button>
                </div>

                <nav class="hidden md:flex flex-1 justify-center">
                    <ul class="flex items-center gap-1">
                        {items
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <li>
                                        <button
                                            class=move || {
                                                link_class(DESKTOP_LINK, DESKTOP_ACTIVE, active.with(|a| a == id))
                                            }
                                            on:click=move |_| on_navigate.run(id.to_string())
                                        >
                                            {item.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="flex items-center justify-end">
                    <ModeToggle />
                </div>
            </div>

            <Show when=menu_open>
                <div
                    class="fixed inset-0 z-40 bg-black/50 md:hidden"
                    on:click=move |_| set_menu_open(false)
                ></div>
                <aside class="fixed inset-y-0 left-0 z-50 w-[280px] bg-background border-r md:hidden">
                    <div class="flex items-center justify-between p-4 border-b">
                        <span class="font-semibold">"Navigation"</span>
                        <button
                            class="h-8 w-8 rounded-md hover:bg-primary/10"
                            aria-label="Close menu"
                            on:click=move |_| set_menu_open(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <nav class="flex flex-col p-4">
                        {items
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class=move || {
                                            link_class(MOBILE_LINK, MOBILE_ACTIVE, active.with(|a| a == id))
                                        }
                                        on:click=move |_| {
                                            set_menu_open(false);
                                            on_navigate.run(id.to_string());
                                        }
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </aside>
            </Show>
        </header>
    }
}
