use leptos::{ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::NAV_ITEMS,
    nav::{Bounds, SectionGeometry, SectionTracker, Viewport, HEADER_OFFSET},
};

use super::{
    about::AboutSection, contact::ContactSection, header::SiteHeader, hero::HeroSection,
    projects::ProjectsSection, stack::StackSection,
};

/// A mounted `<section>`, measured against the document on every call.
#[derive(Clone, Copy)]
struct DomSection(NodeRef<html::Section>);

impl SectionGeometry for DomSection {
    fn bounds(&self) -> Option<Bounds> {
        let el = self.0.get_untracked()?;
        let rect = el.get_bounding_client_rect();
        let scroll_y = window().scroll_y().ok()?;
        Some(Bounds::new(rect.top() + scroll_y, rect.bottom() + scroll_y))
    }
}

fn current_viewport() -> Option<Viewport> {
    let window = window();
    Some(Viewport {
        scroll_top: window.scroll_y().ok()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let refs: [NodeRef<html::Section>; NAV_ITEMS.len()] = std::array::from_fn(|_| NodeRef::new());
    let [home_ref, about_ref, stack_ref, projects_ref, contact_ref] = refs;

    let tracker = StoredValue::new({
        let mut tracker = SectionTracker::new(HEADER_OFFSET);
        for (item, node_ref) in NAV_ITEMS.iter().zip(refs) {
            tracker.register(item.id, item.label, DomSection(node_ref));
        }
        tracker
    });
    let (active, set_active) = signal(NAV_ITEMS[0].id.to_string());

    let sync_active = move || {
        let viewport = if let Some(v) = current_viewport() {
            v
        } else {
            return;
        };
        let mut next = None;
        tracker.update_value(|t| next = t.recompute(viewport).map(str::to_owned));
        if let Some(id) = next {
            if active.with_untracked(|a| *a != id) {
                set_active(id);
            }
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| sync_active());
    let _ = use_event_listener(use_window(), ev::resize, move |_| sync_active());

    // establish the initial section once the DOM is in place
    Effect::new(move |_| sync_active());

    let on_navigate = Callback::new(move |id: String| {
        let mut nav = None;
        tracker.update_value(|t| nav = t.navigate(&id));
        let nav = if let Some(nav) = nav {
            nav
        } else {
            log::warn!("navigation to unknown section {id}");
            return;
        };
        set_active(nav.active);
        if let Some(top) = nav.scroll_to {
            smooth_scroll_to(top);
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen bg-background text-foreground">
            <SiteHeader items=&NAV_ITEMS active on_navigate />
            <main class="container mx-auto px-4 sm:px-6 lg:px-8">
                <HeroSection node_ref=home_ref />
                <AboutSection node_ref=about_ref />
                <StackSection node_ref=stack_ref />
                <ProjectsSection node_ref=projects_ref />
                <ContactSection node_ref=contact_ref />
            </main>
        </div>
    }
}
