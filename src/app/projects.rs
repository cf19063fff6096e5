use leptos::{either::Either, html, prelude::*};

use crate::content::{Project, PROJECTS};

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative bg-background rounded-xl border h-full flex flex-col overflow-hidden transition-all duration-300 hover:-translate-y-1 hover:border-primary/50 hover:shadow-lg">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent"></div>
            </div>
            <div class="p-6 space-y-4 flex-1 flex flex-col">
                <h3 class="text-xl font-semibold">{project.title}</h3>
                <p class="text-sm text-muted-foreground flex-1">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md px-2 py-0.5 text-xs font-medium bg-primary/10 text-primary">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col gap-2">
                    {project
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 text-sm text-muted-foreground hover:text-primary hover:translate-x-1 transition-all"
                                >
                                    {if link.is_repo {
                                        Either::Left(view! { <i class="devicon-github-original"></i> })
                                    } else {
                                        Either::Right(view! { <span>"↗"</span> })
                                    }}
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=node_ref id="projects" class="min-h-screen py-20">
            <div class="container px-4 mx-auto space-y-16">
                <div class="text-center space-y-4">
                    <h2 class="text-4xl font-bold text-primary">"Featured Projects"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Here are some of my recent projects that showcase my skills and experience"
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
