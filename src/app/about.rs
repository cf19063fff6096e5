use leptos::{html, prelude::*};

const SKILLS: [&str; 4] = [
    "Frontend: React, Next.js, TypeScript",
    "Backend: Node.js, Express, PostgreSQL",
    "DevOps: Docker, AWS, CI/CD",
    "Tools: Git, VS Code, Figma",
];

const EXPERIENCE: [&str; 3] = [
    "5+ years of professional web development experience",
    "Led multiple successful projects from concept to deployment",
    "Passionate about clean code and best practices",
];

#[component]
pub fn AboutSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=node_ref id="about" class="min-h-screen flex items-center bg-muted/50">
            <div class="container mx-auto px-4 space-y-8">
                <h2 class="text-3xl font-bold">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="space-y-4">
                        <h3 class="text-xl font-semibold">"Skills"</h3>
                        <ul class="list-disc list-inside space-y-2 text-muted-foreground">
                            {SKILLS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-xl font-semibold">"Experience"</h3>
                        <div class="space-y-4 text-muted-foreground">
                            {EXPERIENCE.iter().map(|s| view! { <p>{*s}</p> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
