use leptos::prelude::*;

use crate::profile::{Icon, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "My Projects"
                </h2>
                <div class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md overflow-hidden flex flex-col">
                                    <div class="p-6 flex flex-col flex-grow">
                                        <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">
                                            {project.title}
                                        </h3>
                                        <p class="text-gray-600 dark:text-gray-400 mb-4 flex-grow">
                                            {project.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-2 py-1 text-xs font-medium bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200 rounded-full">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="flex items-center gap-4">
                                            <a
                                                href=project.demo_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-1.5 text-blue-600 dark:text-blue-400 hover:underline"
                                            >
                                                <i class=Icon::Link.class()></i>
                                                "Live Demo"
                                            </a>
                                            <a
                                                href=project.code_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-1.5 text-gray-700 dark:text-gray-300 hover:underline"
                                            >
                                                <i class=Icon::GitHub.class()></i>
                                                "Code"
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
