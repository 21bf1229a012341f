use leptos::prelude::*;

use crate::profile::{ABOUT_PARAGRAPHS, PROFILE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "About Me"
                </h2>
                <div class="max-w-3xl mx-auto">
                    {ABOUT_PARAGRAPHS
                        .iter()
                        .map(|text| {
                            view! {
                                <p class="text-gray-700 dark:text-gray-300 mb-6 leading-relaxed">
                                    {*text}
                                </p>
                            }
                        })
                        .collect_view()}
                    <div class="bg-gray-50 dark:bg-gray-800 p-6 rounded-lg mt-8">
                        <p class="text-gray-700 dark:text-gray-300">
                            "Based in " <strong>{PROFILE.location}</strong>
                            " and open to collaborating on meaningful projects. The fastest way to reach me is "
                            <a
                                href=format!("mailto:{}", PROFILE.email)
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                {PROFILE.email}
                            </a> "."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
