use leptos::prelude::*;

use crate::profile::EXPERIENCE;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "Work Experience"
                </h2>
                <div class="max-w-3xl mx-auto">
                    <div class="relative border-l-2 border-blue-600 dark:border-blue-400 pl-8 ml-4">
                        {EXPERIENCE
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="mb-12 last:mb-0">
                                        <div class="absolute -left-2 mt-2 w-4 h-4 bg-blue-600 dark:bg-blue-400 rounded-full"></div>
                                        <div class="bg-white dark:bg-gray-700 rounded-lg shadow-md p-6">
                                            <div class="flex flex-col sm:flex-row sm:items-center justify-between mb-4">
                                                <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                                    {item.role}
                                                </h3>
                                                <span class="text-sm text-blue-600 dark:text-blue-400 font-medium">
                                                    {item.period}
                                                </span>
                                            </div>
                                            <p class="text-lg text-gray-700 dark:text-gray-300 mb-3">
                                                {item.company}
                                            </p>
                                            <ul class="list-disc ml-5 text-gray-600 dark:text-gray-400 space-y-2">
                                                {item
                                                    .highlights
                                                    .iter()
                                                    .map(|highlight| view! { <li>{*highlight}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
