use leptos::prelude::*;

use crate::profile::{SKILLS, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "My Skills"
                </h2>
                <div class="max-w-5xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                        {SKILL_CATEGORIES
                            .iter()
                            .map(|category| {
                                let group = SKILLS
                                    .iter()
                                    .filter(|skill| skill.category == *category)
                                    .collect::<Vec<_>>();
                                view! {
                                    <div class="bg-white dark:bg-gray-700 rounded-xl p-6 shadow-md">
                                        <h3 class="text-xl font-semibold text-gray-800 dark:text-gray-200 mb-6">
                                            {category.label()}
                                        </h3>
                                        <div class="space-y-5">
                                            {group
                                                .into_iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div>
                                                            <div class="flex items-center mb-1.5">
                                                                <i class=format!(
                                                                    "{} text-blue-600 dark:text-blue-400 mr-3",
                                                                    skill.icon.class(),
                                                                )></i>
                                                                <span class="text-gray-800 dark:text-gray-200 font-medium">
                                                                    {skill.name}
                                                                </span>
                                                                <span class="ml-auto text-sm text-gray-500 dark:text-gray-400">
                                                                    {format!("{}%", skill.proficiency)}
                                                                </span>
                                                            </div>
                                                            <div class="h-2 bg-gray-200 dark:bg-gray-600 rounded-full overflow-hidden">
                                                                <div
                                                                    class="h-full bg-blue-600 dark:bg-blue-400 rounded-full"
                                                                    style:width=format!("{}%", skill.proficiency)
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
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
