use leptos::prelude::*;

use crate::profile::{PROFILE, SOCIAL_LINKS};
use crate::scroll::PageScroller;

#[component]
pub fn Hero() -> impl IntoView {
    let scroller = expect_context::<PageScroller>();

    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <p class="text-blue-600 dark:text-blue-400 font-medium text-lg mb-4">
                    "Hello, I'm"
                </p>
                <h1 class="text-4xl sm:text-6xl font-bold text-gray-900 dark:text-white mb-4">
                    {PROFILE.name}
                </h1>
                <h2 class="text-2xl sm:text-3xl text-gray-700 dark:text-gray-300 mb-6">
                    {PROFILE.role}
                </h2>
                <p class="max-w-2xl mx-auto text-lg text-gray-600 dark:text-gray-400 mb-8 leading-relaxed">
                    {PROFILE.tagline}
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12">
                    <button
                        class="px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg shadow-lg transition-all duration-300 text-lg font-medium"
                        on:click=move |_| scroller.scroll_to("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-8 py-3 border border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-600/10 rounded-lg transition-all duration-300 text-lg font-medium"
                        on:click=move |_| scroller.scroll_to("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>

                <div class="flex items-center justify-center space-x-6 mb-16">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("Visit {}", link.name)
                                    class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 text-2xl transition-colors duration-300"
                                >
                                    <i class=link.icon.class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="text-gray-500 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 text-2xl animate-bounce"
                    aria-label="Scroll to about section"
                    on:click=move |_| scroller.scroll_to("about")
                >
                    "↓"
                </button>
            </div>
        </section>
    }
}
