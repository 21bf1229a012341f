use leptos::prelude::*;

use crate::profile::{PROFILE, SOCIAL_LINKS};
use crate::scroll::PageScroller;
use crate::sections::nav_sections;

// Set by build.rs; the copyright year tracks the build, not the client clock.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let scroller = expect_context::<PageScroller>();
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-center mb-8">
                    <button
                        class="bg-blue-600 hover:bg-blue-700 rounded-full w-12 h-12 text-xl transition-colors duration-300"
                        aria-label="Back to top"
                        on:click=move |_| scroller.scroll_to_top()
                    >
                        "↑"
                    </button>
                </div>

                <div class="flex flex-col items-center">
                    <div class="text-2xl font-bold text-blue-400 mb-6">{PROFILE.initials}</div>

                    <nav class="mb-6">
                        <ul class="flex flex-wrap justify-center gap-x-8 gap-y-3">
                            {nav_sections()
                                .iter()
                                .map(|section| {
                                    let id = section.id;
                                    view! {
                                        <li>
                                            <button
                                                class="text-gray-400 hover:text-white transition-colors duration-300"
                                                on:click=move |_| scroller.scroll_to(id)
                                            >
                                                {section.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="flex items-center justify-center space-x-6 mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=format!("Visit {}", link.name)
                                        class="text-gray-400 hover:text-white text-2xl transition-colors duration-300"
                                    >
                                        <i class=link.icon.class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-sm text-gray-400 text-center">
                        <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                        <p class="mt-1">"Designed and built with Leptos and TailwindCSS"</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
