use leptos::prelude::*;

use crate::scroll::{PageScroller, ScrollTracker, SCROLLED_THRESHOLD_PX};
use crate::sections::nav_sections;
use crate::theme::{Theme, ThemeStore};

/// Fixed navigation bar. Renders the section registry as links, highlights
/// the tracker's active section, and hands every click to the scroller.
#[component]
pub fn Header() -> impl IntoView {
    let tracker = expect_context::<ScrollTracker>();
    let scroller = expect_context::<PageScroller>();
    let active = tracker.active_section();
    let offset = tracker.scroll_offset();
    let menu_open = scroller.menu_open();

    let nav_class = move || {
        if offset() > SCROLLED_THRESHOLD_PX {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white dark:bg-gray-900 shadow-md py-2"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-4"
        }
    };
    let link_class = move |id: &'static str| {
        if active() == id {
            "text-blue-600 dark:text-blue-400 font-medium transition-colors duration-200"
        } else {
            "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        class="text-2xl font-bold text-blue-600 dark:text-blue-400"
                        on:click=move |_| scroller.scroll_to_top()
                    >
                        {crate::profile::PROFILE.initials}
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        <ul class="flex space-x-6">
                            {nav_sections()
                                .iter()
                                .map(|section| {
                                    let id = section.id;
                                    view! {
                                        <li>
                                            <button
                                                class=move || link_class(id)
                                                on:click=move |_| scroller.scroll_to(id)
                                            >
                                                {section.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle />
                        <button
                            class="text-gray-700 dark:text-gray-300 text-2xl"
                            aria-label=move || {
                                if menu_open() { "Close menu" } else { "Open menu" }
                            }
                            on:click=move |_| scroller.toggle_menu()
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-white dark:bg-gray-900 shadow-lg">
                                <div class="container mx-auto px-4 py-4">
                                    <ul class="space-y-4">
                                        {nav_sections()
                                            .iter()
                                            .map(|section| {
                                                let id = section.id;
                                                view! {
                                                    <li>
                                                        <button
                                                            class=move || {
                                                                format!("block w-full text-left {}", link_class(id))
                                                            }
                                                            on:click=move |_| scroller.scroll_to(id)
                                                        >
                                                            {section.label}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let store = expect_context::<ThemeStore>();
    let theme = store.theme();

    view! {
        <button
            class="p-2 rounded-lg text-gray-500 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white transition-all duration-200"
            aria-label=move || match theme() {
                Theme::Dark => "Switch to light mode",
                Theme::Light => "Switch to dark mode",
            }
            on:click=move |_| store.toggle()
        >
            {move || match theme() {
                Theme::Dark => "☀",
                Theme::Light => "🌙",
            }}
        </button>
    }
}
