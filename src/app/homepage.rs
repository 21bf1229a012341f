use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::ContactSection;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

/// The whole page: one section component per registry entry, in registry
/// order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=crate::profile::PROFILE.role />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Experience />
        <ContactSection />
    }
}
