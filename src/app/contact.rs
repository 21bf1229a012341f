use leptos::{html, prelude::*};

use crate::contact::{
    validate, ContactMessage, FieldErrors, FormStatus, MailtoSender, MessageSender, SUBMIT_DELAY,
    SUCCESS_RESET,
};
use crate::profile::{PROFILE, SOCIAL_LINKS};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";
const ERROR_INPUT_CLASS: &str = "w-full px-4 py-2 border border-red-500 rounded-lg focus:ring-2 focus:ring-red-500 focus:border-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";

#[component]
pub fn ContactSection() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (errors, set_errors) = signal(FieldErrors::default());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }
        let (Some(name_el), Some(email_el), Some(subject_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };

        let msg = ContactMessage {
            name: name_el.value(),
            email: email_el.value(),
            subject: subject_el.value(),
            message: message_el.value(),
        };
        let field_errors = validate(&msg);
        if !field_errors.is_empty() {
            set_errors(field_errors);
            return;
        }
        set_errors(FieldErrors::default());
        set_status(FormStatus::Submitting);

        // Simulated delivery delay; the send itself is synchronous.
        set_timeout(
            move || {
                let sender = MailtoSender::new(PROFILE.email);
                match sender.send(&msg) {
                    Ok(()) => {
                        name_el.set_value("");
                        email_el.set_value("");
                        subject_el.set_value("");
                        message_el.set_value("");
                        set_status(FormStatus::Success);
                        set_timeout(move || set_status(FormStatus::Idle), SUCCESS_RESET);
                    }
                    Err(err) => {
                        log::error!("contact form delivery failed: {err}");
                        set_status(FormStatus::Error);
                    }
                }
            },
            SUBMIT_DELAY,
        );
    };

    let field_error = move |message: Option<&'static str>| {
        message.map(|text| {
            view! { <p class="mt-2 text-sm text-red-600 dark:text-red-400">{text}</p> }
        })
    };

    view! {
        <section id="contact" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "Get In Touch"
                </h2>

                <div class="max-w-3xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>
                            <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                                "Contact Information"
                            </h3>
                            <p class="text-gray-700 dark:text-gray-300 mb-6 leading-relaxed">
                                "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                            </p>
                            <div class="space-y-4 mb-8">
                                <div class="flex items-center">
                                    <span class="text-blue-600 dark:text-blue-400 font-medium w-24">
                                        "Email:"
                                    </span>
                                    <a
                                        href=format!("mailto:{}", PROFILE.email)
                                        class="text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-300"
                                    >
                                        {PROFILE.email}
                                    </a>
                                </div>
                                <div class="flex items-center">
                                    <span class="text-blue-600 dark:text-blue-400 font-medium w-24">
                                        "Location:"
                                    </span>
                                    <span class="text-gray-700 dark:text-gray-300">
                                        {PROFILE.location}
                                    </span>
                                </div>
                            </div>
                            <h4 class="text-lg font-medium text-gray-900 dark:text-white mb-3">
                                "Connect with me:"
                            </h4>
                            <div class="flex items-center space-x-6">
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
                        </div>

                        <form class="space-y-4" on:submit=on_submit>
                            <div>
                                <label
                                    for="name"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Your Name"
                                </label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id="name"
                                    name="name"
                                    class=move || {
                                        if errors().name.is_some() { ERROR_INPUT_CLASS } else { INPUT_CLASS }
                                    }
                                />
                                {move || field_error(errors().name)}
                            </div>
                            <div>
                                <label
                                    for="email"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Your Email"
                                </label>
                                <input
                                    node_ref=email_ref
                                    type="text"
                                    id="email"
                                    name="email"
                                    class=move || {
                                        if errors().email.is_some() { ERROR_INPUT_CLASS } else { INPUT_CLASS }
                                    }
                                />
                                {move || field_error(errors().email)}
                            </div>
                            <div>
                                <label
                                    for="subject"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Subject (optional)"
                                </label>
                                <input
                                    node_ref=subject_ref
                                    type="text"
                                    id="subject"
                                    name="subject"
                                    class=INPUT_CLASS
                                />
                            </div>
                            <div>
                                <label
                                    for="message"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Your Message"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id="message"
                                    name="message"
                                    rows=5
                                    class=move || {
                                        if errors().message.is_some() {
                                            format!("{ERROR_INPUT_CLASS} resize-none")
                                        } else {
                                            format!("{INPUT_CLASS} resize-none")
                                        }
                                    }
                                ></textarea>
                                {move || field_error(errors().message)}
                            </div>
                            <button
                                type="submit"
                                disabled=move || status() == FormStatus::Submitting
                                class="w-full flex items-center justify-center px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg shadow-lg transition-all duration-300 text-lg font-medium disabled:opacity-70"
                            >
                                {move || {
                                    if status() == FormStatus::Submitting {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                            {move || {
                                match status() {
                                    FormStatus::Success => {
                                        Some(
                                            view! {
                                                <div class="mt-4 p-3 bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200 rounded-lg">
                                                    "Your message has been sent successfully! I'll get back to you soon."
                                                </div>
                                            }
                                                .into_any(),
                                        )
                                    }
                                    FormStatus::Error => {
                                        Some(
                                            view! {
                                                <div class="mt-4 p-3 bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200 rounded-lg flex items-start justify-between">
                                                    <span>
                                                        "Something went wrong. Please try again or reach out directly."
                                                    </span>
                                                    <button
                                                        aria-label="Dismiss"
                                                        on:click=move |_| set_status(FormStatus::Idle)
                                                    >
                                                        "✕"
                                                    </button>
                                                </div>
                                            }
                                                .into_any(),
                                        )
                                    }
                                    _ => None,
                                }
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
