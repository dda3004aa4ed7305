use leptos::{ev::SubmitEvent, html, prelude::*};

use super::hooks::use_in_view;
use crate::{
    contact::{ContactRequest, Field, FieldErrors},
    motion::viewport::InViewOptions,
};

#[server(endpoint = "send_contact")]
pub async fn send_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{accept, LogMailer};

    let request = ContactRequest::new(name, email, message);
    accept(request, &LogMailer::from_env()).map_err(|e| {
        tracing::warn!("contact form rejected: {e}");
        ServerFnError::new(e.public_message())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

const INPUT_CLASS: &str = "w-full bg-transparent border-b border-white/15 py-3 text-lg outline-none focus:border-[var(--color-accent)] transition-colors";

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|msg| view! { <p class="mt-2 text-xs text-red-400">{msg}</p> })
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let section = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section, InViewOptions::default().threshold(0.1));

    let form = RwSignal::new(ContactRequest::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (status, set_status) = signal(FormStatus::Idle);
    let send = ServerAction::<SendContact>::new();

    Effect::new(move |_| match send.value().get() {
        Some(Ok(())) => {
            set_status.set(FormStatus::Success);
            form.set(ContactRequest::default());
        }
        Some(Err(e)) => {
            log::warn!("contact submission failed: {e}");
            set_status.set(FormStatus::Error);
        }
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Loading {
            return;
        }
        let request = form.get_untracked();
        let field_errors = request.field_errors();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        set_status.set(FormStatus::Loading);
        send.dispatch(SendContact {
            name: request.name,
            email: request.email,
            message: request.message,
        });
    };

    let edit = move |field: Field, value: String| {
        form.update(|f| match field {
            Field::Name => f.name = value,
            Field::Email => f.email = value,
            Field::Message => f.message = value,
        });
        errors.update(|e| e.clear(field));
        if matches!(status.get_untracked(), FormStatus::Success | FormStatus::Error) {
            set_status.set(FormStatus::Idle);
        }
    };

    view! {
        <section id="contact" class="px-6 md:px-12 py-32">
            <div
                node_ref=section
                class=move || {
                    format!(
                        "max-w-3xl mx-auto transition-all duration-1000 ease-out {}",
                        if in_view.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-12" },
                    )
                }
            >
                <p class="text-xs tracking-[0.3em] uppercase text-[var(--color-accent)]">
                    "Contact"
                </p>
                <h2 class="mt-4 text-4xl md:text-6xl font-light tracking-tight">
                    "Let's build something."
                </h2>
                <form class="mt-16 flex flex-col gap-10" novalidate=true on:submit=on_submit>
                    <label class="block">
                        <span class="text-xs tracking-widest uppercase text-neutral-500">"Name"</span>
                        <input
                            type="text"
                            name="name"
                            autocomplete="name"
                            class=INPUT_CLASS
                            data-cursor="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Name />
                    </label>
                    <label class="block">
                        <span class="text-xs tracking-widest uppercase text-neutral-500">"Email"</span>
                        <input
                            type="email"
                            name="email"
                            autocomplete="email"
                            class=INPUT_CLASS
                            data-cursor="text"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Email />
                    </label>
                    <label class="block">
                        <span class="text-xs tracking-widest uppercase text-neutral-500">"Message"</span>
                        <textarea
                            name="message"
                            rows="5"
                            class=INPUT_CLASS
                            data-cursor="text"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                        ></textarea>
                        <FieldError errors=errors field=Field::Message />
                    </label>
                    <div class="flex items-center gap-6">
                        <button
                            type="submit"
                            class="px-10 py-4 rounded-full bg-[var(--color-accent)] hover:bg-[var(--color-accent-hover)] text-sm tracking-widest uppercase transition-colors disabled:opacity-50"
                            data-cursor="pointer"
                            disabled=move || status.get() == FormStatus::Loading
                        >
                            {move || {
                                if status.get() == FormStatus::Loading { "Sending..." } else { "Send message" }
                            }}
                        </button>
                        {move || match status.get() {
                            FormStatus::Success => {
                                Some(view! { <p class="text-sm text-emerald-400">"Message sent. I'll be in touch."</p> }.into_any())
                            }
                            FormStatus::Error => {
                                Some(view! { <p class="text-sm text-red-400">"Something went wrong. Please try again."</p> }.into_any())
                            }
                            FormStatus::Idle | FormStatus::Loading => None,
                        }}
                    </div>
                </form>
            </div>
        </section>
    }
}
