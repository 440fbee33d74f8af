use dioxus::prelude::*;

use api::contact::insert_messages;
use common::{
    config::PortfolioConfig,
    contact::{ContactForm, Field, StatusKind},
};

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    form: Signal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[props(default = "text")]
    input_type: &'static str,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;

    let value = form.read().field(field).to_owned();

    if field == Field::Message {
        return rsx! {
            textarea {
                class: "form-textarea",
                name: field.name(),
                rows: 5,
                required: true,
                placeholder: props.placeholder,
                value: "{value}",
                oninput: move |evt| form.write().update_field(field, evt.value()),
            }
        };
    }

    rsx! {
        input {
            class: "form-input",
            r#type: props.input_type,
            name: field.name(),
            required: true,
            placeholder: props.placeholder,
            value: "{value}",
            oninput: move |evt| form.write().update_field(field, evt.value()),
        }
    }
}

// contact form
//
// the controller lives in a signal owned by this component.  the insert runs as a task
// in this scope, so it dies with the component; cancel() additionally makes sure a result
// that still lands is not applied
#[component]
pub fn MessageForm() -> Element {
    let mut form = use_signal(ContactForm::new);
    let store = use_hook(|| consume_context::<PortfolioConfig>().store.client());

    use_drop(move || {
        if let Ok(mut form) = form.try_write() {
            form.cancel();
        }
    });

    let status = form.read().status().clone();
    let submitting = form.read().is_submitting();

    let status_class = match status.kind {
        StatusKind::Success => "form-status success",
        StatusKind::Error => "form-status error",
        StatusKind::None => "form-status",
    };

    rsx! {
        div { class: "contact-form-card",
            h3 { class: "contact-form-title", "Send a Message" }

            if status.is_visible() {
                div { class: "{status_class}", role: "status", "{status.message}" }
            }

            form {
                class: "contact-form",
                onsubmit: move |evt| {
                    evt.prevent_default();

                    let Some(ticket) = form.write().begin_submit() else {
                        return;
                    };

                    let store = store.clone();
                    spawn(async move {
                        let result = insert_messages(&store, ticket.draft()).await;

                        if let Ok(mut form) = form.try_write() {
                            form.finish(ticket, result);
                        }
                    });
                },

                div { class: "form-row",
                    FormField { form, field: Field::Name, placeholder: "Your Name" }
                    FormField {
                        form,
                        field: Field::Email,
                        placeholder: "Your Email",
                        input_type: "email",
                    }
                }
                FormField { form, field: Field::Subject, placeholder: "Subject" }
                FormField { form, field: Field::Message, placeholder: "Your Message" }

                button {
                    class: "btn btn-accent btn-lg btn-block",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        "Sending..."
                    } else {
                        "Send Message"
                    }
                }
            }
        }
    }
}
