use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::controller::form::{submit_control, ContactForm, FormError, FormMachine};
use crate::controller::notify::NotificationKind;
use crate::submission::{submission_notice, submit_contact, Submitter};

const PROGRAMS: [(&str, &str); 4] = [
    ("cdl-a", "CDL Class A"),
    ("cdl-b", "CDL Class B"),
    ("refresher", "Refresher Course"),
    ("hazmat", "Hazmat Endorsement"),
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(NotificationKind, String)>,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormProps) -> Html {
    let form = use_state(ContactForm::default);
    let machine = use_mut_ref(FormMachine::default);
    let rerender = use_force_update();

    let on_field = |update: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        }
    };

    let oninput_name = {
        let set = on_field(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let oninput_email = {
        let set = on_field(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let oninput_phone = {
        let set = on_field(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let onchange_program = {
        let set = on_field(|f, v| f.program = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let oninput_message = {
        let set = on_field(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let machine = machine.clone();
        let rerender = rerender.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let data = (*form).clone();

            match machine.borrow_mut().begin(&data) {
                Ok(()) => {}
                Err(FormError::Busy) => return,
                Err(err) => {
                    log!("Contact form rejected:", err.to_string());
                    on_notify.emit((NotificationKind::Error, err.to_string()));
                    return;
                }
            }

            rerender.force_update();
            let form = form.clone();
            let machine = machine.clone();
            let rerender = rerender.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                let submitter = Submitter::from_config();
                let outcome = submit_contact(machine, &submitter, data).await;
                let notice = submission_notice(&outcome);
                on_notify.emit((notice.kind, notice.text));
                if notice.reset_fields {
                    form.set(ContactForm::default());
                }
                rerender.force_update();
            });
        })
    };

    let control = submit_control(machine.borrow().state());

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <input type="text" name="name" placeholder="Full Name" value={form.name.clone()} oninput={oninput_name} />
            </div>
            <div class="form-group">
                <input type="email" name="email" placeholder="Email Address" value={form.email.clone()} oninput={oninput_email} />
            </div>
            <div class="form-group">
                <input type="tel" name="phone" placeholder="Phone Number" value={form.phone.clone()} oninput={oninput_phone} />
            </div>
            <div class="form-group">
                <select name="program" onchange={onchange_program}>
                    <option value="" selected={form.program.is_empty()}>{"Select a Program"}</option>
                    { for PROGRAMS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.program == *value}>{*label}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <textarea name="message" placeholder="Tell us about your goals" rows="4"
                    value={form.message.clone()} oninput={oninput_message}></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled={control.disabled}>
                { control.label }
            </button>
        </form>
    }
}
