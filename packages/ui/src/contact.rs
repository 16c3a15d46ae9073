use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;

use api::types::{ContactField, ContactMessage};

use crate::whatsapp::{deep_link, DEFAULT_PHONE, GREETING};

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

/// Where the form hands its message off.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), ServerFnError>;
}

/// Posts the message to the site's `/api/contact` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSubmitter;

#[async_trait(?Send)]
impl ContactSubmitter for ServerSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), ServerFnError> {
        api::submit_contact(message).await
    }
}

/// Submitter shared through context; provide one above [`ContactForm`] to replace the server call.
pub type SharedSubmitter = Rc<dyn ContactSubmitter>;

/// The provided submitter, or [`ServerSubmitter`] when none is in context.
pub fn submitter_or_default(provided: Option<SharedSubmitter>) -> SharedSubmitter {
    provided.unwrap_or_else(|| Rc::new(ServerSubmitter))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight.
    Busy,
    /// Required fields are blank.
    Missing(Vec<ContactField>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    fields: ContactMessage,
    status: SubmitStatus,
}

impl ContactFormState {
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        *self.fields.get_mut(field) = value;
    }

    /// Move to `Submitting` and snapshot the fields to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitRejected::Busy);
        }
        self.fields.validate().map_err(SubmitRejected::Missing)?;
        self.status = SubmitStatus::Submitting;
        Ok(self.fields.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ServerFnError>) {
        match outcome {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    /// Run a whole submission against `submitter`.
    pub async fn submit<S: ContactSubmitter + ?Sized>(
        &mut self,
        submitter: &S,
    ) -> Result<(), SubmitRejected> {
        let message = self.begin_submit()?;
        let outcome = submitter.submit(message).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Chat text carrying the current field values.
    pub fn whatsapp_text(&self) -> String {
        format!(
            "{GREETING}Nom: {}\nTéléphone: {}\n\nMessage: {}",
            self.fields.name, self.fields.phone, self.fields.message
        )
    }

    pub fn whatsapp_url(&self, phone: &str) -> String {
        deep_link(phone, &self.whatsapp_text())
    }
}

#[component]
pub fn ContactForm(#[props(default = DEFAULT_PHONE.to_string())] phone_number: String) -> Element {
    let lang = crate::use_lang()();
    let submitter = submitter_or_default(try_use_context::<SharedSubmitter>());
    let mut form = use_signal(ContactFormState::default);
    let mut missing = use_signal(Vec::<ContactField>::new);

    let state = form();
    let submitting = state.status() == SubmitStatus::Submitting;
    let whatsapp_url = state.whatsapp_url(&phone_number);

    let field_class = move |field: ContactField| {
        if missing().contains(&field) {
            "form_input invalid"
        } else {
            "form_input"
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }
        div { class: "contact_card",
            form {
                class: "contact_form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let attempt = form.write().begin_submit();
                    match attempt {
                        Ok(message) => {
                            missing.set(Vec::new());
                            let submitter = submitter.clone();
                            spawn(async move {
                                let outcome = submitter.submit(message).await;
                                form.write().finish_submit(outcome);
                            });
                        }
                        Err(SubmitRejected::Missing(fields)) => missing.set(fields),
                        Err(SubmitRejected::Busy) => {}
                    }
                },

                div { class: "form_group",
                    label { r#for: "name", class: "form_label", {crate::t(lang, "contact.name")} }
                    input {
                        r#type: "text",
                        id: "name",
                        name: "name",
                        class: field_class(ContactField::Name),
                        placeholder: crate::t(lang, "contact.name_placeholder"),
                        value: "{state.fields().name}",
                        required: true,
                        oninput: move |e| form.write().set(ContactField::Name, e.value()),
                    }
                }

                div { class: "form_group",
                    label { r#for: "phone", class: "form_label", {crate::t(lang, "contact.phone")} }
                    input {
                        r#type: "tel",
                        id: "phone",
                        name: "phone",
                        class: field_class(ContactField::Phone),
                        placeholder: crate::t(lang, "contact.phone_placeholder"),
                        value: "{state.fields().phone}",
                        required: true,
                        oninput: move |e| form.write().set(ContactField::Phone, e.value()),
                    }
                }

                div { class: "form_group",
                    label { r#for: "email", class: "form_label", {crate::t(lang, "contact.email")} }
                    input {
                        r#type: "email",
                        id: "email",
                        name: "email",
                        class: "form_input",
                        placeholder: crate::t(lang, "contact.email_placeholder"),
                        value: "{state.fields().email}",
                        oninput: move |e| form.write().set(ContactField::Email, e.value()),
                    }
                }

                div { class: "form_group",
                    label { r#for: "message", class: "form_label", {crate::t(lang, "contact.message")} }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: 4,
                        class: field_class(ContactField::Message),
                        placeholder: crate::t(lang, "contact.message_placeholder"),
                        value: "{state.fields().message}",
                        required: true,
                        oninput: move |e| form.write().set(ContactField::Message, e.value()),
                    }
                }

                if !missing().is_empty() {
                    div { class: "form_status form_status_error", {crate::t(lang, "contact.missing")} }
                }
                match state.status() {
                    SubmitStatus::Success => rsx! {
                        div { class: "form_status form_status_success", {crate::t(lang, "contact.success")} }
                    },
                    SubmitStatus::Error => rsx! {
                        div { class: "form_status form_status_error", {crate::t(lang, "contact.error")} }
                    },
                    SubmitStatus::Idle | SubmitStatus::Submitting => rsx! {},
                }

                div { class: "form_actions",
                    button {
                        r#type: "submit",
                        class: "btn primary",
                        disabled: submitting,
                        if submitting {
                            {crate::t(lang, "contact.sending")}
                        } else {
                            {crate::t(lang, "contact.submit")}
                        }
                    }
                    a {
                        class: "btn whatsapp",
                        href: "{whatsapp_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {crate::t(lang, "contact.whatsapp")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeSubmitter {
        succeed: bool,
        seen: RefCell<Vec<ContactMessage>>,
    }

    impl FakeSubmitter {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for FakeSubmitter {
        async fn submit(&self, message: ContactMessage) -> Result<(), ServerFnError> {
            self.seen.borrow_mut().push(message);
            if self.succeed {
                Ok(())
            } else {
                Err(ServerFnError::new("backend unavailable"))
            }
        }
    }

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.set(ContactField::Name, "Amina Benali".into());
        form.set(ContactField::Phone, "0555 12 34 56".into());
        form.set(ContactField::Email, "amina@example.com".into());
        form.set(ContactField::Message, "Rendez-vous svp".into());
        form
    }

    #[test]
    fn begin_submit_enters_submitting() {
        let mut form = filled();
        assert_eq!(form.status(), SubmitStatus::Idle);
        let message = form.begin_submit().expect("filled form can be submitted");
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(&message, form.fields());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Busy));
    }

    #[tokio::test]
    async fn successful_submit_clears_fields() {
        let mut form = filled();
        let expected = form.fields().clone();
        let submitter = FakeSubmitter::new(true);

        form.submit(&submitter).await.unwrap();

        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.fields().is_empty());
        assert_eq!(*submitter.seen.borrow(), vec![expected]);
    }

    #[tokio::test]
    async fn failed_submit_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();

        form.submit(&FakeSubmitter::new(false)).await.unwrap();

        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.fields(), &before);
    }

    #[tokio::test]
    async fn resubmitting_after_error_goes_back_to_submitting() {
        let mut form = filled();
        form.submit(&FakeSubmitter::new(false)).await.unwrap();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[tokio::test]
    async fn blank_required_fields_block_submission() {
        let mut form = ContactFormState::default();
        form.set(ContactField::Name, "Amina".into());
        form.set(ContactField::Message, "   ".into());
        let submitter = FakeSubmitter::new(true);

        let result = form.submit(&submitter).await;

        assert_eq!(
            result,
            Err(SubmitRejected::Missing(vec![
                ContactField::Phone,
                ContactField::Message
            ]))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(submitter.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn provided_submitter_replaces_the_server_call() {
        let fake = Rc::new(FakeSubmitter::new(true));
        let submitter = submitter_or_default(Some(fake.clone() as SharedSubmitter));
        let mut form = filled();
        let expected = form.fields().clone();

        form.submit(&*submitter).await.unwrap();

        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(*fake.seen.borrow(), vec![expected]);
    }

    #[test]
    fn server_submitter_is_the_default() {
        let fake: SharedSubmitter = Rc::new(FakeSubmitter::new(true));
        let kept = submitter_or_default(Some(fake.clone()));
        assert!(Rc::ptr_eq(&kept, &fake));
        let fallback = submitter_or_default(None);
        assert!(!Rc::ptr_eq(&fallback, &fake));
    }

    #[test]
    fn editing_after_success_keeps_status_until_next_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        form.set(ContactField::Name, "Karim".into());
        assert_eq!(form.status(), SubmitStatus::Success);
    }

    #[test]
    fn whatsapp_link_carries_current_fields() {
        let mut form = ContactFormState::default();
        form.set(ContactField::Name, "Ali & Co".into());
        form.set(ContactField::Phone, "+213 5".into());
        form.set(ContactField::Message, "Dispo ?".into());

        assert_eq!(
            form.whatsapp_text(),
            "Bonjour, je vous contacte depuis le site web de la Clinique Audin.\n\nNom: Ali & Co\nTéléphone: +213 5\n\nMessage: Dispo ?"
        );

        let url = form.whatsapp_url(DEFAULT_PHONE);
        assert!(url.starts_with("https://wa.me/213560055803?text=Bonjour%2C%20"));
        assert!(url.contains("Nom%3A%20Ali%20%26%20Co%0AT%C3%A9l%C3%A9phone%3A%20%2B213%205"));
        assert!(url.ends_with("Message%3A%20Dispo%20%3F"));
    }

    #[test]
    fn whatsapp_link_available_while_submitting() {
        let mut form = filled();
        let before = form.whatsapp_url(DEFAULT_PHONE);
        form.begin_submit().unwrap();
        assert_eq!(form.whatsapp_url(DEFAULT_PHONE), before);
    }
}
