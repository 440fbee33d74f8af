use api::{
    contact::{ContactMessage, insert_messages},
    store::RecordStore,
};
use tracing::{debug, error, info};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again later or contact me on my email.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    // matches the name attribute of the form inputs
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Error,
}

// the inline banner shown above the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn none() -> Self {
        FormStatus::default()
    }

    pub fn success() -> Self {
        FormStatus {
            kind: StatusKind::Success,
            message: String::from(SUCCESS_MESSAGE),
        }
    }

    pub fn error() -> Self {
        FormStatus {
            kind: StatusKind::Error,
            message: String::from(FAILURE_MESSAGE),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

// handed out by begin_submit() and consumed by finish()
//
// the generation ties a store result to the attempt that produced it, so that a result
// arriving after cancel() (or for an attempt that was superseded) is dropped on the floor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    draft: ContactMessage,
}

impl SubmitTicket {
    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }
}

// contact form controller
//
// owns the draft and the status banner.  the submit is split into begin_submit() and
// finish() so that the view can hold the controller in a signal and release it across the
// await; submit() glues the two together for callers that own the controller outright
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactMessage,
    status: FormStatus,
    phase: FormPhase,
    generation: u64,
    in_flight: Option<u64>,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Email => &self.draft.email,
            Field::Subject => &self.draft.subject,
            Field::Message => &self.draft.message,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    // edits are always accepted, even mid-submit.  a finished submit drops back to idle
    // but the banner stays up until the next attempt
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Subject => self.draft.subject = value,
            Field::Message => self.draft.message = value,
        }

        if matches!(self.phase, FormPhase::Success | FormPhase::Error) {
            self.phase = FormPhase::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.in_flight.is_some() {
            debug!("submit already in flight, ignoring");
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.status = FormStatus::none();
        self.phase = FormPhase::Submitting;

        Some(SubmitTicket {
            generation: self.generation,
            draft: self.draft.clone(),
        })
    }

    // returns false if the ticket was stale and the result was discarded
    pub fn finish(&mut self, ticket: SubmitTicket, result: anyhow::Result<()>) -> bool {
        if self.in_flight != Some(ticket.generation) {
            debug!({ generation = ticket.generation }, "discarding stale submit result");
            return false;
        }

        self.in_flight = None;

        match result {
            Ok(()) => {
                info!("contact message sent");
                self.status = FormStatus::success();
                self.phase = FormPhase::Success;
                // cleared wholesale, including edits made while the insert was pending
                self.draft = ContactMessage::default();
            }
            Err(err) => {
                error!("error sending message: {err:#}");
                self.status = FormStatus::error();
                self.phase = FormPhase::Error;
            }
        }

        true
    }

    // the view is going away; whatever the store says next is ignored
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            debug!("cancelled in-flight submit");
            self.phase = FormPhase::Idle;
        }
    }

    pub async fn submit<S: RecordStore + ?Sized>(&mut self, store: &S) -> bool {
        let Some(ticket) = self.begin_submit() else {
            return false;
        };

        let result = insert_messages(store, ticket.draft()).await;

        self.finish(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::Value;

    use super::*;

    #[derive(Default)]
    struct AcceptingStore {
        inserts: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl RecordStore for AcceptingStore {
        async fn insert(&self, _collection: &str, _record: Value) -> anyhow::Result<()> {
            self.inserts.set(self.inserts.get() + 1);
            Ok(())
        }
    }

    struct RejectingStore;

    #[async_trait(?Send)]
    impl RecordStore for RejectingStore {
        async fn insert(&self, _collection: &str, _record: Value) -> anyhow::Result<()> {
            Err(anyhow::Error::msg("permission denied for table messages"))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "A");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Test");
        form
    }

    #[test]
    fn field_names_match_inputs() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
    }

    #[tokio::test]
    async fn accepted_submit_clears_the_draft() {
        let store = AcceptingStore::default();
        let mut form = filled();

        assert!(form.submit(&store).await);

        assert_eq!(store.inserts.get(), 1);
        assert_eq!(form.status().kind, StatusKind::Success);
        assert_eq!(form.status().message, SUCCESS_MESSAGE);
        assert_eq!(form.phase, FormPhase::Success);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[tokio::test]
    async fn rejected_submit_keeps_the_draft() {
        let mut form = filled();
        let before = form.draft.clone();

        assert!(form.submit(&RejectingStore).await);

        assert_eq!(form.status().kind, StatusKind::Error);
        assert_eq!(form.status().message, FAILURE_MESSAGE);
        assert_eq!(form.phase, FormPhase::Error);
        assert_eq!(form.draft, before);
    }

    #[test]
    fn begin_submit_resets_the_banner() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.finish(ticket, Err(anyhow::Error::msg("offline")));
        assert!(form.status().is_visible());

        let ticket = form.begin_submit().unwrap();
        assert_eq!(*form.status(), FormStatus::none());
        assert_eq!(form.phase, FormPhase::Submitting);
        assert_eq!(ticket.draft().subject, "Hi");
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled();

        let first = form.begin_submit();
        assert_matches!(first, Some(_));
        assert!(form.is_submitting());
        assert_matches!(form.begin_submit(), None);

        assert!(form.finish(first.unwrap(), Ok(())));
        assert!(!form.is_submitting());
        assert_matches!(form.begin_submit(), Some(_));
    }

    #[test]
    fn result_after_cancel_is_discarded() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();

        form.cancel();
        assert_eq!(form.phase, FormPhase::Idle);

        assert!(!form.finish(ticket, Ok(())));
        assert_eq!(form.status().kind, StatusKind::None);
        assert_eq!(form.field(Field::Name), "A");
    }

    #[test]
    fn stale_ticket_does_not_clobber_newer_attempt() {
        let mut form = filled();
        let old = form.begin_submit().unwrap();
        form.cancel();

        let new = form.begin_submit().unwrap();
        assert!(!form.finish(old, Err(anyhow::Error::msg("late failure"))));
        assert!(form.is_submitting());

        assert!(form.finish(new, Ok(())));
        assert_eq!(form.status().kind, StatusKind::Success);
    }

    #[test]
    fn editing_after_a_result_returns_to_idle() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.finish(ticket, Err(anyhow::Error::msg("offline")));
        assert_eq!(form.phase, FormPhase::Error);

        form.update_field(Field::Message, "Test again");
        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.status().kind, StatusKind::Error);
        assert_eq!(form.field(Field::Message), "Test again");
    }

    #[test]
    fn success_clears_edits_made_mid_submit() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();

        form.update_field(Field::Message, "Actually, one more thing");
        assert!(form.finish(ticket, Ok(())));

        assert_eq!(form.draft, ContactMessage::default());
        assert_eq!(form.status().kind, StatusKind::Success);
    }

    #[test]
    fn edits_are_accepted_mid_submit() {
        let mut form = filled();
        let _ticket = form.begin_submit().unwrap();

        form.update_field(Field::Name, "B");
        assert_eq!(form.field(Field::Name), "B");
        assert_eq!(form.phase, FormPhase::Submitting);
    }
}
