use std::borrow::Cow;
use std::rc::Rc;

use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use url::Host;
use yew::prelude::*;

// Same rule browsers apply to <input type="email">
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

/// Rewrites an internationalised domain to punycode, as the browser does
/// before it applies the pattern. `None` if the domain cannot be converted.
fn ascii_address(email: &str) -> Option<Cow<'_, str>> {
    if email.is_ascii() {
        return Some(Cow::Borrowed(email));
    }
    let (local, domain) = email.rsplit_once('@')?;
    if !local.is_ascii() {
        return None;
    }
    match Host::parse(domain) {
        Ok(Host::Domain(domain)) => Some(Cow::Owned(format!("{}@{}", local, domain))),
        _ => None,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    ascii_address(email).map_or(false, |address| EMAIL_RE.is_match(&address))
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("message is required")]
    MissingMessage,
    #[error("contact consent must be answered")]
    MissingConsent,
    #[error("failed to serialize inquiry: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Consent {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "ja")]
    Yes,
    #[serde(rename = "nein")]
    No,
}

impl Consent {
    /// Maps a `<select>` option value.
    pub fn from_value(value: &str) -> Self {
        match value {
            "ja" => Consent::Yes,
            "nein" => Consent::No,
            _ => Consent::Unset,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Consent::Unset => "",
            Consent::Yes => "ja",
            Consent::No => "nein",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub business: String,
    pub email: String,
    pub message: String,
    pub consent: Consent,
    #[serde(skip)]
    pub submitted: bool,
}

impl ContactForm {
    /// Checks the required fields in form order, reporting the first failure.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        // Browsers strip ASCII whitespace only
        let email = self.email.trim_matches(|c: char| c.is_ascii_whitespace());
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if self.consent == Consent::Unset {
            return Err(ContactError::MissingConsent);
        }
        Ok(())
    }
}

pub enum ContactAction {
    SetName(String),
    SetBusiness(String),
    SetEmail(String),
    SetMessage(String),
    SetConsent(Consent),
    Submit,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Confirmation is final
        if self.submitted {
            return self;
        }

        let mut next = (*self).clone();
        match action {
            ContactAction::SetName(v) => next.name = v,
            ContactAction::SetBusiness(v) => next.business = v,
            ContactAction::SetEmail(v) => next.email = v,
            ContactAction::SetMessage(v) => next.message = v,
            ContactAction::SetConsent(c) => next.consent = c,
            ContactAction::Submit => {
                if let Err(e) = next.validate() {
                    warn!("contact form rejected: {}", e);
                    return self;
                }
                next.submitted = true;
            }
        }
        Rc::new(next)
    }
}

/// Receives inquiries that passed validation. A real deployment plugs a mail
/// relay or form backend in here.
pub trait ContactSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Writes the inquiry to the console and nothing else.
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        let payload = serde_json::to_string(form)?;
        info!("contact inquiry (not delivered, no backend configured): {}", payload);
        Ok(())
    }
}

/// Validates `form` and hands it to `sink`. A failed hand-off is logged and
/// still counts as sent, so the visitor sees the confirmation either way.
pub fn send(form: &ContactForm, sink: &dyn ContactSink) -> Result<(), ContactError> {
    form.validate()?;
    if let Err(err) = sink.deliver(form) {
        error!("contact inquiry could not be handed off: {}", err);
    }
    Ok(())
}

#[derive(Clone)]
pub struct SinkHandle(pub Rc<dyn ContactSink>);

impl Default for SinkHandle {
    fn default() -> Self {
        SinkHandle(Rc::new(LogSink))
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn apply(form: Rc<ContactForm>, actions: Vec<ContactAction>) -> Rc<ContactForm> {
        actions.into_iter().fold(form, |f, a| f.reduce(a))
    }

    fn filled() -> Vec<ContactAction> {
        vec![
            ContactAction::SetName("Max Mustermann".into()),
            ContactAction::SetEmail("test@example.at".into()),
            ContactAction::SetMessage("Anfrage Test".into()),
            ContactAction::SetConsent(Consent::from_value("ja")),
        ]
    }

    #[test]
    fn complete_form_submits() {
        let mut actions = filled();
        actions.push(ContactAction::Submit);
        let form = apply(Rc::new(ContactForm::default()), actions);

        assert!(form.submitted);
        assert_eq!(form.name, "Max Mustermann");
        assert_eq!(form.consent, Consent::Yes);
        assert!(form.business.is_empty());
    }

    #[test]
    fn empty_email_blocks_submit() {
        let mut actions = filled();
        actions.push(ContactAction::SetEmail(String::new()));
        actions.push(ContactAction::Submit);
        let form = apply(Rc::new(ContactForm::default()), actions);

        assert!(!form.submitted);
        assert!(matches!(form.validate(), Err(ContactError::MissingEmail)));
    }

    #[test]
    fn each_required_field_is_checked() {
        let base = apply(Rc::new(ContactForm::default()), filled());
        assert!(base.validate().is_ok());

        let mut f = (*base).clone();
        f.name.clear();
        assert!(matches!(f.validate(), Err(ContactError::MissingName)));

        let mut f = (*base).clone();
        f.message.clear();
        assert!(matches!(f.validate(), Err(ContactError::MissingMessage)));

        let mut f = (*base).clone();
        f.consent = Consent::from_value("");
        assert!(matches!(f.validate(), Err(ContactError::MissingConsent)));
    }

    #[test]
    fn declining_consent_still_counts_as_answered() {
        let mut actions = filled();
        actions.push(ContactAction::SetConsent(Consent::No));
        actions.push(ContactAction::Submit);
        assert!(apply(Rc::new(ContactForm::default()), actions).submitted);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["test", "test@", "@example.at", "te st@example.at", "test@exa mple.at", "test@-example.at"] {
            let mut form = (*apply(Rc::new(ContactForm::default()), filled())).clone();
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        assert!(is_valid_email("office@tischlerei-kout.at"));
        assert!(is_valid_email("a.b+c@sub.example.co.at"));
    }

    #[test]
    fn email_surrounding_whitespace_is_ignored() {
        let mut form = (*apply(Rc::new(ContactForm::default()), filled())).clone();
        form.email = "  test@example.at \n".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn email_trailing_nbsp_is_not_stripped() {
        let mut form = (*apply(Rc::new(ContactForm::default()), filled())).clone();
        form.email = "test@example.at\u{00A0}".to_string();
        assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn internationalised_domain_submits() {
        let mut actions = filled();
        actions.push(ContactAction::SetEmail("office@tischlerei-müller.at".into()));
        actions.push(ContactAction::Submit);
        let form = apply(Rc::new(ContactForm::default()), actions);

        assert!(form.submitted);
        assert_eq!(form.email, "office@tischlerei-müller.at");
        assert!(is_valid_email("info@wien.gv.at"));
        assert!(!is_valid_email("müller@example.at"));
        assert!(!is_valid_email("test@exa mple-ü.at"));
    }

    #[test]
    fn submitted_form_is_frozen() {
        let mut actions = filled();
        actions.push(ContactAction::Submit);
        let done = apply(Rc::new(ContactForm::default()), actions);

        let after = apply(
            done.clone(),
            vec![
                ContactAction::SetName(String::new()),
                ContactAction::SetEmail("other@example.at".into()),
                ContactAction::Submit,
            ],
        );
        assert!(Rc::ptr_eq(&done, &after));
        assert!(after.submitted);
        assert_eq!(after.email, "test@example.at");
    }

    #[test]
    fn consent_values_round_through_select() {
        for consent in [Consent::Unset, Consent::Yes, Consent::No] {
            assert_eq!(Consent::from_value(consent.value()), consent);
        }
        assert_eq!(Consent::from_value("vielleicht"), Consent::Unset);
    }

    struct Recorder(RefCell<Vec<String>>);

    impl ContactSink for Recorder {
        fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
            self.0.borrow_mut().push(serde_json::to_string(form)?);
            Ok(())
        }
    }

    #[test]
    fn inquiry_payload_omits_submitted_flag() {
        let form = apply(Rc::new(ContactForm::default()), filled());
        let recorder = Recorder(RefCell::new(Vec::new()));
        recorder.deliver(&form).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&recorder.0.borrow()[0]).unwrap();
        assert_eq!(payload["consent"], "ja");
        assert_eq!(payload["email"], "test@example.at");
        assert!(payload.get("submitted").is_none());
    }

    #[test]
    fn log_sink_accepts_valid_inquiry() {
        let form = apply(Rc::new(ContactForm::default()), filled());
        assert!(LogSink.deliver(&form).is_ok());
    }

    struct OfflineRelay;

    impl ContactSink for OfflineRelay {
        fn deliver(&self, _form: &ContactForm) -> Result<(), ContactError> {
            Err(ContactError::Delivery("relay offline".into()))
        }
    }

    #[test]
    fn failed_delivery_still_confirms() {
        let form = apply(Rc::new(ContactForm::default()), filled());
        let err = OfflineRelay.deliver(&form).unwrap_err();
        assert_eq!(err.to_string(), "delivery failed: relay offline");

        assert!(send(&form, &OfflineRelay).is_ok());
        let form = form.reduce(ContactAction::Submit);
        assert!(form.submitted);
    }

    #[test]
    fn send_rejects_before_delivery() {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let mut form = (*apply(Rc::new(ContactForm::default()), filled())).clone();
        form.message.clear();

        assert!(matches!(send(&form, &recorder), Err(ContactError::MissingMessage)));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn sink_handles_compare_by_identity() {
        let a = SinkHandle::default();
        assert!(a == a.clone());
        assert!(a != SinkHandle::default());
    }
}
