use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::components::section::{Section, SectionTitle};
use crate::contact::{send, ContactAction, ContactForm, Consent, SinkHandle};
use crate::content::{self, COMPANY, EMAIL, OFFICE_HOURS, PHONE_DISPLAY, PHONE_URI};
use crate::reveal::{Motion, Reveal};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub sink: SinkHandle,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        let sink = props.sink.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match send(&form, sink.0.as_ref()) {
                Ok(()) => form.dispatch(ContactAction::Submit),
                Err(err) => warn!("contact form rejected: {}", err),
            }
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetName(input.value()));
        })
    };
    let on_business = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetBusiness(input.value()));
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetEmail(input.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetMessage(input.value()));
        })
    };
    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetConsent(Consent::from_value(&select.value())));
        })
    };

    html! {
        <Section id="kontakt" class="cream">
            <div class="container">
                <SectionTitle title="Kontakt" subtitle="Treten Sie mit uns in Kontakt!" />

                <div class="contact-grid">
                    <Reveal motion={Motion::slide(-30.0)}>
                        {
                            if form.submitted {
                                html! {
                                    <div class="card contact-done">
                                        <div class="done-badge">
                                            <Icon name={icons::SEND} />
                                        </div>
                                        <h3>{"Nachricht gesendet!"}</h3>
                                        <p class="card-text">
                                            {"Vielen Dank für Ihre Anfrage. Wir melden uns so bald wie möglich bei Ihnen."}
                                        </p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="card contact-form" onsubmit={onsubmit}>
                                        <label>
                                            {"Ihr Name "}<span class="required">{"*"}</span>
                                            <input
                                                type="text"
                                                required={true}
                                                class="form-input"
                                                placeholder="Max Mustermann"
                                                value={form.name.clone()}
                                                oninput={on_name}
                                            />
                                        </label>
                                        <label>
                                            {"Ihr Unternehmen"}
                                            <input
                                                type="text"
                                                class="form-input"
                                                placeholder="Firma GmbH"
                                                value={form.business.clone()}
                                                oninput={on_business}
                                            />
                                        </label>
                                        <label>
                                            {"Ihre E-Mail-Adresse "}<span class="required">{"*"}</span>
                                            <input
                                                type="email"
                                                required={true}
                                                class="form-input"
                                                placeholder="email@beispiel.at"
                                                value={form.email.clone()}
                                                oninput={on_email}
                                            />
                                        </label>
                                        <label>
                                            {"Ihre Nachricht "}<span class="required">{"*"}</span>
                                            <textarea
                                                required={true}
                                                rows="5"
                                                class="form-input"
                                                placeholder="Beschreiben Sie Ihr Anliegen. Skizzen und Fotos können gerne per E-Mail nachgereicht werden."
                                                value={form.message.clone()}
                                                oninput={on_message}
                                            />
                                        </label>
                                        <label>
                                            {"Dürfen wir Kontakt aufnehmen? "}<span class="required">{"*"}</span>
                                            <select required={true} class="form-input" onchange={on_consent}>
                                                <option value="" selected={form.consent == Consent::Unset}>{"Bitte wählen..."}</option>
                                                <option value="ja" selected={form.consent == Consent::Yes}>{"Ja"}</option>
                                                <option value="nein" selected={form.consent == Consent::No}>{"Nein"}</option>
                                            </select>
                                        </label>
                                        <p class="form-note">
                                            {"* Pflichtfeld. Ihre Daten werden ausschließlich in unserem Unternehmen verwaltet und in keiner Form an Dritte weitergeleitet."}
                                        </p>
                                        <button type="submit" class="cta-button large full">
                                            <Icon name={icons::SEND} />
                                            {"Nachricht senden"}
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </Reveal>

                    <Reveal class="contact-info" motion={Motion::slide(30.0)}>
                        <div class="card">
                            <h3>{"Für Anfragen"}</h3>
                            <p class="card-text">
                                {"Für Anfragen empfehlen wir eine kurze Beschreibung und wenn möglich die Übermittlung von Skizzen und Fotos."}
                            </p>
                            <div class="notice">
                                <strong>{"Hinweis:"}</strong>
                                {" Bitte beachten Sie, dass Anfragen ohne Kontaktdaten (Postleitzahl, Telefonnummer, Anrede) von uns nicht bearbeitet werden."}
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-heading">
                                <span class="icon-tile"><Icon name={icons::CLOCK} /></span>
                                <h3>{"Bürozeiten"}</h3>
                            </div>
                            { for OFFICE_HOURS.iter().map(|row| html! {
                                <div class="hours-row" key={row.days}>
                                    <span>{row.days}</span>
                                    <span class="hours">{row.hours}</span>
                                </div>
                            }) }
                            <p class="card-detail">{"Wir haben keine Betriebssperre!"}</p>
                        </div>

                        <div class="card address-card">
                            <h3>{COMPANY}</h3>
                            <div class="address-row">
                                <span class="icon-tile"><Icon name={icons::MAP_PIN} /></span>
                                <div>
                                    <p>{content::STREET}</p>
                                    <p class="muted">{format!("{}, Österreich", content::CITY)}</p>
                                    <a href={content::maps_url()} target="_blank" rel="noopener noreferrer" class="maps-link">
                                        {"Auf Google Maps anzeigen "}
                                        <Icon name={icons::EXTERNAL_LINK} />
                                    </a>
                                </div>
                            </div>
                            <div class="address-row">
                                <span class="icon-tile"><Icon name={icons::PHONE} /></span>
                                <a href={PHONE_URI}>{PHONE_DISPLAY}</a>
                            </div>
                            <div class="address-row">
                                <span class="icon-tile"><Icon name={icons::MAIL} /></span>
                                <a href={content::mailto_uri()}>{EMAIL}</a>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </Section>
    }
}
