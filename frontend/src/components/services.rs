use yew::prelude::*;

use crate::components::section::{Section, SectionTitle};
use crate::config;
use crate::content::SERVICES;
use crate::reveal::{Motion, Reveal};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Section id="leistungen" class="warm wood-pattern">
            <div class="container">
                <SectionTitle
                    title="Unsere Stärken"
                    subtitle="Zertifiziertes Unternehmen für Sicherheits- und Feuerschutztüren. Spezialwerkstätte für Sonderkonstruktionen. Sanierungskonzepte für gewerksübergreifende Arbeiten."
                />

                <div class="card-grid four">
                    { for SERVICES.iter().enumerate().map(|(i, s)| html! {
                        <Reveal
                            key={s.title}
                            class="card service-card"
                            motion={Motion::card(i, config::SERVICE_STAGGER_S)}
                        >
                            <div class="card-icon">
                                <img src={s.img} alt={s.title} width="70" height="70" />
                            </div>
                            <h3>{s.title}</h3>
                            <p class="card-text">{s.desc}</p>
                            <p class="card-quote">{format!("„{}“", s.quote)}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </Section>
    }
}
