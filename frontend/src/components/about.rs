use yew::prelude::*;

use crate::components::section::{Section, SectionTitle};
use crate::config;
use crate::content::{ABOUT_ITEMS, MILESTONES};
use crate::reveal::{Motion, Offset, Reveal};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section id="ueber-uns" class="cream">
            <div class="container">
                <SectionTitle
                    title="Über uns"
                    subtitle="Tradition trifft Innovation — Wiener Handwerkskunst seit 1964"
                />

                <div class="card-grid three">
                    { for ABOUT_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <Reveal key={item.title} motion={Motion::card(i, config::SERVICE_STAGGER_S)}>
                            <div class="card about-card">
                                <div class="card-icon small">
                                    <img src={item.img} alt={item.title} width="60" height="60" />
                                </div>
                                <h3>{item.title}</h3>
                                <p class="card-text">{item.desc}</p>
                                <p class="card-detail">{item.detail}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal
                    class="timeline"
                    motion={Motion::card(0, 0.0).with_offset(Offset::Rise(20.0)).with_delay(0.5)}
                >
                    { for MILESTONES.iter().map(|m| html! {
                        <div key={m.year}>
                            <div class="timeline-year">{m.year}</div>
                            <div class="timeline-event">{m.event}</div>
                        </div>
                    }) }
                </Reveal>
            </div>
        </Section>
    }
}
