use yew::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::components::section::{Section, SectionTitle};
use crate::config;
use crate::content::{TeamMember, TEAM};
use crate::reveal::{Motion, Reveal};

fn portrait(person: &TeamMember) -> Html {
    match person.photo {
        Some(photo) => html! {
            <div class="team-photo">
                <img src={photo} alt={person.name} width="683" height="1024" />
            </div>
        },
        None => html! {
            <div class="team-photo placeholder">
                <Icon name={icons::USER} />
            </div>
        },
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <Section id="team" class="warm wood-pattern">
            <div class="container">
                <SectionTitle title="Unser Team" subtitle="Kompetenz und Erfahrung für Ihr Projekt" />

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(i, person)| html! {
                        <Reveal
                            key={person.name}
                            class="team-card"
                            motion={Motion::card(i, config::TEAM_STAGGER_S)}
                        >
                            { portrait(person) }
                            <div class="team-header">
                                <h3>{person.name}</h3>
                                <p>{person.role}</p>
                            </div>
                            <div class="team-body">
                                <p class="card-text">{person.intro}</p>
                                <h4>{"Qualifikationen"}</h4>
                                <ul>
                                    { for person.qualifications.iter().map(|q| html! {
                                        <li>{*q}</li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <p class="photo-credit">{"Foto: © Foto Weinwurm GMBH"}</p>
            </div>
        </Section>
    }
}
