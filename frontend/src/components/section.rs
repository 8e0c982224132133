use yew::prelude::*;

use crate::config;
use crate::reveal::{use_reveal, Motion};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub children: Children,
    pub id: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Page section that rises into view once, the first time it comes close to
/// the viewport.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config::SECTION_REVEAL_MARGIN);

    html! {
        <section id={props.id} ref={node} class={classes!("page-section", props.class.clone())}>
            <div style={Motion::section().style(revealed)}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <h2>{props.title}</h2>
            <div class="elegant-divider"></div>
            {
                if let Some(subtitle) = props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
