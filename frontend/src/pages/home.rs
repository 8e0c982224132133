use log::debug;
use yew::prelude::*;
use yew_hooks::{use_mount, use_unmount};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::services::Services;
use crate::components::team::Team;

#[function_component(Home)]
pub fn home() -> Html {
    use_mount(|| debug!("home view mounted"));
    use_unmount(|| debug!("home view unmounted"));

    html! {
        <>
            <Nav />
            <main>
                <Hero />
                <Services />
                <About />
                <Team />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
