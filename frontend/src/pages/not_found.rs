use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Seite nicht gefunden"}</h1>
            <p>{"Die angeforderte Seite existiert nicht."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"Zur Startseite"}
            </Link<Route>>
        </div>
    }
}
