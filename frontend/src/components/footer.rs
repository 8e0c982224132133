use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::content::{self, COMPANY, EMAIL, LEGAL_LINKS, NAV_LINKS, PHONE_DISPLAY, PHONE_URI};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Alle Rechte vorbehalten.", year, COMPANY)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"TISCHLEREI KOUT"}</div>
                    <p class="footer-tagline">{"seit 1964 · Meisterbetrieb · GesmbH"}</p>
                    <p class="footer-blurb">
                        {"Ihr Wiener Tischler seit 1964. Zertifizierter Fachbetrieb für Sicherheits- und Feuerschutztüren, Sonderkonstruktionen und barrierefreies Bauen."}
                    </p>
                    <div class="footer-badges">
                        <img src="/images/ihr-wiener-tischler-white.png" alt="Ihr Wiener Tischler" width="80" height="68" />
                        <img src="/images/ua-badge.png" alt="ÜA Zertifiziert" width="40" height="40" />
                        <img src="/images/ast-siegel.png" alt="AST Siegel" width="40" height="40" />
                        <img src="/images/rollstuhl.png" alt="Barrierefreiheit" width="40" height="40" />
                    </div>
                </div>

                <div>
                    <h4>{"Navigation"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.href}><a href={link.href}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Kontakt"}</h4>
                    <ul class="footer-contact">
                        <li>
                            <Icon name={icons::MAP_PIN} />
                            {format!("{}, {}", content::STREET, content::CITY)}
                        </li>
                        <li>
                            <Icon name={icons::PHONE} />
                            <a href={PHONE_URI}>{PHONE_DISPLAY}</a>
                        </li>
                        <li>
                            <Icon name={icons::MAIL} />
                            <a href={content::mailto_uri()}>{EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{copyright_line(year)}</p>
                <div class="legal-links">
                    { for LEGAL_LINKS.iter().map(|link| html! {
                        <a key={link.href} href={link.href}>{link.label}</a>
                    }) }
                </div>
                <a href="#" class="back-to-top" aria-label="Nach oben">
                    <Icon name={icons::ARROW_UP} />
                </a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_company() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Tischlerei KOUT GesmbH. Alle Rechte vorbehalten."
        );
    }
}
