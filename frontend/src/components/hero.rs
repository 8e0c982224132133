use yew::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::config;
use crate::content::{PHONE_DISPLAY, PHONE_URI};
use crate::reveal::Motion;

const ENTER_LEFT: &str = "heroEnterLeft";
const ENTER_RIGHT: &str = "heroEnterRight";

fn entrance(px: f64, delay_s: f64) -> Motion {
    Motion::slide(px)
        .with_duration(config::HERO_DURATION_S)
        .with_delay(delay_s)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let copy = entrance(-config::HERO_SLIDE_PX, 0.2);
    let panel = entrance(config::HERO_SLIDE_PX, 0.4);
    let frames = format!("{}\n{}", copy.keyframes(ENTER_LEFT), panel.keyframes(ENTER_RIGHT));

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        padding-top: 5rem;
                        background: linear-gradient(135deg, #3b2a1e, #5a4330 50%, #2a1d14);
                    }
                    .hero-grain {
                        position: absolute;
                        inset: 0;
                        opacity: 0.07;
                        background: repeating-linear-gradient(
                            2deg,
                            transparent,
                            transparent 8px,
                            rgba(255,255,255,0.08) 8px,
                            rgba(255,255,255,0.08) 9px,
                            transparent 9px,
                            transparent 22px,
                            rgba(255,255,255,0.05) 22px,
                            rgba(255,255,255,0.05) 23px,
                            transparent 23px,
                            transparent 35px,
                            rgba(255,255,255,0.06) 35px,
                            rgba(255,255,255,0.06) 36px
                        );
                    }
                    .hero-grid {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(255,255,255,0.1);
                        border: 1px solid rgba(255,255,255,0.2);
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        color: rgba(255,255,255,0.9);
                        font-size: 0.875rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        color: #fff;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 span {
                        color: #d4a373;
                    }
                    .hero-lead {
                        font-size: 1.25rem;
                        color: rgba(255,255,255,0.8);
                        line-height: 1.7;
                        max-width: 32rem;
                        margin-bottom: 2rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-secondary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 2px solid rgba(255,255,255,0.3);
                        color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        text-decoration: none;
                    }
                    .hero-phone {
                        display: none;
                    }
                    .hero-panel {
                        display: none;
                        background: rgba(255,255,255,0.1);
                        border: 1px solid rgba(255,255,255,0.2);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        backdrop-filter: blur(4px);
                    }
                    .hero-facts {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        text-align: center;
                    }
                    .hero-fact-value {
                        font-family: 'Playfair Display', serif;
                        font-size: 3rem;
                        font-weight: 700;
                        color: #d4a373;
                    }
                    .hero-fact-value .icon {
                        width: 3rem;
                        height: 3rem;
                    }
                    .hero-fact-label {
                        color: rgba(255,255,255,0.7);
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }
                    .hero-quote {
                        margin-top: 2.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255,255,255,0.1);
                        color: rgba(255,255,255,0.6);
                        font-size: 0.875rem;
                        font-style: italic;
                        text-align: center;
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        color: rgba(255,255,255,0.5);
                        animation: hintBounce 2s infinite;
                    }
                    .scroll-hint .icon {
                        width: 2rem;
                        height: 2rem;
                    }
                    @keyframes hintBounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (min-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .hero-panel {
                            display: block;
                        }
                    }
                    @media (max-width: 639px) {
                        .hero-phone {
                            display: inline-flex;
                        }
                        .hero-contact {
                            display: none;
                        }
                    }
                "#}
            </style>
            <style>{frames}</style>
            <div class="hero-grain"></div>

            <div class="hero-grid">
                <div style={copy.animation(ENTER_LEFT)}>
                    <div class="hero-badge">
                        <Icon name={icons::AWARD} />
                        <span>{"Zertifizierter Meisterbetrieb seit 1964"}</span>
                    </div>

                    <h1>
                        {"Ihr Wiener"}
                        <br />
                        <span>{"Tischler"}</span>
                    </h1>

                    <p class="hero-lead">
                        {"Sonderlösungen sind unser Spezialgebiet. Seit über 60 Jahren Ihr zuverlässiger Partner für Tischlerarbeiten, Sicherheitstüren und Sanierung in Wien."}
                    </p>

                    <div class="hero-actions">
                        <a href="#leistungen" class="cta-button large">
                            {"Unsere Leistungen"}
                            <Icon name={icons::CHEVRON_DOWN} />
                        </a>
                        <a href={PHONE_URI} class="hero-secondary hero-phone">
                            <Icon name={icons::PHONE} />
                            {PHONE_DISPLAY}
                        </a>
                        <a href="#kontakt" class="hero-secondary hero-contact">
                            <Icon name={icons::PHONE} />
                            {"Kontakt"}
                        </a>
                    </div>
                </div>

                <div class="hero-panel" style={panel.animation(ENTER_RIGHT)}>
                    <div style="display: flex; justify-content: center; margin-bottom: 2rem;">
                        <img src="/images/ihr-wiener-tischler.png" alt="Ihr Wiener Tischler" width="200" height="170" />
                    </div>
                    <div class="hero-facts">
                        <div>
                            <div class="hero-fact-value">{"60+"}</div>
                            <div class="hero-fact-label">{"Jahre Erfahrung"}</div>
                        </div>
                        <div>
                            <div class="hero-fact-value">{"Wien"}</div>
                            <div class="hero-fact-label">{"1160 · Ottakring"}</div>
                        </div>
                        <div>
                            <div class="hero-fact-value"><Icon name={icons::SHIELD} /></div>
                            <div class="hero-fact-label">{"ÜA-Zertifiziert"}</div>
                        </div>
                        <div>
                            <div class="hero-fact-value"><Icon name={icons::ACCESSIBILITY} /></div>
                            <div class="hero-fact-label">{"Barrierefreiheit"}</div>
                        </div>
                    </div>
                    <p class="hero-quote">
                        {"„Zertifiziertes Unternehmen für Sicherheits- und Feuerschutztüren · Spezialwerkstätte für Sonderkonstruktionen“"}
                    </p>
                </div>
            </div>

            <div class="scroll-hint">
                <Icon name={icons::CHEVRON_DOWN} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_and_panel_enter_from_opposite_sides() {
        let copy = entrance(-config::HERO_SLIDE_PX, 0.2);
        let panel = entrance(config::HERO_SLIDE_PX, 0.4);

        assert!(copy.keyframes(ENTER_LEFT).contains("translateX(-50px)"));
        assert!(panel.keyframes(ENTER_RIGHT).contains("translateX(50px)"));
        assert_eq!(copy.animation(ENTER_LEFT), "animation: heroEnterLeft 0.80s ease-out 0.20s both;");
        assert_eq!(panel.animation(ENTER_RIGHT), "animation: heroEnterRight 0.80s ease-out 0.40s both;");
    }
}
