use yew::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::config;
use crate::content::NAV_LINKS;
use crate::scroll::use_scrolled_past;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a link always closes the menu.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let is_scrolled = use_scrolled_past(config::SCROLL_THRESHOLD_PX);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    // No prevent_default here, the anchor still has to scroll to its target
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: #fff;
                        padding: 1.25rem 0;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: all 0.5s;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo img {
                        height: 2.5rem;
                        width: auto;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #6b5d4f;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #b8864b;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        color: #3b2a1e;
                        cursor: pointer;
                    }
                    .burger-menu .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-menu {
                        display: none;
                        background: #fff;
                        margin: 0.5rem 1rem 0;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        animation: menuDrop 0.3s ease-out;
                    }
                    .mobile-menu .nav-link {
                        display: block;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid rgba(230, 220, 205, 0.5);
                    }
                    .mobile-menu .cta-button {
                        display: block;
                        margin-top: 1rem;
                        text-align: center;
                    }
                    @keyframes menuDrop {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 767px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu {
                            display: block;
                        }
                        .nav-logo img {
                            height: 1.75rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src="/images/logo.png" alt="Tischlerei Kout" width="200" height="44" />
                </a>

                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.href} href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <a href="#kontakt" class="cta-button">{"Anfrage senden"}</a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menü">
                    <Icon name={if menu.is_open() { icons::X } else { icons::MENU }} />
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.href} href={link.href} class="nav-link" onclick={close_menu.clone()}>
                                    {link.label}
                                </a>
                            }) }
                            <a href="#kontakt" class="cta-button" onclick={close_menu.clone()}>
                                {"Anfrage senden"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn each_press_flips_once() {
        let mut menu = MenuState::default();
        let mut expected = false;
        for _ in 0..5 {
            menu = menu.toggled();
            expected = !expected;
            assert_eq!(menu.is_open(), expected);
        }
    }

    #[test]
    fn link_selection_closes_open_menu() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert!(!open.closed().is_open());
        assert!(!MenuState::default().closed().is_open());
    }
}
