use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Navbar switches to its compact style once the page is scrolled past this many pixels.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Root margin for whole sections, so they reveal slightly before being fully in view.
pub const SECTION_REVEAL_MARGIN: &str = "-80px";

/// Cards in repeated lists trigger on first contact.
pub const CARD_REVEAL_MARGIN: &str = "0px";

pub const SECTION_RISE_PX: f64 = 40.0;
pub const SECTION_DURATION_S: f64 = 0.7;

pub const CARD_RISE_PX: f64 = 30.0;
pub const CARD_DURATION_S: f64 = 0.5;

pub const SERVICE_STAGGER_S: f64 = 0.15;
pub const TEAM_STAGGER_S: f64 = 0.2;

pub const HERO_SLIDE_PX: f64 = 50.0;
pub const HERO_DURATION_S: f64 = 0.8;
