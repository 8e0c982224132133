//! Copy and contact details shown on the page.

pub const COMPANY: &str = "Tischlerei KOUT GesmbH";
pub const STREET: &str = "Neumayrgasse 16";
pub const CITY: &str = "1160 Wien";
pub const PHONE_DISPLAY: &str = "+43 1 492 13 09";
pub const PHONE_URI: &str = "tel:+4314921309";
pub const EMAIL: &str = "office@tischlerei-kout.at";

pub fn mailto_uri() -> String {
    format!("mailto:{}", EMAIL)
}

/// Google Maps search link for the workshop address.
pub fn maps_url() -> String {
    let query = format!("{}, {}", STREET, CITY);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&query)
    )
}

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#leistungen", label: "Leistungen" },
    NavLink { href: "#ueber-uns", label: "Über uns" },
    NavLink { href: "#team", label: "Team" },
    NavLink { href: "#kontakt", label: "Kontakt" },
];

pub const LEGAL_LINKS: [NavLink; 3] = [
    NavLink { href: "/impressum", label: "Impressum" },
    NavLink { href: "/datenschutz", label: "Datenschutz" },
    NavLink { href: "/agb", label: "AGB" },
];

pub struct Service {
    pub img: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub quote: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        img: "/images/ic-tischlerarbeiten.png",
        title: "Tischlerarbeiten",
        desc: "Maßanfertigungen und individuelle Lösungen für jeden Anspruch. Von der Planung bis zur Montage - alles aus Meisterhand.",
        quote: "Sonderlösungen sind unser Spezialgebiet",
    },
    Service {
        img: "/images/ic-sicherheit.png",
        title: "Sicherheits- & Feuerschutztüren",
        desc: "Als ÜA-zertifiziertes Unternehmen liefern und montieren wir Sicherheits-, Feuerschutz- und Fluchttüren komplett aus einer Hand.",
        quote: "Alles aus einer Hand",
    },
    Service {
        img: "/images/ic-wartung.png",
        title: "Sanierung – Wartung – Service",
        desc: "Sanierungskonzepte mit gewerksübergreifender Ausführung. Wir koordinieren alle Gewerke und führen zuverlässig aus.",
        quote: "Gewerksübergreifende Ausführung",
    },
    Service {
        img: "/images/ic-barrierefreiheit.png",
        title: "Barrierefreiheit",
        desc: "Barrieren vermeiden und entfernen! Unser Geschäftsführer ist zertifizierter Experte für barrierefreies Bauen nach Austrian Standards.",
        quote: "Barrieren vermeiden und entfernen",
    },
];

pub struct AboutItem {
    pub img: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub detail: &'static str,
}

pub const ABOUT_ITEMS: [AboutItem; 3] = [
    AboutItem {
        img: "/images/ic-history.png",
        title: "Firmengeschichte",
        desc: "1964 gegründet von Adolf Kout als einer der jüngsten Tischlermeister Wiens. Heute unter der Leitung von Ing. Mst. Andreas Distel — Ihr Tischler mit über 60 Jahren Erfahrung.",
        detail: "Von der Möbeltischlerei zur Spezialwerkstätte für Sicherheits- und Feuerschutztüren. 2004 ÜA-zertifiziert.",
    },
    AboutItem {
        img: "/images/ic-lehrling.png",
        title: "Lehrlingsausbildung",
        desc: "Wir bilden in unserem Betrieb Lehrlinge des Berufsbildes „Tischlerei“ aus. Die Lehrlingsausbildung besitzt in unserem Unternehmen eine lange Tradition.",
        detail: "In die Ausbildung neuer Generationen zu investieren ist unumgänglich!",
    },
    AboutItem {
        img: "/images/ic-time.png",
        title: "Geschäftszeiten",
        desc: "Montag – Donnerstag: 7:00 – 12:00 und 14:00 – 16:30 Uhr. Freitag: 7:00 – 12:00 Uhr.",
        detail: "Wir haben keine Betriebssperre!",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
}

pub const MILESTONES: [Milestone; 4] = [
    Milestone { year: "1964", event: "Gründung durch Adolf Kout" },
    Milestone { year: "2003", event: "Übernahme als GesmbH" },
    Milestone { year: "2004", event: "ÜA-Zertifizierung" },
    Milestone { year: "Heute", event: "60+ Jahre Erfahrung" },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: Option<&'static str>,
    pub qualifications: &'static [&'static str],
    pub intro: &'static str,
}

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Ing. Mst. Andreas Distel",
        role: "Geschäftsführung",
        photo: Some("/images/team-distel.jpg"),
        qualifications: &[
            "Fachschule für Innenausbau – HTL Mödling",
            "Holztechnik Praktikerlehrgang – HTL Mödling",
            "Zertifizierter Experte für Barrierefreiheit",
            "Experte für Brandschutz- und Rauchschutztüren",
            "Aktiv in der Normung & Innungsarbeit",
            "IM-Stv. der Landesinnung Wien seit 2017",
        ],
        intro: "Seit 1997 im Unternehmen, seit 2003 geschäftsführender Gesellschafter. Handels- und gewerberechtlicher Geschäftsführer.",
    },
    TeamMember {
        name: "Mag. Sonja Schindl",
        role: "Assistenz der Geschäftsführung",
        photo: None,
        qualifications: &[
            "Handelsakademie – Matura mit gutem Erfolg",
            "WU Wien – Internationale Betriebswirtschaft",
            "Ausbilderkurs inkl. Fachgespräch – WIFI Wien",
            "Ersthelferin gem. ASchG und AStV",
        ],
        intro: "Seit 2001 im Unternehmen. Verwaltung und Organisation.",
    },
];

pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OFFICE_HOURS: [OfficeHours; 2] = [
    OfficeHours { days: "Montag – Donnerstag", hours: "7:00–12:00 & 14:00–16:30" },
    OfficeHours { days: "Freitag", hours: "7:00–12:00" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_encodes_address() {
        assert_eq!(
            maps_url(),
            "https://www.google.com/maps/search/?api=1&query=Neumayrgasse%2016%2C%201160%20Wien"
        );
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
        assert!(LEGAL_LINKS.iter().all(|link| link.href.starts_with('/')));
    }

    #[test]
    fn mailto_points_at_office() {
        assert_eq!(mailto_uri(), "mailto:office@tischlerei-kout.at");
    }
}
