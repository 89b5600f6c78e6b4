//! Static dashboard copy: hero, services, calculator teasers, proof cases.

/// A titled paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

/// A measured result from a past campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub value: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

pub const BRAND: &str = "ImmoMatrix";

pub const TAGLINE: &str = "Swiss Real Estate Technology";

pub const HERO_TITLE: &str = "Leerstand minimieren. Time-to-Rent halbieren.";

pub const HERO_BODY: &str = "Ihre Projektwebseite live in 72 Stunden. Ihre Kampagnen \
datengetrieben ab Tag 1. Das Betriebssystem für Vermarkter, die Ergebnisse schulden.";

pub const SERVICES: [Section; 4] = [
    Section {
        title: "Projektwebseite",
        body: "SEO-ready, mobile-first und conversion-optimiert. Technisch exzellent und sofort einsatzbereit.",
    },
    Section {
        title: "Performance Ads",
        body: "Google Search für akuten Bedarf, Social Media für Branding. Kein Streuverlust, nur qualifizierte Leads.",
    },
    Section {
        title: "Lead Management",
        body: "Automatische Qualifizierung und Priorisierung. Ihr Vertrieb spricht nur mit den besten Kontakten.",
    },
    Section {
        title: "Intelligence",
        body: "Wöchentliche Reports zu Time-to-Rent und Cost-per-Lease geben Ihnen die Kontrolle zurück.",
    },
];

pub const TOOLS: [Section; 2] = [
    Section {
        title: "Cost-of-Vacancy Rechner",
        body: "Leerstand ist kein Zustand – es ist eine präzise Kostenposition. Berechnen Sie Mietausfall und Opportunitätskosten.",
    },
    Section {
        title: "ROI Rechner",
        body: "Lohnt sich das Budget? Wir modellieren Leadkosten, Konversionspfade und Amortisation vorab.",
    },
];

pub const CASES: [Case; 3] = [
    Case {
        value: "22",
        unit: "Einheiten",
        description: "in 6 Wochen vollvermietet trotz Preissensitivität.",
    },
    Case {
        value: "+40%",
        unit: "Besichtigungen",
        description: "in 30 Tagen durch psychologisches Messaging.",
    },
    Case {
        value: "-50%",
        unit: "Cost-per-Lead",
        description: "durch progressive Funnel-Optimierung.",
    },
];

pub const CONTACT: Section = Section {
    title: "Projekt besprechen",
    body: "Ihr Projekt evaluieren lassen: Wir melden uns innerhalb von 24 Stunden.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_filled() {
        assert!(!HERO_TITLE.is_empty());
        assert!(SERVICES.iter().all(|s| !s.title.is_empty() && !s.body.is_empty()));
        assert!(CASES.iter().all(|c| !c.value.is_empty()));
    }

    #[test]
    fn tools_name_both_calculators() {
        assert!(TOOLS[0].title.contains("Vacancy"));
        assert!(TOOLS[1].title.contains("ROI"));
    }
}
