use super::domain::Heuristic;
use once_cell::sync::Lazy;
use regex::Regex;

// Each window is bounded by the character class after the anchor token
// ([^$], [^<], [^}]) so a match cannot bleed into an unrelated page section.

// An active listing shows pricing like "$2,495+" next to the two-bed header;
// an idle one shows "Coming soon" instead.
static PRICED_TWO_BED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)2\s*Bed[^$]*?(\$[\d,]+\+?)").expect("pattern compiles"));

// Embedded JSON carries one object per unit type; availability is the
// AvailableUnits list being non-empty. Key casing is exact in the source.
static STRUCTURED_TWO_BED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""UnitTypeDescription"\s*:\s*"2\s*Bed[^"]*"[^}]*"AvailableUnits"\s*:\s*\[([^\]]*)\]"#)
        .expect("pattern compiles")
});

static LISTING_TEXT_TWO_BED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)2\s*(?:Bed|BR|Bedroom)[^<]*?(?:Available|Move-in|Ready)")
        .expect("pattern compiles")
});

static COMING_SOON_TWO_BED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)2\s*Bed[^<]*Coming\s*soon").expect("pattern compiles"));

impl Heuristic {
    /// Scans the page for this check's signal, returning the evidence note on
    /// a match. Pure text matching; cannot fail.
    pub(crate) fn evaluate(self, page: &str) -> Option<String> {
        match self {
            Self::PricedListing => priced_listing(page),
            Self::StructuredUnits => structured_units(page),
            Self::ListingText => listing_text(page),
            Self::ComingSoon => coming_soon(page),
        }
    }
}

fn priced_listing(page: &str) -> Option<String> {
    PRICED_TWO_BED
        .captures(page)
        .map(|caps| format!("Price found: {}", &caps[1]))
}

fn structured_units(page: &str) -> Option<String> {
    STRUCTURED_TWO_BED.captures(page).and_then(|caps| {
        if caps[1].trim().is_empty() {
            None
        } else {
            Some("Units found in JSON data".to_string())
        }
    })
}

fn listing_text(page: &str) -> Option<String> {
    LISTING_TEXT_TWO_BED
        .is_match(page)
        .then(|| "Available units text found".to_string())
}

fn coming_soon(page: &str) -> Option<String> {
    COMING_SOON_TWO_BED
        .is_match(page)
        .then(|| "Shows 'Coming soon'".to_string())
}
