use serde::Serialize;

/// Raw markup of a fetched listing page. Captured once per run and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageContent {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PageContent {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The independent checks run against a page, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    PricedListing,
    StructuredUnits,
    ListingText,
    ComingSoon,
}

impl Heuristic {
    /// Execution order. The coming-soon check must run after every positive
    /// check so its gate sees the final availability state.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PricedListing,
            Self::StructuredUnits,
            Self::ListingText,
            Self::ComingSoon,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PricedListing => "Priced listing",
            Self::StructuredUnits => "Structured unit data",
            Self::ListingText => "Listing text",
            Self::ComingSoon => "Coming soon",
        }
    }

    /// Whether a match means a unit can actually be leased. The coming-soon
    /// check records a negative signal and never flips availability.
    pub const fn is_positive(self) -> bool {
        !matches!(self, Self::ComingSoon)
    }
}

/// Verdict for one scan of a listing page.
///
/// `available` is monotonic: it starts false and only a positive heuristic
/// can raise it. `evidence` keeps the notes in the order the checks ran,
/// which matters for log review only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub available: bool,
    pub evidence: Vec<String>,
}

impl AvailabilityReport {
    pub fn evidence_summary(&self) -> String {
        self.evidence.join(", ")
    }
}
