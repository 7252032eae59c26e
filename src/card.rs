use serde::{Deserialize, Serialize};

/// Placeholder printed for card fields the catalog does not carry.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Envelope returned by the cards endpoint.
///
/// A missing `data` field deserializes as an empty list; the paging fields
/// are whatever the API chooses to send back alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSearchResponse {
    #[serde(default)]
    pub data: Vec<PokemonTcgCard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

impl CardSearchResponse {
    /// Parse a raw reply body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn card_count(&self) -> usize {
        self.data.len()
    }
}

/// One card record from the catalog.
///
/// `name`, `number` and `set` are always present on a well-formed record;
/// `rarity` and `artist` are genuinely optional in the catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokemonTcgCard {
    pub name: String,
    pub number: String,
    pub set: CardSetInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl PokemonTcgCard {
    /// Rarity for display, `N/A` when the catalog has none.
    pub fn rarity_label(&self) -> &str {
        self.rarity.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// Artist for display, `N/A` when the catalog has none.
    pub fn artist_label(&self) -> &str {
        self.artist.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }
}

/// Originating release of a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSetInfo {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}
