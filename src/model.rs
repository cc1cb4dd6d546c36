use serde::{Deserialize, Serialize};

/// Cumulative observation counters for one transmitter. Echoed verbatim into
/// the report, so it both deserializes and serializes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub total_count: u64,
    pub good_count: u64,
}

/// One transmitter record from the listing endpoint. The API returns more
/// fields than these; the rest are ignored on deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct Transmitter {
    pub uuid: String,
    pub description: String,
    pub satellite_name: String,
    pub stat: Stat,
}
