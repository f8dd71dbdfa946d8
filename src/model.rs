use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    pub quantity: u32,
}

/// One room page, flattened into the dataset row written by the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_number: String,
    pub building: Building,
    /// Zero when the page lists no capacity.
    pub capacity: u32,
    pub room_type: String,
    pub room_equipment: Vec<EquipmentEntry>,
    pub url: String,
}

impl RoomRecord {
    /// Empty record for `url`; every extracted field starts at its default.
    pub fn new(url: &str) -> Self {
        Self {
            room_number: String::new(),
            building: Building::default(),
            capacity: 0,
            room_type: String::new(),
            room_equipment: Vec::new(),
            url: url.to_string(),
        }
    }
}

/// Structural elements a page was expected to have but did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    MalformedIdentifier,
    MissingBuildingName,
    MissingMainContent,
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Anomaly::MalformedIdentifier => "identifier not parseable from URL",
            Anomaly::MissingBuildingName => "building name not found",
            Anomaly::MissingMainContent => "no <main> content region",
        };
        f.write_str(s)
    }
}

/// A record plus the soft anomalies hit while building it.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: RoomRecord,
    pub anomalies: Vec<Anomaly>,
}
