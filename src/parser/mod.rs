pub mod document;
pub mod equipment;
pub mod ident;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::model::{Anomaly, Extraction, RoomRecord};
use document::RoomDocument;

// ASCII only: `\d` would also match digits `u32::from_str` rejects.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Build the room record for one fetched page.
///
/// Missing structure yields default fields plus an anomaly; only values
/// that cannot be represented fail the page.
pub fn extract_room(url: &str, body: &str, cfg: &ScraperConfig) -> Result<Extraction, ScrapeError> {
    let mut record = RoomRecord::new(url);
    let mut anomalies = Vec::new();

    match ident::parse_ident(url, &cfg.page_suffix) {
        Some(id) => {
            record.building.short_name = id.short_name;
            record.room_number = id.room_number;
            record.room_type = id.room_type;
        }
        None => anomalies.push(Anomaly::MalformedIdentifier),
    }

    let doc = RoomDocument::parse(body);

    match doc.building_link_text() {
        Some(name) => record.building.name = name,
        None => anomalies.push(Anomaly::MissingBuildingName),
    }

    let Some(sections) = doc.list_sections() else {
        anomalies.push(Anomaly::MissingMainContent);
        return Ok(Extraction { record, anomalies });
    };

    if let Some(items) = sections.get(cfg.capacity_section) {
        record.capacity = parse_capacity(url, items)?;
    }

    let lines = cfg
        .equipment_sections
        .iter()
        .filter_map(|&i| sections.get(i))
        .flatten();
    record.room_equipment = equipment::merge(lines.filter_map(|l| equipment::normalize(l)));

    Ok(Extraction { record, anomalies })
}

/// First integer of each item mentioning "capacity"; a later item overrides
/// an earlier one. Zero when none does.
fn parse_capacity(url: &str, items: &[String]) -> Result<u32, ScrapeError> {
    let mut capacity = 0;
    for item in items {
        if !item.to_lowercase().contains("capacity") {
            continue;
        }
        if let Some(m) = NUMBER_RE.find(item) {
            capacity = m.as_str().parse().map_err(|e| ScrapeError::Parse {
                url: url.to_string(),
                reason: format!("capacity {:?}: {}", m.as_str(), e),
            })?;
        }
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EquipmentEntry;

    const URL: &str = "https://www.uvic.ca/search/rooms/pages/cle-a224-classroom.php";

    fn page(main: &str) -> String {
        format!(
            r#"<html><body>
            <nav><ul><li>Home</li><li>Rooms</li></ul></nav>
            <main>{}</main>
            <footer><p>The map shows the general location of the <a href="https://www.uvic.ca/maps/cle">Clearihue Building.</a></p></footer>
            </body></html>"#,
            main
        )
    }

    const FULL_MAIN: &str = r#"
        <ul><li>Capacity: 45 seats</li><li>Seating: tables and chairs</li></ul>
        <ul><li>Book through the scheduling office</li></ul>
        <ul><li>Accessible entrance</li></ul>
        <ul>
          <li>2 whiteboards</li>
          <li>Document camera</li>
          <li>A podium</li>
          <li>Natural light</li>
        </ul>
        <ul>
          <li>Video and audio laptop connectors (HDMI, VGA, 3.5mm audio)</li>
          <li>1 whiteboard</li>
          <li>Antique brass lectern desk</li>
        </ul>
        <ul><li>3 projectors in storage</li></ul>"#;

    fn entry(name: &str, quantity: u32) -> EquipmentEntry {
        EquipmentEntry {
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn full_page() {
        let ex = extract_room(URL, &page(FULL_MAIN), &ScraperConfig::default()).unwrap();
        let r = ex.record;
        assert!(ex.anomalies.is_empty());
        assert_eq!(r.url, URL);
        assert_eq!(r.room_number, "A224");
        assert_eq!(r.building.short_name, "CLE");
        assert_eq!(r.building.name, "Clearihue Building");
        assert_eq!(r.room_type, "Classroom");
        assert_eq!(r.capacity, 45);
        assert_eq!(
            r.room_equipment,
            vec![
                entry("Whiteboard", 3),
                entry("Document camera", 1),
                entry("Podium", 1),
                entry("Video and audio laptop connectors (HDMI, VGA, 3.5mm audio)", 1),
                entry("Antique brass lectern desk", 1),
            ]
        );
    }

    #[test]
    fn equipment_names_unique() {
        let ex = extract_room(URL, &page(FULL_MAIN), &ScraperConfig::default()).unwrap();
        let mut names: Vec<_> = ex.record.room_equipment.iter().map(|e| &e.name).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn capacity_absent() {
        let main = "<ul><li>Seating: fixed</li><li>Room size: 45</li></ul>";
        let ex = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.record.capacity, 0);
        assert!(ex.record.room_equipment.is_empty());
    }

    #[test]
    fn capacity_case_insensitive_last_wins() {
        let main = "<ul><li>CAPACITY (exam): 30</li><li>Seating</li><li>Teaching capacity 60 seats</li></ul>";
        let ex = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.record.capacity, 60);
    }

    #[test]
    fn capacity_only_from_capacity_section() {
        let main = "<ul><li>Seating</li></ul><ul><li>Capacity: 99</li></ul>";
        let ex = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.record.capacity, 0);
    }

    #[test]
    fn unrepresentable_capacity_fails_page() {
        let main = "<ul><li>Capacity: 99999999999</li></ul>";
        let err = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::Parse { ref url, .. } if url == URL));
    }

    #[test]
    fn non_ascii_digits_are_not_a_capacity() {
        let main = "<ul><li>Capacity: ٤٥ seats</li></ul>";
        let ex = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.record.capacity, 0);

        let main = "<ul><li>Capacity: ٤٥ (35 seated)</li></ul>";
        let ex = extract_room(URL, &page(main), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.record.capacity, 35);
    }

    #[test]
    fn configurable_section_indices() {
        let cfg = ScraperConfig {
            capacity_section: 1,
            equipment_sections: vec![0],
            ..Default::default()
        };
        let main = "<ul><li>Whiteboard</li></ul><ul><li>Capacity: 12</li></ul>";
        let ex = extract_room(URL, &page(main), &cfg).unwrap();
        assert_eq!(ex.record.capacity, 12);
        assert_eq!(ex.record.room_equipment, vec![entry("Whiteboard", 1)]);
    }

    #[test]
    fn missing_main_is_partial_record() {
        let body = r#"<html><body><p>general location of the <a href="m">Elliott Building</a></p></body></html>"#;
        let ex = extract_room(URL, body, &ScraperConfig::default()).unwrap();
        assert_eq!(ex.anomalies, vec![Anomaly::MissingMainContent]);
        assert_eq!(ex.record.building.name, "Elliott Building");
        assert_eq!(ex.record.capacity, 0);
        assert!(ex.record.room_equipment.is_empty());
    }

    #[test]
    fn missing_building_name_is_anomaly() {
        let body = "<html><body><main><ul><li>Capacity: 20</li></ul></main></body></html>";
        let ex = extract_room(URL, body, &ScraperConfig::default()).unwrap();
        assert_eq!(ex.anomalies, vec![Anomaly::MissingBuildingName]);
        assert_eq!(ex.record.building.name, "");
        assert_eq!(ex.record.building.short_name, "CLE");
        assert_eq!(ex.record.capacity, 20);
    }

    #[test]
    fn malformed_identifier_is_anomaly() {
        let url = "https://www.uvic.ca/search/rooms/pages/atrium.php";
        let ex = extract_room(url, &page(FULL_MAIN), &ScraperConfig::default()).unwrap();
        assert_eq!(ex.anomalies, vec![Anomaly::MalformedIdentifier]);
        assert_eq!(ex.record.room_number, "");
        assert_eq!(ex.record.building.short_name, "");
        assert_eq!(ex.record.room_type, "");
        assert_eq!(ex.record.capacity, 45);
    }
}
