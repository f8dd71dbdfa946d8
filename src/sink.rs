use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::model::RoomRecord;

/// Write `rooms` as a pretty-printed UTF-8 JSON array, creating the parent
/// directory if needed. Non-ASCII text is written as-is.
pub fn save_json(path: impl AsRef<Path>, rooms: &[RoomRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(rooms)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} rooms to {}", rooms.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Building, EquipmentEntry};

    fn room() -> RoomRecord {
        RoomRecord {
            room_number: "A224".into(),
            building: Building {
                name: "Clearihue Building – Québec wing".into(),
                short_name: "CLE".into(),
            },
            capacity: 45,
            room_type: "Classroom".into(),
            room_equipment: vec![EquipmentEntry {
                name: "Whiteboard".into(),
                quantity: 3,
            }],
            url: "https://www.uvic.ca/search/rooms/pages/cle-a224-classroom.php".into(),
        }
    }

    #[test]
    fn creates_directory_and_writes_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/rooms.json");

        save_json(&path, &[room()]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Québec"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  {"));

        let back: Vec<RoomRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec![room()]);
    }

    #[test]
    fn empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        save_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
