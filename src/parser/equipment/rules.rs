use std::sync::LazyLock;

use regex::Regex;

/// One pattern in the equipment table: the first rule whose pattern matches
/// the lower-cased phrase supplies the canonical label.
pub struct EquipmentRule {
    pub pattern: Regex,
    pub label: &'static str,
}

impl EquipmentRule {
    fn new(pattern: &str, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            label,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered most specific to most general. Several rules can match the same
/// phrase, so moving an entry changes the output.
pub static RULES: LazyLock<Vec<EquipmentRule>> = LazyLock::new(|| {
    [
        (
            r"enhanced lecture capture.*blackboard recording",
            "Enhanced lecture capture capability, which includes blackboard recording",
        ),
        (
            r"video conferencing and lecture capture",
            "Video conferencing and lecture capture capabilities",
        ),
        (
            r"video\s+and\s+audio\s+laptop\s+connector.*hdmi x 2, vga, 3\.5mm audio",
            "Video and audio laptop connectors (HDMI x 2, VGA, 3.5mm audio)",
        ),
        (
            r"video\s+and\s+audio\s+laptop\s+connector.*hdmi, vga, 3\.5mm audio",
            "Video and audio laptop connectors (HDMI, VGA, 3.5mm audio)",
        ),
        (
            r"video\s+and\s+audio\s+laptop\s+connector.*hdmi, vga, audio aux",
            "Video and audio laptop connectors (HDMI, VGA, audio aux)",
        ),
        (
            r"video\s+and\s+audio\s+laptop\s+connector.*hdmi and usb",
            "Video and audio laptop connectors (HDMI and USB)",
        ),
        (
            r"video\s+and\s+audio\s+laptop\s+connector",
            "Video and audio laptop connectors",
        ),
        (
            r"document\s+camera.*electric height-adjustable desks",
            "Document camera on electric height-adjustable desk",
        ),
        (
            r"built-in\s+classroom\s+computer.*webcam",
            "Built-in classroom computer with webcam",
        ),
        (r"tv\s+display.*learning pod", "TV displays at each learning pod"),
        (
            r"tv\s+display.*front row",
            "TV displays for people sitting in the front row",
        ),
        (r"wheeled\s+table.*chair", "Wheeled table with chair"),
        (r"table.*chairs", "Table with chairs"),
        (r"table.*chair", "Table with chair"),
        (r"projector.*present.*against.*wall", "Projector present against wall"),
        (r"motorized.*presentation\s+screen", "Motorized presentation screen"),
        (r"presentation\s+screen", "Pull-down presentation screen"),
        (r"touch\s+panel\s+controls.*av", "Touch panel controls for AV system"),
        (r"button\s+controls.*av", "Button controls for AV system"),
        (
            r"ceiling-\s+and\s+wall-mounted\s+cameras",
            "Ceiling and wall-mounted cameras",
        ),
        (r"monitors\s+on\s+arms", "Monitors on arms"),
        (r"ceiling\s+mic\s+array", "Ceiling mic array"),
        (r"whiteboard.*walls", "Whiteboard walls"),
        (r"green.*(?:chalkboard|blackboard)", "Green chalkboard"),
        (r"black.*(?:chalkboard|blackboard)", "Black chalkboard"),
        (r"(?:chalkboard|blackboard)", "Chalkboard"),
        (r"whiteboard", "Whiteboard"),
        (r"digital\s+video\s+projector", "Digital video projector"),
        (r"document\s+camera", "Document camera"),
        (r"built-in\s+classroom\s+computer", "Built-in classroom computer"),
        (r"lecture\s+capture\s+capability", "Lecture capture capability"),
        (r"tv\s+display", "TV display"),
        (r"sink.*water.*gas", "Sink with water and gas taps"),
        (r"room\s+speakers", "Room speakers"),
        (r"wireless\s+mic", "Wireless mic"),
        (r"dvd\s+player", "DVD player"),
        (r"podium", "Podium"),
        (r"piano", "Piano"),
    ]
    .into_iter()
    .map(|(pattern, label)| EquipmentRule::new(pattern, label))
    .collect()
});

/// Words that mark an unmatched phrase as equipment worth keeping verbatim.
pub const EQUIPMENT_KEYWORDS: &[&str] = &[
    "board", "camera", "computer", "projector", "screen", "mic", "audio", "table", "chair",
    "podium", "speaker", "display", "desk",
];

/// Label of the first rule matching `text`, scanning in table order.
pub fn first_match(text: &str) -> Option<&'static str> {
    RULES.iter().find(|r| r.matches(text)).map(|r| r.label)
}
