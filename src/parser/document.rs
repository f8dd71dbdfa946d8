use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static MAIN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static LIST: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul").unwrap());
static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());
static BUILDING_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)general location of the <a[^>]*>([^<]+)</a>").unwrap()
});

/// The parts of a room page the extractor depends on. Template changes
/// should only need edits here.
pub struct RoomDocument {
    html: Html,
}

impl RoomDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Text of the link in the "general location of the <a>…</a>" sentence,
    /// trimmed, with one trailing period removed.
    pub fn building_link_text(&self) -> Option<String> {
        let serialized = self.html.html();
        let caps = BUILDING_LINK_RE.captures(&serialized)?;
        let text = caps[1].trim();
        Some(text.strip_suffix('.').unwrap_or(text).to_string())
    }

    /// Every `<ul>` inside the first `<main>`, in document order, as the
    /// trimmed text of each of its `<li>` descendants. `None` when the page
    /// has no `<main>`.
    pub fn list_sections(&self) -> Option<Vec<Vec<String>>> {
        let main = self.html.select(&MAIN).next()?;
        Some(main.select(&LIST).map(list_items).collect())
    }
}

fn list_items(list: ElementRef<'_>) -> Vec<String> {
    list.select(&ITEM)
        .map(|li| li.text().collect::<String>().trim().to_string())
        .collect()
}
