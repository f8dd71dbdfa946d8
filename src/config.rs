const INDEX_URL: &str = "https://www.uvic.ca/search/rooms/";
const OUTPUT_PATH: &str = "data/uvic_rooms.json";
const CONCURRENCY: usize = 10;
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Construction-time settings for one scrape run.
///
/// Section indices are positions among the `<ul>` lists inside `<main>`,
/// counted in document order from zero.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub index_url: String,
    pub output_path: String,
    pub concurrency: usize,
    pub user_agent: String,
    /// Anchors must contain this path fragment to count as room pages.
    pub link_marker: String,
    /// Suffix shared by room page URLs; also stripped before identifier parsing.
    pub page_suffix: String,
    pub capacity_section: usize,
    pub equipment_sections: Vec<usize>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            index_url: INDEX_URL.to_string(),
            output_path: OUTPUT_PATH.to_string(),
            concurrency: CONCURRENCY,
            user_agent: USER_AGENT.to_string(),
            link_marker: "pages/".to_string(),
            page_suffix: ".php".to_string(),
            capacity_section: 0,
            equipment_sections: vec![3, 4],
        }
    }
}

impl ScraperConfig {
    /// Worker pool size, never below one.
    pub fn worker_count(&self) -> usize {
        self.concurrency.max(1)
    }
}
