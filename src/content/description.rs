use serde::{Deserialize, Serialize};

use crate::content::item::ContentItem;

/// Fixed lines at the top of a video description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionHeader {
    /// Show name, followed by ` - {date}期` on the first line.
    pub show_title: String,
    /// Lines printed after the title line.
    pub lines: Vec<String>,
}

impl Default for DescriptionHeader {
    fn default() -> Self {
        Self {
            show_title: "《十分热》每日新闻".to_owned(),
            lines: vec![
                "爬虫 + ChatGPT + TTS 全自动生成的新闻视频，十分钟带你看完24h时下热点。"
                    .to_owned(),
                "https://github.com/RogerRordo/TenMinsHot".to_owned(),
            ],
        }
    }
}

/// Plain-text description: title line, header lines, a blank line, then one line per item.
///
/// Items are numbered from `00`.
pub fn render_description(
    items: &[ContentItem],
    date: &str,
    header: &DescriptionHeader,
) -> String {
    let mut lines = Vec::with_capacity(header.lines.len() + items.len() + 2);
    lines.push(format!("{} - {date}期", header.show_title));
    lines.extend(header.lines.iter().cloned());
    lines.push(String::new());
    lines.extend(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{i:02}. 《{}》", item.title())),
    );
    lines.join("\n")
}
