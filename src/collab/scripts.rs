use chrono::{Datelike, NaiveDate};

/// Narration for the cover slide.
pub fn cover_script(date: NaiveDate) -> String {
    format!(
        "《十分热》，十分钟带你看完时下热点。大家好，欢迎收听《十分热》，今天是{}年{}月{}日。",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Narration for the ending slide.
pub fn ending_script() -> &'static str {
    "以上是全部内容，感谢您的收看，再见！"
}
