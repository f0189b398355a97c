use super::*;
use crate::foundation::error::SlidecastError;

struct KeepShort;

impl Summarizer for KeepShort {
    fn summarize(&mut self, item: &ContentItem) -> SlidecastResult<Option<ContentItem>> {
        match item.title() {
            "boom" => Err(SlidecastError::validation("model refused")),
            t if t.chars().count() > 3 => Ok(None),
            t => Ok(Some(item.with_summary(format!("{t}!")))),
        }
    }
}

struct RecordingTts {
    spoken: Vec<(String, PathBuf)>,
}

impl SpeechSynthesizer for RecordingTts {
    fn synthesize(&mut self, text: &str, out: &Path) -> SlidecastResult<()> {
        if text.is_empty() {
            return Err(SlidecastError::audio("nothing to say"));
        }
        self.spoken.push((text.to_owned(), out.to_path_buf()));
        Ok(())
    }
}

#[test]
fn summarize_all_drops_rejected_and_failed_items() {
    let items = vec![
        ContentItem::builder("短").build(),
        ContentItem::builder("太长的标题").build(),
        ContentItem::builder("boom").build(),
        ContentItem::builder("ok").build(),
    ];
    let out = summarize_all(&mut KeepShort, &items);
    let summaries: Vec<_> = out.iter().map(|i| i.brief_summary()).collect();
    assert_eq!(summaries, ["短!", "ok!"]);
}

#[test]
fn narrate_all_attaches_indexed_audio_paths() {
    let items = vec![
        ContentItem::builder("a").brief_summary("一").build(),
        ContentItem::builder("b").build(),
        ContentItem::builder("c").brief_summary("三").build(),
    ];
    let mut tts = RecordingTts { spoken: Vec::new() };
    let out = narrate_all(&mut tts, &items, Path::new("/audio"));

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].audio_path(), Some(Path::new("/audio/000.mp3")));
    assert_eq!(out[1].audio_path(), Some(Path::new("/audio/002.mp3")));
    assert_eq!(tts.spoken[1].0, "三");
}
