use std::time::Duration;

use crate::assets::media::AudioPcm;
use crate::encode::sink::InMemorySink;
use crate::timeline::builder::TimelineBuilder;

use super::*;

struct SilentDecoder;

impl PcmDecoder for SilentDecoder {
    fn decode_stereo(&self, _path: &Path, sample_rate: u32) -> SlidecastResult<AudioPcm> {
        Ok(AudioPcm {
            sample_rate,
            channels: MIX_CHANNELS,
            interleaved_f32: vec![0.0; 960],
        })
    }
}

fn canvas() -> Canvas {
    Canvas {
        width: 8,
        height: 4,
    }
}

fn solid_slide(dir: &Path, ordinal: usize, color: [u8; 4]) -> PathBuf {
    let slide = Slide {
        width: 8,
        height: 4,
        rgba8_premul: color.repeat(32),
    };
    let path = dir.join(format!("slide_{ordinal:03}.png"));
    slide.save_png(&path).unwrap();
    path
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn every_frame_shows_the_slide_scheduled_at_its_time() {
    let dir = tempfile::tempdir().unwrap();
    let colors = [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]];
    let slides: Vec<PathBuf> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| solid_slide(dir.path(), i, *c))
        .collect();
    let durations = [ms(200), ms(350), ms(100)];
    let clips: Vec<AudioClip> = durations
        .iter()
        .enumerate()
        .map(|(i, d)| AudioClip {
            path: PathBuf::from(format!("clip{i}.mp3")),
            duration: *d,
        })
        .collect();
    let timeline = TimelineBuilder::new(ms(100))
        .build(durations[0], &durations[1..2], durations[2])
        .unwrap();
    assert_eq!(timeline.total_duration(), ms(1250));

    let composer = VideoComposer::new(canvas(), Fps::new(10, 1).unwrap(), Rgba8::WHITE).unwrap();
    let mut sink = InMemorySink::new();
    let track_path = dir.path().join("track.f32le");
    let stats = composer
        .compose(
            CompositionInputs {
                timeline: &timeline,
                slides: &slides,
                clips: &clips,
                track_path: &track_path,
            },
            &SilentDecoder,
            &mut sink,
        )
        .unwrap();

    // ceil(1.25 s * 10 fps)
    assert_eq!(stats.frames_total, 13);
    assert_eq!(stats.frames_with_slide, 13);
    assert_eq!(stats.slides_loaded, 3);
    assert_eq!(sink.frame_count(), 13);
    assert!(sink.is_ended());

    let cfg = sink.config().unwrap();
    let audio = cfg.audio.as_ref().unwrap();
    assert_eq!(audio.path, track_path);
    assert_eq!(audio.sample_rate, MIX_SAMPLE_RATE);
    assert!(track_path.is_file());

    // Cover [0, 400ms), item [400, 950ms), ending [950, 1250ms).
    let expect = |f: u64| -> [u8; 4] {
        match f {
            0..=3 => colors[0],
            4..=9 => colors[1],
            _ => colors[2],
        }
    };
    for f in 0..13 {
        let frame = sink.frame(FrameIndex(f)).unwrap();
        assert_eq!(frame.data[..4], expect(f), "frame {f}");
    }
    assert_eq!(sink.runs().len(), 3);
}

#[test]
fn slide_count_must_match_timeline() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = TimelineBuilder::new(ms(100))
        .build(ms(100), &[], ms(100))
        .unwrap();
    let slides = vec![solid_slide(dir.path(), 0, [0, 0, 0, 255])];
    let composer = VideoComposer::new(canvas(), Fps::default(), Rgba8::WHITE).unwrap();
    let err = composer
        .compose(
            CompositionInputs {
                timeline: &timeline,
                slides: &slides,
                clips: &[],
                track_path: &dir.path().join("t.f32le"),
            },
            &SilentDecoder,
            &mut InMemorySink::new(),
        )
        .unwrap_err();
    assert!(matches!(err, SlidecastError::Validation(_)));
}

#[test]
fn wrongly_sized_slide_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = TimelineBuilder::new(ms(100))
        .build(ms(100), &[], ms(100))
        .unwrap();
    let slides = vec![
        solid_slide(dir.path(), 0, [0, 0, 0, 255]),
        solid_slide(dir.path(), 1, [0, 0, 0, 255]),
    ];
    let clips: Vec<AudioClip> = (0..2)
        .map(|i| AudioClip {
            path: PathBuf::from(format!("c{i}")),
            duration: ms(100),
        })
        .collect();
    let bigger = Canvas {
        width: 16,
        height: 4,
    };
    let composer = VideoComposer::new(bigger, Fps::default(), Rgba8::WHITE).unwrap();
    let result = composer.compose(
        CompositionInputs {
            timeline: &timeline,
            slides: &slides,
            clips: &clips,
            track_path: &dir.path().join("t.f32le"),
        },
        &SilentDecoder,
        &mut InMemorySink::new(),
    );
    assert!(result.is_err());
}

#[test]
fn empty_timeline_emits_no_frames() {
    let dir = tempfile::tempdir().unwrap();
    let composer = VideoComposer::new(canvas(), Fps::default(), Rgba8::BLACK).unwrap();
    let mut sink = InMemorySink::new();
    let stats = composer
        .compose(
            CompositionInputs {
                timeline: &Timeline::default(),
                slides: &[],
                clips: &[],
                track_path: &dir.path().join("t.f32le"),
            },
            &SilentDecoder,
            &mut sink,
        )
        .unwrap();
    assert_eq!(stats, ComposeStats::default());
    assert!(sink.is_ended());
}
