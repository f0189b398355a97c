use std::ffi::OsStr;

use crate::encode::sink::AudioInputConfig;

use super::*;

fn opts(out: &Path) -> FfmpegSinkOpts {
    FfmpegSinkOpts::new(out, &EncodeSettings::default(), Rgba8::rgb(10, 20, 30))
}

fn cfg(width: u32, height: u32, audio: Option<AudioInputConfig>) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(10, 1).unwrap(),
        frame_count: 5,
        audio,
    }
}

fn args(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(OsStr::to_string_lossy)
        .map(|s| s.into_owned())
        .collect()
}

#[test]
fn flatten_transparent_returns_background() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, Rgba8::rgb(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_opaque_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, Rgba8::rgb(10, 20, 30)).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[0; 4], Rgba8::WHITE).is_err());
}

#[test]
fn command_carries_codecs_threads_and_audio() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.mp4");
    let mut o = opts(&out);
    o.threads = 3;
    let sink = FfmpegSink::new(o);
    let audio = AudioInputConfig {
        path: dir.path().join("track.f32le"),
        sample_rate: 48_000,
        channels: 2,
    };
    let a = args(&sink.command(&cfg(640, 360, Some(audio))).unwrap());
    let joined = a.join(" ");

    assert!(joined.contains("-s 640x360"));
    assert!(joined.contains("-r 10/1"));
    assert!(joined.contains("-f f32le -ar 48000 -ac 2"));
    assert!(joined.contains("-c:a aac"));
    assert!(joined.contains("-c:v libx264"));
    assert!(joined.contains("-pix_fmt yuv420p"));
    assert!(joined.contains("-threads 3"));
    assert!(joined.contains("+faststart"));
    assert_eq!(a.first().map(String::as_str), Some("-y"));
    assert_eq!(a.last().map(String::as_str), out.to_str());
}

#[test]
fn command_without_audio_disables_audio_stream() {
    let dir = tempfile::tempdir().unwrap();
    let mut o = opts(&dir.path().join("out.mp4"));
    o.overwrite = false;
    let sink = FfmpegSink::new(o);
    let a = args(&sink.command(&cfg(640, 360, None)).unwrap());
    assert!(a.iter().any(|s| s == "-an"));
    assert!(!a.iter().any(|s| s == "-c:a"));
    assert_eq!(a.first().map(String::as_str), Some("-n"));
}

#[test]
fn begin_rejects_odd_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FfmpegSink::new(opts(&dir.path().join("out.mp4")));
    let err = sink.begin(cfg(641, 360, None)).unwrap_err();
    assert!(matches!(err, SlidecastError::Validation(_)));
}

#[test]
fn begin_refuses_existing_output_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.mp4");
    std::fs::write(&out, b"old").unwrap();
    let mut o = opts(&out);
    o.overwrite = false;
    let mut sink = FfmpegSink::new(o);
    assert!(sink.begin(cfg(16, 16, None)).is_err());
}

#[test]
fn push_before_begin_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FfmpegSink::new(opts(&dir.path().join("out.mp4")));
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}

#[test]
fn encodes_a_short_clip_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not found on PATH");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("clip.mp4");
    let mut sink = FfmpegSink::new(opts(&out));
    sink.begin(cfg(32, 16, None)).unwrap();
    let frame = FrameRgba {
        width: 32,
        height: 16,
        data: [200, 100, 50, 255].repeat(32 * 16),
    };
    for i in 0..5 {
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}
