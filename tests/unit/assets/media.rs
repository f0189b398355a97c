use std::cell::Cell;

use super::*;

struct CountingProbe {
    calls: Cell<usize>,
}

impl AudioProbe for CountingProbe {
    fn duration(&self, _path: &Path) -> SlidecastResult<Duration> {
        self.calls.set(self.calls.get() + 1);
        Ok(Duration::from_secs(3))
    }
}

#[test]
fn resolve_clip_rejects_missing_file_without_probing() {
    let probe = CountingProbe {
        calls: Cell::new(0),
    };
    let err = resolve_clip(&probe, Path::new("/no/such/clip.mp3")).unwrap_err();
    assert!(matches!(err, SlidecastError::Audio(_)));
    assert_eq!(probe.calls.get(), 0);
}

#[test]
fn resolve_clip_uses_probe_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.mp3");
    std::fs::write(&path, b"fake").unwrap();
    let probe = CountingProbe {
        calls: Cell::new(0),
    };
    let clip = resolve_clip(&probe, &path).unwrap();
    assert_eq!(clip.duration, Duration::from_secs(3));
    assert_eq!(clip.path, path);
}

#[test]
fn pcm_duration_follows_frame_count() {
    let pcm = AudioPcm {
        sample_rate: 4,
        channels: 2,
        interleaved_f32: vec![0.0; 16],
    };
    assert_eq!(pcm.frames(), 8);
    assert_eq!(pcm.duration(), Duration::from_secs(2));
}

#[test]
fn ffmpeg_probe_and_decode_synthetic_tone() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg/ffprobe not on PATH");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("tone.wav");
    let status = Command::new("ffmpeg")
        .args([
            "-v",
            "error",
            "-y",
            "-f",
            "lavfi",
            "-i",
            "sine=frequency=220:sample_rate=48000",
            "-t",
            "1",
            "-c:a",
            "pcm_s16le",
        ])
        .arg(&wav)
        .status()
        .unwrap();
    assert!(status.success());

    let d = FfmpegAudio.duration(&wav).unwrap();
    assert!((d.as_secs_f64() - 1.0).abs() < 0.05);

    let pcm = FfmpegAudio.decode_stereo(&wav, MIX_SAMPLE_RATE).unwrap();
    assert_eq!(pcm.channels, 2);
    assert!((pcm.duration().as_secs_f64() - 1.0).abs() < 0.05);
}
