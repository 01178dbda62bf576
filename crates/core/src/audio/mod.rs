use std::{fs::File, io::BufReader, path::Path};

use rodio::{decoder::LoopedDecoder, Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::{config::AudioConfig, DemoError, Result};

/// Decoded background track that repeats forever once played.
pub struct Music {
    source: LoopedDecoder<BufReader<File>>,
    path: String,
}

impl Music {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let file = File::open(path).map_err(|err| DemoError::resource("music", &shown, err))?;
        let source = Decoder::new_looped(BufReader::new(file))
            .map_err(|err| DemoError::resource("music", &shown, err))?;
        tracing::info!(path = %shown, "loaded music");
        Ok(Self {
            source,
            path: shown,
        })
    }
}

impl std::fmt::Debug for Music {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Music").field("path", &self.path).finish()
    }
}

/// Owns the audio output device. Playback runs on the device's own mixer
/// thread; dropping the player stops it.
pub struct MusicPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl MusicPlayer {
    /// Opens the default output device. rodio resamples to whatever the
    /// device negotiates, so `config` is only advisory.
    pub fn open(config: &AudioConfig) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().map_err(|err| DemoError::init("audio", err))?;
        tracing::info!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "opened audio output"
        );
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }

    /// Starts `music` on an endless loop. Nothing polls it afterwards.
    pub fn play_looping(&mut self, music: Music) -> Result<()> {
        let sink = Sink::try_new(&self.handle).map_err(|err| DemoError::init("audio", err))?;
        sink.append(music.source);
        tracing::info!(path = %music.path, "playing music on loop");
        self.sink = Some(sink);
        Ok(())
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        tracing::debug!("audio output released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_music_is_a_resource_failure() {
        let err = Music::load("definitely/not/here/music.ogg").unwrap_err();
        assert!(err.lingers());
        assert_eq!(err.subsystem(), "music");
        assert!(err.to_string().contains("music.ogg"));
    }

    #[test]
    fn undecodable_music_is_a_resource_failure() {
        let path = std::env::temp_dir().join(format!("starfield-bad-music-{}.ogg", std::process::id()));
        std::fs::write(&path, b"this is not vorbis").unwrap();
        let err = Music::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, DemoError::ResourceLoad { subsystem: "music", .. }));
    }
}
