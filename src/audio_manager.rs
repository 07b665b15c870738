//! Sound cues for the sign and the exit.
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

fn load_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_cue(assets_dir: &Path, name: &str) -> Option<Arc<Vec<u8>>> {
    let path = assets_dir.join("sounds").join(name);
    let bytes = load_bytes(&path);
    if bytes.is_none() {
        log::warn!("could not load {}, cue disabled", path.display());
    }
    bytes.map(Arc::new)
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sign: Option<Arc<Vec<u8>>>,
    exit: Option<Arc<Vec<u8>>>,
    volume: f32,
}

impl AudioManager {
    /// `None` when there is no output device.
    pub fn new(assets_dir: &Path, volume: f32) -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(err) => {
                log::warn!("audio disabled: {}", err);
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            sign: load_cue(assets_dir, "sign.wav"),
            exit: load_cue(assets_dir, "exit.wav"),
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn play_sign(&self) {
        self.play(self.sign.clone());
    }

    pub fn play_exit(&self) {
        self.play(self.exit.clone());
    }

    fn play(&self, data: Option<Arc<Vec<u8>>>) {
        let Some(d) = data else { return };
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.volume));
                // Keeps playing after a level switch drops the sink.
                sink.detach();
            }
        }
    }
}
