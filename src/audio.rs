use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

/// Words per minute most engines use at rate 1.0
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Fire-and-forget speech output.
pub trait Speak {
    fn speak(&self, text: &str);
}

/// Used when speech is disabled or the worker could not start.
#[derive(Debug, Default)]
pub struct Silent;

impl Speak for Silent {
    fn speak(&self, text: &str) {
        tracing::debug!(text, "speech disabled");
    }
}

#[derive(Debug)]
pub enum SpeechRequest {
    Say(String),
    Shutdown,
}

/// Handle to the speech worker thread. Every request cancels whatever is
/// still being spoken before starting the new utterance.
#[derive(Debug)]
pub struct Speaker {
    tx: Sender<SpeechRequest>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Speaker {
    pub fn spawn(config: SpeechConfig) -> std::io::Result<Self> {
        let (tx, rx) = unbounded();
        let worker = thread::Builder::new()
            .name("picture-vocab::speech".to_string())
            .spawn(move || run_speech_worker(config, rx))?;

        Ok(Self {
            tx,
            worker: Some(worker),
        })
    }
}

impl Speak for Speaker {
    fn speak(&self, text: &str) {
        if self.tx.send(SpeechRequest::Say(text.to_string())).is_err() {
            tracing::warn!("speech worker is gone");
        }
    }
}

impl Drop for Speaker {
    fn drop(&mut self) {
        let _ = self.tx.send(SpeechRequest::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_speech_worker(config: SpeechConfig, rx: Receiver<SpeechRequest>) {
    let mut current: Option<Child> = None;

    for request in rx {
        match request {
            SpeechRequest::Say(text) => {
                cancel(&mut current);
                match start_speech(&config, &text) {
                    Ok(child) => current = Some(child),
                    Err(e) => tracing::warn!(error = %e, "speech failed"),
                }
            }
            SpeechRequest::Shutdown => break,
        }
    }

    cancel(&mut current);
    tracing::debug!("speech worker exiting");
}

fn cancel(current: &mut Option<Child>) {
    if let Some(mut child) = current.take() {
        // kill fails harmlessly when the utterance already finished
        let _ = child.kill();
        let _ = child.wait();
    }
}

fn start_speech(config: &SpeechConfig, text: &str) -> Result<Child, SpeechError> {
    speech_command(config, text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SpeechError::Spawn {
            program: config.program.clone(),
            source,
        })
}

/// Builds the engine invocation for `text`, translating locale and rate
/// into the flags the known engines understand.
pub fn speech_command(config: &SpeechConfig, text: &str) -> Command {
    let mut command = Command::new(&config.program);
    let words_per_minute = (BASE_WORDS_PER_MINUTE * config.rate).round() as u32;

    match engine_name(&config.program).as_str() {
        "espeak" | "espeak-ng" => {
            command
                .arg("-v")
                .arg(config.locale.to_lowercase())
                .arg("-s")
                .arg(words_per_minute.to_string());
        }
        "say" => {
            command.arg("-r").arg(words_per_minute.to_string());
        }
        "spd-say" => {
            // spd-say takes a language code and a rate offset in -100..=100
            let language = config
                .locale
                .split(['-', '_'])
                .next()
                .unwrap_or("en")
                .to_lowercase();
            let offset = ((config.rate - 1.0) * 100.0).round().clamp(-100.0, 100.0) as i32;
            command
                .arg("-l")
                .arg(language)
                .arg("-r")
                .arg(offset.to_string());
        }
        _ => {}
    }

    command.arg(text);
    command
}

fn engine_name(program: &str) -> String {
    Path::new(program)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
