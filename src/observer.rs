//! Optional rendering of intermediate pipeline values.
//!
//! Derivation functions never print. The pipeline reports each finished stage
//! to a [`PipelineObserver`]; what gets shown, and whether secrets are shown
//! at all, is the observer's decision.

use tracing::info;

use crate::address::Address;
use crate::derive::ChildIndex;
use crate::types::{ExtendedKey, Mnemonic, Seed};

const REDACTED: &str = "<redacted>";

/// A completed pipeline stage and its output.
#[derive(Debug, Clone, Copy)]
pub enum Stage<'a> {
    Mnemonic(&'a Mnemonic),
    Seed(&'a Seed),
    MasterKey(&'a ExtendedKey),
    ChildKey { index: ChildIndex, key: &'a ExtendedKey },
    Address(&'a Address),
}

impl Stage<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Mnemonic(_) => "mnemonic",
            Stage::Seed(_) => "seed",
            Stage::MasterKey(_) => "master_key",
            Stage::ChildKey { .. } => "child_key",
            Stage::Address(_) => "address",
        }
    }

    /// True for every stage except the address.
    pub fn is_secret(&self) -> bool {
        !matches!(self, Stage::Address(_))
    }
}

pub trait PipelineObserver {
    fn on_stage(&mut self, stage: Stage<'_>);
}

/// Ignores every stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_stage(&mut self, _stage: Stage<'_>) {}
}

/// Emits one `info` event per stage. Secret values are replaced with
/// `<redacted>` unless `reveal_secrets` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver {
    reveal_secrets: bool,
}

impl TracingObserver {
    pub fn new(reveal_secrets: bool) -> Self {
        Self { reveal_secrets }
    }
}

impl PipelineObserver for TracingObserver {
    fn on_stage(&mut self, stage: Stage<'_>) {
        let reveal = self.reveal_secrets;
        match stage {
            Stage::Mnemonic(mnemonic) => {
                let phrase = if reveal { mnemonic.phrase() } else { REDACTED };
                info!(stage = stage.name(), words = mnemonic.word_count(), phrase, "mnemonic generated");
            }
            Stage::Seed(seed) => {
                let value = if reveal { hex::encode(seed.as_bytes()) } else { REDACTED.to_string() };
                info!(stage = stage.name(), seed = %value, "seed stretched");
            }
            Stage::MasterKey(key) => {
                let (k, c) = render_key(key, reveal);
                info!(stage = stage.name(), key = %k, chain_code = %c, "master key derived");
            }
            Stage::ChildKey { index, key } => {
                let (k, c) = render_key(key, reveal);
                info!(stage = stage.name(), index = index.value(), key = %k, chain_code = %c, "child key derived");
            }
            Stage::Address(address) => {
                info!(stage = stage.name(), %address, "address derived");
            }
        }
    }
}

fn render_key(key: &ExtendedKey, reveal: bool) -> (String, String) {
    if reveal {
        (key.key_hex().to_string(), key.chain_code_hex().to_string())
    } else {
        (REDACTED.to_string(), REDACTED.to_string())
    }
}

/// Records the order of stages and the public values it saw. Secret stages
/// are recorded by name only.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub stages: Vec<&'static str>,
    pub child_index: Option<ChildIndex>,
    pub address: Option<Address>,
}

impl PipelineObserver for RecordingObserver {
    fn on_stage(&mut self, stage: Stage<'_>) {
        self.stages.push(stage.name());
        match stage {
            Stage::ChildKey { index, .. } => self.child_index = Some(index),
            Stage::Address(address) => self.address = Some(*address),
            _ => {}
        }
    }
}

impl<T: PipelineObserver + ?Sized> PipelineObserver for &mut T {
    fn on_stage(&mut self, stage: Stage<'_>) {
        (**self).on_stage(stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_secrecy() {
        let key = ExtendedKey::new([1; 32], [2; 32]);
        let address = Address::from_bytes([3; 20]);
        assert!(Stage::MasterKey(&key).is_secret());
        assert!(Stage::ChildKey { index: ChildIndex::new(0).unwrap(), key: &key }.is_secret());
        assert!(!Stage::Address(&address).is_secret());
    }

    #[test]
    fn test_render_key_redacts_by_default() {
        let key = ExtendedKey::new([0xaa; 32], [0xbb; 32]);
        assert_eq!(render_key(&key, false), (REDACTED.to_string(), REDACTED.to_string()));
        let (k, c) = render_key(&key, true);
        assert_eq!(k, "aa".repeat(32));
        assert_eq!(c, "bb".repeat(32));
    }

    #[test]
    fn test_recording_observer() {
        let key = ExtendedKey::new([1; 32], [2; 32]);
        let address = Address::from_bytes([3; 20]);
        let mut recorder = RecordingObserver::default();
        recorder.on_stage(Stage::MasterKey(&key));
        recorder.on_stage(Stage::ChildKey { index: ChildIndex::new(4).unwrap(), key: &key });
        recorder.on_stage(Stage::Address(&address));
        assert_eq!(recorder.stages, vec!["master_key", "child_key", "address"]);
        assert_eq!(recorder.child_index.map(ChildIndex::value), Some(4));
        assert_eq!(recorder.address, Some(address));
    }
}
