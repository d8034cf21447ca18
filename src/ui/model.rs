use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::input::CaptureBuffer;
use crate::lang::Language;
use crate::names;

/// Discrete phase of the selection flow. Transitions are forward-only and
/// confirm-driven; `BrowseNames` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    SelectLanguage,
    SelectSource,
    CaptureFilePath,
    CaptureManualNames,
    BrowseNames,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Random,
    File,
    Manual,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Random, Source::File, Source::Manual];

    pub fn label(self) -> &'static str {
        match self {
            Source::Random => "random",
            Source::File => "file",
            Source::Manual => "manual",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Model {
    pub stage: Stage,
    pub language: Option<Language>,
    pub source: Option<Source>,
    pub names: Vec<String>,
    pub selected: BTreeSet<usize>,
    pub cursor: usize,
    pub file_path: CaptureBuffer,
    pub manual_names: CaptureBuffer,
    pub last_error: Option<String>,
    // process-owned random source; injected so shuffling is testable
    pub rng: StdRng,
}

pub fn initial_model(mut rng: StdRng) -> Model {
    let names = names::shuffled_seed(&mut rng);
    Model {
        stage: Stage::SelectLanguage,
        language: None,
        source: None,
        names,
        selected: BTreeSet::new(),
        cursor: 0,
        file_path: CaptureBuffer::new("names.txt"),
        manual_names: CaptureBuffer::new("John, Jane, Alice"),
        last_error: None,
        rng,
    }
}

impl Model {
    /// Model seeded from the OS for the interactive session.
    pub fn new() -> Model {
        initial_model(StdRng::from_os_rng())
    }

    // wrapper that delegates to the update module
    pub fn update(self, msg: crate::ui::Msg) -> Model {
        crate::ui::update::handle_update(self, msg)
    }

    /// Display language for the renderer; English until one is chosen.
    pub fn display_language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// True while a capture buffer owns typed characters. The runtime uses
    /// this to keep `q` from quitting mid-edit.
    pub fn capture_active(&self) -> bool {
        self.file_path.is_focused() || self.manual_names.is_focused()
    }

    /// Length of the list currently being navigated.
    pub fn candidate_len(&self) -> usize {
        match self.stage {
            Stage::SelectLanguage => Language::ALL.len(),
            Stage::SelectSource => Source::ALL.len(),
            Stage::CaptureFilePath | Stage::CaptureManualNames => 0,
            Stage::BrowseNames => self.names.len(),
        }
    }
}

impl Default for Model {
    fn default() -> Model {
        Model::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> Model {
        initial_model(StdRng::seed_from_u64(7))
    }

    #[test]
    fn initial_model_starts_at_language_selection() {
        let m = seeded();
        assert_eq!(m.stage, Stage::SelectLanguage);
        assert!(m.language.is_none());
        assert!(m.source.is_none());
        assert_eq!(m.cursor, 0);
        assert!(m.selected.is_empty());
        assert!(m.last_error.is_none());
    }

    #[test]
    fn initial_model_holds_the_shuffled_default_seed() {
        let m = seeded();
        assert_eq!(m.names.len(), names::DEFAULT_SEED.len());
        let mut sorted = m.names.clone();
        sorted.sort();
        let mut expected: Vec<String> =
            names::DEFAULT_SEED.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn candidate_len_follows_the_stage() {
        let mut m = seeded();
        assert_eq!(m.candidate_len(), 2);
        m.stage = Stage::SelectSource;
        assert_eq!(m.candidate_len(), 3);
        m.stage = Stage::CaptureFilePath;
        assert_eq!(m.candidate_len(), 0);
        m.stage = Stage::BrowseNames;
        assert_eq!(m.candidate_len(), 28);
    }

    #[test]
    fn capture_active_tracks_buffer_focus() {
        let mut m = seeded();
        assert!(!m.capture_active());
        m.file_path.focus();
        assert!(m.capture_active());
        m.file_path.blur();
        m.manual_names.focus();
        assert!(m.capture_active());
    }

    #[test]
    fn display_language_defaults_to_english() {
        let mut m = seeded();
        assert_eq!(m.display_language(), Language::English);
        m.language = Some(Language::Spanish);
        assert_eq!(m.display_language(), Language::Spanish);
    }
}
