//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{CharClass, ClassSet, GenerationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Settings {
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    /// The defaults file: `CLASSPASS_SETTINGS`, else under `$HOME/.config`.
    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(self.lowercase, self.uppercase, self.digits, self.symbols)
    }

    pub fn set_class(&mut self, class: CharClass, on: bool) {
        match class {
            CharClass::Lowercase => self.lowercase = on,
            CharClass::Uppercase => self.uppercase = on,
            CharClass::Digits => self.digits = on,
            CharClass::Symbols => self.symbols = on,
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.classes(), self.exclude_ambiguous)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            lowercase: true,
            uppercase: true,
            digits: false,
            symbols: false,
            exclude_ambiguous: false,
        }
    }
}
