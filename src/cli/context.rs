//! CLI context - bundles settings, flags, and clipboard state.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliError, CliFlags, prompts, quiet};
use classpass::entropy::OsRandom;
use classpass::pass::{self, CharClass, GenerationRequest, SecureBufWriter, output};
use classpass::settings::Settings;
use classpass::terminal::print_entropy_report;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    settings_path: PathBuf,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse command-line arguments and load saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, CliError> {
        let flags = CliFlags::try_parse_from(args)?;
        quiet::set(flags.quiet);

        let settings_path = Settings::path();
        let settings = if flags.reset {
            Settings::default()
        } else {
            Settings::load_from(&settings_path).unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, settings, settings_path))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            settings,
            flags,
            settings_path,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        self.apply_flags();
        let request = self.settings.request();
        request.validate()?;

        self.handle_clipboard()?;
        self.handle_save();

        if self.flags.entropy && !quiet::enabled() {
            print_entropy_report(&request, self.count());
        }

        self.generate_output(&request)
    }

    fn count(&self) -> usize {
        self.settings.number_of_passwords.max(1)
    }

    /// Apply CLI flags on top of the loaded defaults.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.count {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_lower {
            self.settings.set_class(CharClass::Lowercase, false);
        }
        if self.flags.no_upper {
            self.settings.set_class(CharClass::Uppercase, false);
        }
        if self.flags.digits {
            self.settings.set_class(CharClass::Digits, true);
        }
        if self.flags.symbols {
            self.settings.set_class(CharClass::Symbols, true);
        }
        if self.flags.no_ambiguous {
            self.settings.exclude_ambiguous = true;
        }

        debug!("effective settings: {:?}", self.settings);
    }

    /// `--save` stores the effective settings, `--reset` alone stores the
    /// built-ins. Failure to save never blocks generation.
    fn settings_to_save(&self) -> Option<Settings> {
        if self.flags.save {
            Some(self.settings.clone())
        } else if self.flags.reset {
            Some(Settings::default())
        } else {
            None
        }
    }

    fn handle_save(&self) {
        let Some(settings) = self.settings_to_save() else {
            return;
        };
        match settings.save_to(&self.settings_path) {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), CliError> {
        if !self.flags.board {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                debug!("clipboard init failed: {e}");
                if prompts::clipboard_fallback_prompt() {
                    self.flags.board = false;
                    Ok(())
                } else {
                    Err(CliError::Aborted)
                }
            }
        }
    }

    /// Generate passwords and send them to the selected sink.
    pub fn generate_output(&mut self, request: &GenerationRequest) -> Result<(), CliError> {
        let count = self.count();
        let mut rng = OsRandom;
        let passwords = pass::generate_batch(request, count, &mut rng)?;

        if let Some(ctx) = self.clipboard.as_mut() {
            let joined = output::join_lines(passwords);
            // copypasta takes ownership of its copy; only ours is wiped
            ctx.set_contents((*joined).clone())
                .map_err(|e| CliError::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(count);
        } else if let Some(path) = self.flags.output.as_deref() {
            let written = write_file(path, passwords)?;
            prompts::passwords_written(written, path);
        } else {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            match output::write_lines(&mut out, passwords) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => {
                    other?;
                }
            }
        }

        Ok(())
    }
}

fn write_file<I>(path: &Path, passwords: I) -> Result<usize, CliError>
where
    I: IntoIterator<Item = pass::Password>,
{
    let file = output::open_append(path)?;
    let mut out = SecureBufWriter::new(file);
    Ok(output::write_lines(&mut out, passwords)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classpass::pass::InvalidRequest;

    fn context(args: &[&str], settings: Settings) -> Context {
        context_at(args, settings, PathBuf::from("/nonexistent/classpass/settings"))
    }

    fn context_at(args: &[&str], settings: Settings, path: PathBuf) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("classpass").chain(args.iter().copied()))
                .unwrap();
        Context::with_settings(flags, settings, path)
    }

    fn saved(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn reset_stores_built_ins_not_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let out = dir.path().join("out.txt");

        let args = ["--reset", "-l", "30", "-d", "-q", "-o", out.to_str().unwrap()];
        let mut ctx = context_at(&args, Settings::default(), path.clone());
        ctx.run().unwrap();

        assert_eq!(saved(&path), "12,1,true,true,false,false,false\n");
        // The run itself still honours the flags
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.trim_end().len(), 30);
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn save_stores_effective_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let out = dir.path().join("out.txt");

        let args = [
            "--save",
            "-l",
            "24",
            "-n",
            "2",
            "-d",
            "-s",
            "-a",
            "-q",
            "-o",
            out.to_str().unwrap(),
        ];
        let mut ctx = context_at(&args, Settings::default(), path.clone());
        ctx.run().unwrap();

        assert_eq!(saved(&path), "24,2,true,true,true,true,true\n");
    }

    #[test]
    fn reset_with_save_stores_flags_over_built_ins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let out = dir.path().join("out.txt");

        let args = ["--reset", "--save", "-l", "16", "-q", "-o", out.to_str().unwrap()];
        let mut ctx = context_at(&args, Settings::default(), path.clone());
        ctx.run().unwrap();

        assert_eq!(saved(&path), "16,1,true,true,false,false,false\n");
    }

    #[test]
    fn nothing_saved_without_save_or_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let out = dir.path().join("out.txt");

        let args = ["-l", "20", "-q", "-o", out.to_str().unwrap()];
        let mut ctx = context_at(&args, Settings::default(), path.clone());
        ctx.run().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn rejected_request_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut ctx = context_at(&["--save", "-l", "1", "-q"], Settings::default(), path.clone());
        assert!(ctx.run().is_err());
        assert!(!path.exists());
    }

    #[test]
    fn oversized_length_exits_as_invalid_request() {
        let mut ctx = context(&["-l", "18446744073709551615", "-q"], Settings::default());
        let err = ctx.run().unwrap_err();
        assert!(matches!(err, CliError::Invalid(InvalidRequest::LengthTooLong { .. })));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn flags_override_defaults() {
        let mut ctx = context(&["-l", "20", "-n", "4", "-d", "--no-lower"], Settings::default());
        ctx.apply_flags();

        let request = ctx.settings.request();
        assert_eq!(request.length, 20);
        assert_eq!(ctx.count(), 4);
        assert!(!request.classes.contains(CharClass::Lowercase));
        assert!(request.classes.contains(CharClass::Uppercase));
        assert!(request.classes.contains(CharClass::Digits));
        assert!(!request.classes.contains(CharClass::Symbols));
        assert!(!request.exclude_ambiguous);
    }

    #[test]
    fn saved_defaults_survive_when_no_flags() {
        let saved = Settings {
            pass_length: 30,
            number_of_passwords: 2,
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
        };
        let mut ctx = context(&[], saved.clone());
        ctx.apply_flags();
        assert_eq!(ctx.settings, saved);
    }

    #[test]
    fn zero_count_is_clamped_to_one() {
        let mut ctx = context(&["-n", "0"], Settings::default());
        ctx.apply_flags();
        assert_eq!(ctx.count(), 1);
    }

    #[test]
    fn removing_every_class_is_rejected() {
        let mut ctx = context(&["--no-lower", "--no-upper"], Settings::default());
        let err = ctx.run().unwrap_err();
        assert!(matches!(err, CliError::Invalid(InvalidRequest::NoClassSelected)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn too_short_for_classes_is_rejected() {
        let mut ctx = context(&["-l", "3", "-d", "-s"], Settings::default());
        let err = ctx.run().unwrap_err();
        assert!(matches!(
            err,
            CliError::Invalid(InvalidRequest::LengthTooShort {
                length: 3,
                required: 4
            })
        ));
    }

    #[test]
    fn file_output_appends_each_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/passwords.txt");
        let arg = path.to_str().unwrap();

        let mut ctx = context(&["-q", "-l", "10", "-n", "5", "-d", "-o", arg], Settings::default());
        ctx.run().unwrap();
        let mut ctx = context(&["-q", "-l", "10", "-n", "2", "-d", "-o", arg], Settings::default());
        ctx.run().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        for line in lines {
            assert_eq!(line.len(), 10);
            assert!(line.chars().any(|c| c.is_ascii_digit()));
            assert!(line.chars().any(|c| c.is_ascii_lowercase()));
            assert!(line.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.txt");
        let arg = path.to_str().unwrap();

        let mut ctx = context(&["-q", "-l", "1", "-o", arg], Settings::default());
        assert!(ctx.run().is_err());
        assert!(!path.exists());
    }
}
