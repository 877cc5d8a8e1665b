//! Settings file persistence.
//!
//! One line: `length,count,lower,upper,digits,symbols,exclude_ambiguous`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::Settings;

const FIELDS: usize = 7;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.exclude_ambiguous,
    );

    file.write_all(data.as_bytes())?;
    info!("saved settings to \"{}\"", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        info!("no settings at \"{}\", writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        warn!(
            "settings file \"{}\" has {} fields, expected {FIELDS}; rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.lowercase = parts[2].parse().unwrap_or(settings.lowercase);
    settings.uppercase = parts[3].parse().unwrap_or(settings.uppercase);
    settings.digits = parts[4].parse().unwrap_or(settings.digits);
    settings.symbols = parts[5].parse().unwrap_or(settings.symbols);
    settings.exclude_ambiguous = parts[6].parse().unwrap_or(settings.exclude_ambiguous);

    Ok(())
}

/// `$CLASSPASS_SETTINGS`, else `$HOME/.config/classpass/settings`.
pub fn get_path() -> PathBuf {
    if let Ok(path) = env::var("CLASSPASS_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/classpass/settings")
}
