//! Fixture corpus generation and enumeration
//!
//! The generator materializes one file per size tier, filled with
//! random bytes. Content is irrelevant to the benchmark; the byte count
//! is the contract. Each fixture is written under a temporary name and
//! renamed into place, so a failed run never leaves a truncated file
//! claiming a tier's name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::RngCore;
use tracing::info;

use crate::config::{HarnessConfig, SizeTier};
use crate::error::HarnessError;

/// Write granularity for fixture content
const CHUNK_BYTES: usize = 64 * 1024;

/// Generate the full corpus described by `config.tiers`.
///
/// Creates the fixtures directory if absent and overwrites any existing
/// fixture of the same name. Aborts on the first failure; no retries.
pub fn generate_corpus(config: &HarnessConfig) -> Result<(), HarnessError> {
    fs::create_dir_all(&config.fixtures_dir).map_err(|source| HarnessError::CreateDir {
        path: config.fixtures_dir.clone(),
        source,
    })?;

    let mut rng = rand::thread_rng();
    for tier in &config.tiers {
        write_fixture(&config.fixtures_dir, tier, &mut rng)?;
        info!(fixture = %tier.name, bytes = tier.bytes, "fixture written");
    }
    Ok(())
}

/// Enumerate the corpus, sorted by file name for reproducible run
/// order. Dotfiles are skipped so an interrupted generator run's
/// temporary file is never benchmarked.
pub fn list_corpus(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    if !dir.is_dir() {
        return Err(HarnessError::MissingCorpus(dir.to_path_buf()));
    }

    let mut fixtures = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        fixtures.push(entry.path());
    }
    fixtures.sort();
    Ok(fixtures)
}

fn write_fixture(dir: &Path, tier: &SizeTier, rng: &mut impl RngCore) -> Result<(), HarnessError> {
    let final_path = dir.join(&tier.name);
    let tmp_path = dir.join(format!(".{}.partial", tier.name));

    match fill_file(&tmp_path, tier.bytes, rng) {
        Ok(()) => fs::rename(&tmp_path, &final_path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            HarnessError::FixtureWrite {
                path: final_path,
                source,
            }
        }),
        Err(source) => {
            let _ = fs::remove_file(&tmp_path);
            Err(HarnessError::FixtureWrite {
                path: final_path,
                source,
            })
        }
    }
}

fn fill_file(path: &Path, bytes: u64, rng: &mut impl RngCore) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut chunk = vec![0u8; CHUNK_BYTES];

    let mut remaining = bytes;
    while remaining > 0 {
        let n = remaining.min(CHUNK_BYTES as u64) as usize;
        rng.fill_bytes(&mut chunk[..n]);
        writer.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use tempfile::tempdir;

    fn small_config(dir: &Path) -> HarnessConfig {
        HarnessConfig {
            fixtures_dir: dir.to_path_buf(),
            tiers: vec![
                SizeTier::new("001kb", 1024),
                SizeTier::new("004kb", 4096),
                SizeTier::new("100kb", 100 * 1024),
            ],
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn test_generated_sizes_match_tiers_exactly() {
        let dir = tempdir().unwrap();
        let config = small_config(dir.path());
        generate_corpus(&config).unwrap();

        for tier in &config.tiers {
            let meta = fs::metadata(dir.path().join(&tier.name)).unwrap();
            assert_eq!(meta.len(), tier.bytes, "tier {}", tier.name);
        }
    }

    #[test]
    fn test_regeneration_leaves_exactly_one_file_per_tier() {
        let dir = tempdir().unwrap();
        let config = small_config(dir.path());
        generate_corpus(&config).unwrap();
        generate_corpus(&config).unwrap();

        let listed = list_corpus(dir.path()).unwrap();
        assert_eq!(listed.len(), config.tiers.len());
        // No temporary leftovers either
        let all: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(all.len(), config.tiers.len());
    }

    #[test]
    fn test_generation_overwrites_stale_content() {
        let dir = tempdir().unwrap();
        let config = small_config(dir.path());
        fs::write(dir.path().join("001kb"), b"stale").unwrap();
        generate_corpus(&config).unwrap();

        let meta = fs::metadata(dir.path().join("001kb")).unwrap();
        assert_eq!(meta.len(), 1024);
    }

    #[test]
    fn test_generation_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("corpus");
        let config = small_config(&nested);
        generate_corpus(&config).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_list_corpus_sorted_and_skips_dotfiles() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("010mb"), b"b").unwrap();
        fs::write(dir.path().join("001mb"), b"a").unwrap();
        fs::write(dir.path().join(".001mb.partial"), b"junk").unwrap();

        let listed = list_corpus(dir.path()).unwrap();
        let names: Vec<_> = listed
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["001mb", "010mb"]);
    }

    #[test]
    fn test_list_corpus_missing_directory_is_validation_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_corpus(&missing).unwrap_err();
        assert!(matches!(err, HarnessError::MissingCorpus(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_failed_write_leaves_no_file_for_tier() {
        let dir = tempdir().unwrap();
        let mut config = small_config(dir.path());
        // A tier whose name collides with a directory makes the rename fail
        config.tiers = vec![SizeTier::new("blocked", 512)];
        fs::create_dir(dir.path().join("blocked")).unwrap();

        let err = generate_corpus(&config).unwrap_err();
        assert!(matches!(err, HarnessError::FixtureWrite { .. }));
        // The temporary file must not linger
        assert!(!dir.path().join(".blocked.partial").exists());
    }
}
