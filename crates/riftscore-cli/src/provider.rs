use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use riftscore_match::{MatchProvider, MatchSnapshot, SampleMatchProvider};

use crate::util;

/// Serves snapshots stored as `<dir>/<match id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirMatchProvider {
    dir: PathBuf,
}

impl JsonDirMatchProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, match_id: &str) -> anyhow::Result<PathBuf> {
        let match_id = match_id.trim();
        if match_id.is_empty()
            || match_id.contains(['/', '\\'])
            || match_id.starts_with('.')
        {
            bail!("Invalid match id: {match_id:?}");
        }
        Ok(self.dir.join(format!("{match_id}.json")))
    }
}

impl MatchProvider for JsonDirMatchProvider {
    type Error = anyhow::Error;

    fn finished_match(&self, match_id: &str) -> anyhow::Result<Option<MatchSnapshot>> {
        let path = self.path_for(match_id)?;
        let exists = path
            .try_exists()
            .with_context(|| format!("Cannot access match file: {}", path.display()))?;
        if !exists {
            log::debug!("no match file at {}", path.display());
            return Ok(None);
        }
        let snapshot: MatchSnapshot = util::read_json_file("match", &path)?;
        if !snapshot.completed {
            log::info!("match {} is not finished yet", snapshot.match_id);
            return Ok(None);
        }
        Ok(Some(snapshot))
    }
}

/// The bundled sample first, then the match directory if one is configured.
pub fn find_finished_match(
    match_id: &str,
    match_dir: Option<&Path>,
) -> anyhow::Result<Option<MatchSnapshot>> {
    let Ok(sample) = SampleMatchProvider.finished_match(match_id);
    if sample.is_some() {
        return Ok(sample);
    }
    match match_dir {
        Some(dir) => JsonDirMatchProvider::new(dir).finished_match(match_id),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_like_ids() {
        let provider = JsonDirMatchProvider::new("matches");
        assert!(provider.finished_match("../secret").is_err());
        assert!(provider.finished_match("a/b").is_err());
        assert!(provider.finished_match(" ").is_err());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = std::env::temp_dir().join("riftscore-provider-missing");
        let provider = JsonDirMatchProvider::new(dir);
        assert!(provider.finished_match("EUW1_1").unwrap().is_none());
    }

    #[test]
    fn test_reads_and_filters_unfinished() {
        let dir = std::env::temp_dir().join(format!("riftscore-provider-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut snapshot = riftscore_match::sample::finished_match();
        snapshot.match_id = "EUW1_2".to_owned();
        std::fs::write(dir.join("EUW1_2.json"), serde_json::to_string(&snapshot).unwrap()).unwrap();
        snapshot.completed = false;
        std::fs::write(dir.join("EUW1_3.json"), serde_json::to_string(&snapshot).unwrap()).unwrap();

        let provider = JsonDirMatchProvider::new(&dir);
        let found = provider.finished_match("EUW1_2").unwrap().unwrap();
        assert_eq!(found.participants.len(), 10);
        assert!(provider.finished_match("EUW1_3").unwrap().is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_sample_is_always_available() {
        let snapshot = find_finished_match("sample", None).unwrap().unwrap();
        assert_eq!(snapshot.match_id, "sample");
        assert!(find_finished_match("EUW1_9", None).unwrap().is_none());
    }
}
