//! Scenario/signal catalog: loading, filtering, and the random scenario pick.

pub mod remote;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::model::{Likelihood, Polarity, Scenario, Selection, Signal};

pub const SCENARIOS_FILE: &str = "scenarios.json";
pub const SIGNALS_FILE: &str = "signals.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    MissingFile(PathBuf),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// In-memory catalog of pre-generated scenarios and their backing signals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub scenarios: Vec<Scenario>,
    pub signals: Vec<Signal>,
}

impl Catalog {
    /// Load `scenarios.json` and `signals.json` from a data directory.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let scenarios = read_json(&dir.join(SCENARIOS_FILE)).await?;
        let signals = read_json(&dir.join(SIGNALS_FILE)).await?;
        let catalog = Self { scenarios, signals };
        info!(
            scenarios = catalog.scenarios.len(),
            signals = catalog.signals.len(),
            "catalog loaded from {}",
            dir.display()
        );
        Ok(catalog)
    }

    /// Scenarios matching both axes of the selection.
    pub fn scenarios_matching(&self, selection: Selection) -> Vec<&Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.polarity == selection.polarity && s.likelihood == selection.likelihood)
            .collect()
    }

    /// Uniform random pick among the matching scenarios; `None` when nothing
    /// matches the selection.
    pub fn pick_scenario<R: Rng + ?Sized>(&self, selection: Selection, rng: &mut R) -> Option<&Scenario> {
        self.scenarios_matching(selection).choose(rng).copied()
    }

    /// Signals contributing to `scenario`, in catalog order.
    pub fn signals_for(&self, scenario: &Scenario) -> Vec<&Signal> {
        let wanted: HashSet<&str> = scenario
            .contributing_signals
            .iter()
            .map(String::as_str)
            .collect();
        self.signals
            .iter()
            .filter(|s| wanted.contains(s.id.as_str()))
            .collect()
    }

    /// Local, unpersisted removal. Returns whether anything was removed.
    pub fn remove_signal(&mut self, id: &str) -> bool {
        let before = self.signals.len();
        self.signals.retain(|s| s.id != id);
        self.signals.len() < before
    }

    /// Scenario coverage per `(polarity, likelihood)` combination.
    pub fn combination_counts(&self) -> BTreeMap<(Polarity, Likelihood), usize> {
        let mut counts = BTreeMap::new();
        for s in &self.scenarios {
            *counts.entry((s.polarity, s.likelihood)).or_insert(0) += 1;
        }
        counts
    }

    /// Number of axis combinations with at least one scenario, out of the six.
    pub fn covered_combinations(&self) -> usize {
        self.combination_counts().len()
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn scenario(id: &str, polarity: Polarity, likelihood: Likelihood, signals: &[&str]) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: format!("Scenario {id}"),
            description: "desc".to_string(),
            polarity,
            likelihood,
            likelihood_value: 50.0,
            timeframe: 5,
            contributing_signals: signals.iter().map(|s| s.to_string()).collect(),
            sources: None,
        }
    }

    fn signal(id: &str) -> Signal {
        Signal {
            id: id.to_string(),
            title: format!("Signal {id}"),
            description: "desc".to_string(),
            source: "src".to_string(),
            source_pdf: None,
            page: None,
            text: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            scenarios: vec![
                scenario("scn-1", Polarity::Positive, Likelihood::Plausible, &["sig-1", "sig-3"]),
                scenario("scn-2", Polarity::Positive, Likelihood::Plausible, &["sig-2"]),
                scenario("scn-3", Polarity::Negative, Likelihood::Probable, &[]),
            ],
            signals: vec![signal("sig-1"), signal("sig-2"), signal("sig-3")],
        }
    }

    #[test]
    fn filter_matches_both_axes() {
        let cat = catalog();
        let sel = Selection {
            polarity: Polarity::Positive,
            likelihood: Likelihood::Plausible,
        };
        let matches = cat.scenarios_matching(sel);
        assert_eq!(matches.len(), 2);
        let none = cat.scenarios_matching(Selection {
            polarity: Polarity::Negative,
            likelihood: Likelihood::Possible,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn pick_is_none_without_matches_and_some_with() {
        let cat = catalog();
        let mut rng = StepRng::new(0, 1);
        let sel = Selection {
            polarity: Polarity::Positive,
            likelihood: Likelihood::Plausible,
        };
        assert!(cat.pick_scenario(sel, &mut rng).is_some());
        let empty = Selection {
            polarity: Polarity::Negative,
            likelihood: Likelihood::Possible,
        };
        assert!(cat.pick_scenario(empty, &mut rng).is_none());
    }

    #[test]
    fn signals_for_filters_by_id_set() {
        let cat = catalog();
        let ids: Vec<&str> = cat
            .signals_for(&cat.scenarios[0])
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sig-1", "sig-3"]);
        assert!(cat.signals_for(&cat.scenarios[2]).is_empty());
    }

    #[test]
    fn remove_signal_is_local_and_idempotent() {
        let mut cat = catalog();
        assert!(cat.remove_signal("sig-2"));
        assert!(!cat.remove_signal("sig-2"));
        assert_eq!(cat.signals.len(), 2);
    }

    #[test]
    fn combination_counts_cover_present_pairs_only() {
        let cat = catalog();
        let counts = cat.combination_counts();
        assert_eq!(counts[&(Polarity::Positive, Likelihood::Plausible)], 2);
        assert_eq!(counts[&(Polarity::Negative, Likelihood::Probable)], 1);
        assert_eq!(counts.len(), 2);
        assert_eq!(cat.covered_combinations(), 2);
    }

    #[tokio::test]
    async fn load_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let cat = catalog();
        tokio::fs::write(
            dir.path().join(SCENARIOS_FILE),
            serde_json::to_string_pretty(&cat.scenarios).unwrap(),
        )
        .await
        .unwrap();
        tokio::fs::write(
            dir.path().join(SIGNALS_FILE),
            serde_json::to_string_pretty(&cat.signals).unwrap(),
        )
        .await
        .unwrap();

        let loaded = Catalog::load(dir.path()).await.unwrap();
        assert_eq!(loaded, cat);
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingFile(_)));
    }

    #[tokio::test]
    async fn load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(SCENARIOS_FILE), "not json")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join(SIGNALS_FILE), "[]")
            .await
            .unwrap();
        let err = Catalog::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
