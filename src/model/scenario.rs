use serde::{Deserialize, Serialize};

use super::{Likelihood, Polarity};

/// A single observed signal backing one or more scenarios. Wire format stays
/// byte-compatible with the original `signals.json` (snake_case `source_pdf`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Signal {
    /// Display body: prefer the extracted text (truncated) over the summary.
    pub fn body(&self, max_chars: usize) -> String {
        match &self.text {
            Some(t) if t.chars().count() > max_chars => {
                let cut: String = t.chars().take(max_chars).collect();
                format!("{cut}...")
            }
            Some(t) => t.clone(),
            None => self.description.clone(),
        }
    }

    /// Attribution line, e.g. `report.pdf, p.12` or the plain source name.
    pub fn attribution(&self) -> String {
        let base = self.source_pdf.as_deref().unwrap_or(&self.source);
        match self.page {
            Some(p) => format!("{base}, p.{p}"),
            None => base.to_string(),
        }
    }
}

/// A pre-generated scenario tagged by both axes. camelCase on the wire
/// (`likelihoodValue`, `contributingSignals`) to match `scenarios.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub polarity: Polarity,
    pub likelihood: Likelihood,
    pub likelihood_value: f64,
    /// Horizon in years from now.
    pub timeframe: u32,
    pub contributing_signals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_round_trips_camel_case_wire_format() {
        let json = r#"{
            "id": "scn-001",
            "title": "Test",
            "description": "A test scenario.",
            "polarity": "negative",
            "likelihood": "probable",
            "likelihoodValue": 82.5,
            "timeframe": 5,
            "contributingSignals": ["sig-001", "sig-002"]
        }"#;
        let scn: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scn.polarity, Polarity::Negative);
        assert_eq!(scn.likelihood_value, 82.5);
        assert_eq!(scn.contributing_signals.len(), 2);
        assert!(scn.sources.is_none());

        let out = serde_json::to_value(&scn).unwrap();
        assert!(out.get("likelihoodValue").is_some());
        assert!(out.get("contributingSignals").is_some());
        assert!(out.get("sources").is_none());
    }

    #[test]
    fn signal_body_truncates_long_text() {
        let sig = Signal {
            id: "sig-001".into(),
            title: "t".into(),
            description: "short summary".into(),
            source: "web".into(),
            source_pdf: Some("futures.pdf".into()),
            page: Some(7),
            text: Some("x".repeat(300)),
        };
        assert_eq!(sig.body(200).chars().count(), 203);
        assert_eq!(sig.attribution(), "futures.pdf, p.7");

        let plain = Signal { text: None, source_pdf: None, page: None, ..sig };
        assert_eq!(plain.body(200), "short summary");
        assert_eq!(plain.attribution(), "web");
    }
}
