use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary framing of a scenario: every wheel segment belongs to one half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-valued confidence framing. The order of [`Likelihood::ALL`] is
/// load-bearing: it fixes the dial anchor placement (0°, 120°, 240°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Probable,
    Plausible,
    Possible,
}

impl Likelihood {
    /// Anchor order: probable, plausible, possible.
    pub const ALL: [Likelihood; 3] = [
        Likelihood::Probable,
        Likelihood::Plausible,
        Likelihood::Possible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Likelihood::Probable => "probable",
            Likelihood::Plausible => "plausible",
            Likelihood::Possible => "possible",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The committed `(polarity, likelihood)` pair. Owned by the host application;
/// the wheel only borrows it for a frame and proposes replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub polarity: Polarity,
    pub likelihood: Likelihood,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            polarity: Polarity::Positive,
            likelihood: Likelihood::Plausible,
        }
    }
}

impl Selection {
    pub fn apply(&mut self, update: SelectionUpdate) {
        self.polarity = update.polarity;
        self.likelihood = update.likelihood;
    }
}

/// A full replacement pair proposed by the wheel. Whether to accept it is
/// host policy; the wheel never applies it itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub polarity: Polarity,
    pub likelihood: Likelihood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Polarity::Positive).unwrap(), "\"positive\"");
        assert_eq!(serde_json::to_string(&Likelihood::Plausible).unwrap(), "\"plausible\"");
        let l: Likelihood = serde_json::from_str("\"possible\"").unwrap();
        assert_eq!(l, Likelihood::Possible);
    }

    #[test]
    fn unknown_axis_value_is_rejected_at_parse_time() {
        assert!(serde_json::from_str::<Likelihood>("\"preposterous\"").is_err());
        assert!(serde_json::from_str::<Polarity>("\"neutral\"").is_err());
    }

    #[test]
    fn apply_replaces_both_axes() {
        let mut sel = Selection::default();
        sel.apply(SelectionUpdate {
            polarity: Polarity::Negative,
            likelihood: Likelihood::Possible,
        });
        assert_eq!(sel.polarity, Polarity::Negative);
        assert_eq!(sel.likelihood, Likelihood::Possible);
    }
}
