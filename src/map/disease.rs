//! Disease colours, their global status, and per-location unit counts.

use serde::{Deserialize, Serialize};

/// One of the four disease colours. Every location belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Black,
    Blue,
    Red,
    Yellow,
}

impl Disease {
    /// All colours, in index order.
    pub const ALL: [Disease; 4] = [Disease::Black, Disease::Blue, Disease::Red, Disease::Yellow];

    /// Dense index used by `DiseaseCounts`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase colour name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Disease::Black => "black",
            Disease::Blue => "blue",
            Disease::Red => "red",
            Disease::Yellow => "yellow",
        }
    }

    /// Parse a colour name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Disease> {
        Disease::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Global status of a disease colour.
///
/// Ordered so that `Ongoing < Cured < Eradicated`; a status only ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseStatus {
    #[default]
    Ongoing,
    Cured,
    Eradicated,
}

impl DiseaseStatus {
    /// Cured or eradicated.
    #[must_use]
    pub fn is_cured(self) -> bool {
        self >= DiseaseStatus::Cured
    }
}

/// Disease units present at one location, one slot per colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiseaseCounts([u8; 4]);

impl DiseaseCounts {
    #[must_use]
    pub fn get(&self, disease: Disease) -> u8 {
        self.0[disease.index()]
    }

    pub fn set(&mut self, disease: Disease, count: u8) {
        self.0[disease.index()] = count;
    }

    /// Non-zero colours with their counts.
    pub fn present(&self) -> impl Iterator<Item = (Disease, u8)> + '_ {
        Disease::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .filter(|&(_, count)| count > 0)
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_from_name() {
        assert_eq!(Disease::from_name("Blue"), Some(Disease::Blue));
        assert_eq!(Disease::from_name(" yellow "), Some(Disease::Yellow));
        assert_eq!(Disease::from_name("green"), None);
    }

    #[test]
    fn test_status_order() {
        assert!(DiseaseStatus::Ongoing < DiseaseStatus::Cured);
        assert!(DiseaseStatus::Cured < DiseaseStatus::Eradicated);
        assert!(!DiseaseStatus::Ongoing.is_cured());
        assert!(DiseaseStatus::Eradicated.is_cured());
    }

    #[test]
    fn test_counts() {
        let mut counts = DiseaseCounts::default();
        assert!(counts.is_clear());

        counts.set(Disease::Red, 2);
        counts.set(Disease::Black, 1);

        assert_eq!(counts.get(Disease::Red), 2);
        let present: Vec<_> = counts.present().collect();
        assert_eq!(present, vec![(Disease::Black, 1), (Disease::Red, 2)]);
    }
}
