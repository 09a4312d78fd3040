use std::{
    fmt::{self, Debug, Display},
    ops::Deref,
};

use serde::Serialize;

/// One reference license and how closely the input resembles it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseMatch {
    pub name: String,
    /// cosine similarity, 0.0 to 1.0
    pub probability: f64,
}

impl Display for LicenseMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4})", self.name, self.probability)
    }
}

/// Ranked identification results.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matches {
    pub list: Vec<LicenseMatch>,
}

impl Matches {
    pub fn new(list: Vec<LicenseMatch>) -> Self {
        Matches { list }
    }

    /// Best first; equal probabilities by name. NaN scores are dropped.
    pub fn sort_by_probability(&mut self) -> &mut Self {
        self.list.retain(|m| !m.probability.is_nan());
        self.list.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.name.cmp(&b.name))
        });
        self
    }

    pub fn best(&self) -> Option<&LicenseMatch> {
        self.list.first()
    }

    pub fn into_vec(self) -> Vec<LicenseMatch> {
        self.list
    }
}

impl Deref for Matches {
    type Target = [LicenseMatch];

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl IntoIterator for Matches {
    type Item = LicenseMatch;
    type IntoIter = std::vec::IntoIter<LicenseMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a LicenseMatch;
    type IntoIter = std::slice::Iter<'a, LicenseMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Debug for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Matches [")?;
            for found in &self.list {
                writeln!(f, "    {}", found)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &str, probability: f64) -> LicenseMatch {
        LicenseMatch {
            name: name.to_string(),
            probability,
        }
    }

    #[test]
    fn sorts_descending_then_by_name() {
        let mut matches = Matches::new(vec![
            found("MIT", 0.8),
            found("GPL-3.0-or-later", 0.98),
            found("AGPL-3.0", f64::NAN),
            found("GPL-3.0-only", 0.98),
        ]);
        matches.sort_by_probability();
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["GPL-3.0-only", "GPL-3.0-or-later", "MIT"]);
        assert_eq!(matches.best().unwrap().name, "GPL-3.0-only");
    }

    #[test]
    fn display() {
        assert_eq!(found("GPL-3.0-only", 0.980265).to_string(), "GPL-3.0-only (0.9803)");
        let matches = Matches::new(vec![found("MIT", 1.0)]);
        assert_eq!(format!("{matches:#?}"), "Matches [\n    MIT (1.0000)\n]");
    }

    #[test]
    fn serializes_as_list() {
        let matches = Matches::new(vec![found("MIT", 0.5)]);
        let json = serde_json::to_string(&matches).unwrap();
        assert_eq!(json, r#"[{"name":"MIT","probability":0.5}]"#);
    }
}
