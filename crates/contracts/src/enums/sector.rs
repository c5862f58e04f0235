use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating sector of the technical-assistance desk.
///
/// Scopes which navigation entries are visible and which service orders the
/// API returns. The first variant is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    #[default]
    Celulares,
    Informatica,
}

impl Sector {
    /// Tag used in storage, query strings and JSON.
    pub fn code(&self) -> &'static str {
        match self {
            Sector::Celulares => "celulares",
            Sector::Informatica => "informatica",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Sector::Celulares => "Celulares",
            Sector::Informatica => "Informática",
        }
    }

    pub fn all() -> [Sector; 2] {
        [Sector::Celulares, Sector::Informatica]
    }

    /// Parse a tag, `None` for anything that is not a known sector.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "celulares" => Some(Sector::Celulares),
            "informatica" => Some(Sector::Informatica),
            _ => None,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::from_code(s.trim()).ok_or_else(|| anyhow::anyhow!("unknown sector tag: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_tag() {
        assert_eq!(Sector::default(), Sector::Celulares);
        assert_eq!(Sector::all()[0], Sector::default());
    }

    #[test]
    fn test_code_parse() {
        for sector in Sector::all() {
            assert_eq!(Sector::from_code(sector.code()), Some(sector));
        }
        assert_eq!(Sector::from_code("CELULARES"), None);
        assert_eq!(Sector::from_code(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(" informatica ".parse::<Sector>().unwrap(), Sector::Informatica);
        let err = "tablets".parse::<Sector>().unwrap_err();
        assert!(err.to_string().contains("tablets"));
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Sector::Informatica).unwrap();
        assert_eq!(json, "\"informatica\"");
        let back: Sector = serde_json::from_str("\"celulares\"").unwrap();
        assert_eq!(back, Sector::Celulares);
    }
}
