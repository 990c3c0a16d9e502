use serde::{Deserialize, Serialize};

/// ARIA role placed on a rendered icon element.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRole {
    Img,
    Presentation,
}

impl IconRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Presentation => "presentation",
        }
    }
}

impl Default for IconRole {
    fn default() -> Self {
        Self::Img
    }
}

impl std::str::FromStr for IconRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "img" => Ok(Self::Img),
            "presentation" | "none" => Ok(Self::Presentation),
            _ => Err(format!("invalid icon role: {}", s)),
        }
    }
}
