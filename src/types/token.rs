use serde::{Deserialize, Serialize};

/// Column holding the surface form.
const SURFACE_FIELD: usize = 1;
/// Column holding the part-of-speech tag.
const TAG_FIELD: usize = 4;

/// A surface form and its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    surface: String,
    tag: String,
}

impl Token {
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Extract the surface and tag columns from a tab separated record.
    ///
    /// Returns the number of fields found if the record is too short.
    pub fn from_conllx(line: &str) -> Result<Self, usize> {
        let mut fields = line.split('\t');
        let surface = fields.nth(SURFACE_FIELD);
        let tag = fields.nth(TAG_FIELD - SURFACE_FIELD - 1);

        match (surface, tag) {
            (Some(surface), Some(tag)) => Ok(Self::new(surface, tag)),
            _ => Err(line.split('\t').count()),
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}
