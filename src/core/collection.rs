use crate::core::conversion::rgb_to_hsl;
use crate::core::parser::ColorParser;
use crate::domain::model::{Color, Hsl, RawToken, Rejection, RejectionKind};
use crate::utils::error::MixerError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEntry {
    pub color: Color,
    pub hsl: Hsl,
}

/// Colors in the order they were accepted. Grows only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorCollection {
    entries: Vec<ColorEntry>,
}

impl ColorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, color: Color) {
        let hsl = rgb_to_hsl(color.red, color.green, color.blue);
        self.entries.push(ColorEntry { color, hsl });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ColorEntry> {
        self.entries.last()
    }
}

impl FromIterator<Color> for ColorCollection {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut collection = ColorCollection::new();
        for color in iter {
            collection.add(color);
        }
        collection
    }
}

/// Parse every token independently, keeping the good ones in order and
/// reporting the rest.
pub fn collect_tokens<I>(parser: &ColorParser, tokens: I) -> (ColorCollection, Vec<Rejection>)
where
    I: IntoIterator<Item = RawToken>,
{
    let mut collection = ColorCollection::new();
    let mut rejections = Vec::new();

    for token in tokens {
        match parser.parse(&token.text) {
            Ok(color) => collection.add(color),
            Err(e) => {
                let kind = match e {
                    MixerError::RangeError { .. } => RejectionKind::Range,
                    _ => RejectionKind::Format,
                };
                rejections.push(Rejection {
                    token: token.text,
                    origin: token.origin,
                    kind,
                    reason: e.to_string(),
                });
            }
        }
    }

    (collection, rejections)
}
