//! The item record and its categorical attributes.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Yuge,
}

impl Size {
    /// Get the lowercase label for this size.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Yuge => "yuge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            "yuge" => Ok(Size::Yuge),
            _ => Err(FilterError::UnknownSize(s.to_string())),
        }
    }
}

/// Categorical color of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Blue,
}

impl Color {
    /// Get the lowercase label for this color.
    pub fn label(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(FilterError::UnknownColor(s.to_string())),
        }
    }
}

/// A catalog item with a display name and classifiable attributes.
///
/// Attributes are fixed at construction; nothing in this library mutates an
/// item after [`Item::new`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    name: String,
    size: Size,
    color: Color,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            name: name.into(),
            size,
            color,
        }
    }

    /// The item's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's categorical size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The item's categorical color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Item {
    // Diagnostic rendering only; filtering never looks at this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has a color {} and is {}",
            self.name, self.color, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = Item::new("Apple", Size::Small, Color::Green);
        assert_eq!(item.name(), "Apple");
        assert_eq!(item.size(), Size::Small);
        assert_eq!(item.color(), Color::Green);
    }

    #[test]
    fn test_item_display() {
        let item = Item::new("Truck", Size::Large, Color::Red);
        assert_eq!(item.to_string(), "Truck has a color red and is large");
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("small".parse::<Size>().unwrap(), Size::Small);
        assert_eq!("YUGE".parse::<Size>().unwrap(), Size::Yuge);

        let err = "gigantic".parse::<Size>().unwrap_err();
        assert!(err.to_string().contains("unknown size 'gigantic'"));
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::Blue);

        let err = "mauve".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("unknown color 'mauve'"));
    }

    #[test]
    fn test_attribute_serde() {
        let json = r#"{"name":"Potter","size":"medium","color":"blue"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, Item::new("Potter", Size::Medium, Color::Blue));

        let round = serde_json::to_string(&item).unwrap();
        assert_eq!(round, json);
    }
}
