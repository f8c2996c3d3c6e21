use std::{fmt, str::FromStr};

use crate::foundation::error::TweenlineError;

/// Geometric family of a shape. Point generation for each kind lives with the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Plus,
}

impl FromStr for ShapeKind {
    type Err = TweenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "ellipse" | "circle" | "oval" => Ok(Self::Ellipse),
            "plus" => Ok(Self::Plus),
            _ => Err(TweenlineError::UnsupportedShapeKind(s.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Plus => "plus",
        })
    }
}

/// Stable handle for a declared shape. Never reused within one animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(transparent)]
pub struct ShapeId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Shape {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shape.rs"]
mod tests;
