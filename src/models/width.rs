//! Width classes assigned to layout cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sizing policy for a single layout cell.
///
/// Widths are resolved per cell after composition and are never stored on
/// the action itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KeyboardLayoutItemWidth {
    /// Shares the remaining space equally with sibling input cells
    Input,
    /// Fills whatever is left of the row
    Available,
    /// Fraction of the row width (0.0 to 1.0)
    Percentage(f64),
    /// Fixed width in points
    Static(f64),
}

impl KeyboardLayoutItemWidth {
    /// Checks that fractional and fixed widths are within range.
    pub fn validate(&self) -> anyhow::Result<()> {
        match *self {
            Self::Percentage(p) if !(0.0..=1.0).contains(&p) => {
                anyhow::bail!("Percentage width must be between 0.0 and 1.0, got {p}")
            }
            Self::Static(points) if points <= 0.0 || !points.is_finite() => {
                anyhow::bail!("Static width must be a positive number of points, got {points}")
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for KeyboardLayoutItemWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Available => write!(f, "available"),
            Self::Percentage(p) => write!(f, "{:.1}%", p * 100.0),
            Self::Static(points) => write!(f, "{points}pt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        assert!(KeyboardLayoutItemWidth::Input.validate().is_ok());
        assert!(KeyboardLayoutItemWidth::Percentage(0.14).validate().is_ok());
        assert!(KeyboardLayoutItemWidth::Percentage(1.0).validate().is_ok());
        assert!(KeyboardLayoutItemWidth::Percentage(1.2).validate().is_err());
        assert!(KeyboardLayoutItemWidth::Percentage(-0.1).validate().is_err());
        assert!(KeyboardLayoutItemWidth::Static(44.0).validate().is_ok());
        assert!(KeyboardLayoutItemWidth::Static(0.0).validate().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&KeyboardLayoutItemWidth::Percentage(0.25)).unwrap();
        assert_eq!(json, r#"{"kind":"percentage","value":0.25}"#);

        let json = serde_json::to_string(&KeyboardLayoutItemWidth::Input).unwrap();
        assert_eq!(json, r#"{"kind":"input"}"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyboardLayoutItemWidth::Available.to_string(), "available");
        assert_eq!(KeyboardLayoutItemWidth::Percentage(0.25).to_string(), "25.0%");
        assert_eq!(KeyboardLayoutItemWidth::Percentage(0.195).to_string(), "19.5%");
        assert_eq!(KeyboardLayoutItemWidth::Static(40.0).to_string(), "40pt");
    }
}
