//! Input row resolution.
//!
//! Selects the raw character rows for the current keyboard type. Rows carry
//! character glyphs only; chrome is added later by the action composer.

use crate::models::input_set::row;
use crate::models::{GridInputSet, InputSet, InputSetRows, KeyboardContext, KeyboardType};

/// Currency symbols shown on the symbolic keyboard, minus the locale's own.
const CURRENCIES: [&str; 4] = ["$", "€", "£", "¥"];

/// Source of the locale-specific character rows.
pub trait InputSetProvider {
    /// Letter rows, cased for the context.
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet;

    /// Digit and punctuation rows.
    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet;

    /// Symbol rows.
    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet;
}

/// iPhone-style QWERTY, numeric and symbolic rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInputSetProvider;

impl InputSetProvider for StandardInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        let uppercased = match &context.keyboard_type {
            KeyboardType::Alphabetic(case) => case.is_uppercased(),
            _ => false,
        };
        let rows = ["qwertyuiop", "asdfghjkl", "zxcvbnm"]
            .iter()
            .map(|chars| {
                if uppercased {
                    row(&chars.to_uppercase())
                } else {
                    row(chars)
                }
            })
            .collect();
        InputSet::new(rows)
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        let currency = context.locale.primary_currency();
        InputSet::new(vec![
            row("1234567890"),
            row(&format!("-/:;(){currency}&@\"")),
            row(".,?!'"),
        ])
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        let primary = context.locale.primary_currency();
        let currencies: String = CURRENCIES
            .iter()
            .filter(|currency| **currency != primary)
            .copied()
            .collect();
        InputSet::new(vec![
            row("[]{}#%^*+="),
            row(&format!("_\\|~<>{currencies}•")),
            row(".,?!'"),
        ])
    }
}

/// Resolves the raw input rows for the context.
///
/// Keyboard types without rows of their own (emojis, unknown custom types)
/// resolve to no rows; the host composes those entirely on its own.
pub fn resolve_input_rows(
    provider: &impl InputSetProvider,
    context: &KeyboardContext,
) -> InputSetRows {
    match &context.keyboard_type {
        KeyboardType::Alphabetic(_) => provider.alphabetic_input_set(context).rows,
        KeyboardType::Numeric => provider.numeric_input_set(context).rows,
        KeyboardType::Symbolic => provider.symbolic_input_set(context).rows,
        KeyboardType::Custom(_) if context.is_grid_view_keyboard_type() => {
            GridInputSet::number_grid().rows
        }
        KeyboardType::Custom(_) | KeyboardType::Emojis => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeyboardCase, KeyboardLocale};

    fn resolve(context: &KeyboardContext) -> InputSetRows {
        resolve_input_rows(&StandardInputSetProvider, context)
    }

    #[test]
    fn test_alphabetic_rows() {
        let rows = resolve(&KeyboardContext::new(KeyboardType::Alphabetic(
            KeyboardCase::Lowercased,
        )));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[0][0], "q");
        assert_eq!(rows[2], row("zxcvbnm"));
    }

    #[test]
    fn test_alphabetic_rows_follow_case() {
        let rows = resolve(&KeyboardContext::new(KeyboardType::Alphabetic(
            KeyboardCase::CapsLocked,
        )));
        assert_eq!(rows[1], row("ASDFGHJKL"));

        let rows = resolve(&KeyboardContext::new(KeyboardType::Alphabetic(
            KeyboardCase::Auto,
        )));
        assert_eq!(rows[1], row("asdfghjkl"));
    }

    #[test]
    fn test_numeric_rows_use_locale_currency() {
        let context = KeyboardContext::new(KeyboardType::Numeric);
        let rows = resolve(&context);
        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains(&"$".to_string()));

        let rows = resolve(&context.with_locale(KeyboardLocale::ChineseSimplified));
        assert!(rows[1].contains(&"¥".to_string()));
        assert!(!rows[1].contains(&"$".to_string()));
    }

    #[test]
    fn test_symbolic_rows_list_other_currencies() {
        let context =
            KeyboardContext::new(KeyboardType::Symbolic).with_locale(KeyboardLocale::EnglishGb);
        let rows = resolve(&context);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].len(), 10);
        assert!(!rows[1].contains(&"£".to_string()));
        for currency in ["$", "€", "¥"] {
            assert!(rows[1].contains(&currency.to_string()));
        }
    }

    #[test]
    fn test_number_grid_rows_ignore_locale() {
        let english = resolve(&KeyboardContext::new(KeyboardType::number_grid()));
        let chinese = resolve(
            &KeyboardContext::new(KeyboardType::number_grid())
                .with_locale(KeyboardLocale::ChineseSimplified),
        );
        assert_eq!(english.len(), 4);
        assert_eq!(english, chinese);
        assert_eq!(english, GridInputSet::number_grid().rows);
    }

    #[test]
    fn test_unhandled_types_resolve_to_no_rows() {
        assert!(resolve(&KeyboardContext::new(KeyboardType::Emojis)).is_empty());
        assert!(resolve(&KeyboardContext::new(KeyboardType::Custom("Stroke".into()))).is_empty());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let context = KeyboardContext::new(KeyboardType::Symbolic);
        assert_eq!(resolve(&context), resolve(&context));
    }
}
