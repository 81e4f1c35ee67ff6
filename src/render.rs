//! Terminal rendering for the menu page.

use std::io;

use smallvec::SmallVec;
use tabled::{
    Table,
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Color, Style, Theme, object::Rows},
};
use thiserror::Error;

use crate::{
    catalog::visible::VisibleMenu, filters::FilterKind, payload::Nutrition,
    session::FilterButton,
};

/// Errors that can occur while writing output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write the page header line.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_header(mut out: impl io::Write, text: &str) -> Result<(), RenderError> {
    writeln!(out, "{text}")?;

    Ok(())
}

/// Write the filter buttons as a table, active filters marked.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_filter_buttons(
    mut out: impl io::Write,
    buttons: &[FilterButton<'_>],
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Filter", "Key", "Type", "Icon"]);

    for button in buttons {
        let kind = match button.kind {
            FilterKind::Whitelist => "only",
            FilterKind::Blacklist => "hide",
        };

        builder.push_record([
            if button.active { "●" } else { "○" },
            button.label.as_str(),
            button.key,
            kind,
            button.icon,
        ]);
    }

    writeln!(out, "\n{}", finish_table(builder, &[]))?;

    Ok(())
}

/// Write the visible menu, one section per category.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_menu(mut out: impl io::Write, menu: &VisibleMenu<'_>) -> Result<(), RenderError> {
    let mut builder = Builder::default();
    let mut category_rows: SmallVec<[usize; 16]> = SmallVec::new();
    let mut row = 1;

    builder.push_record(["Item", "Tags"]);

    for category in menu.categories() {
        category_rows.push(row);
        builder.push_record([format!("-- {} --", category.name), String::new()]);
        row += 1;

        for item in &category.items {
            builder.push_record([item.name().to_string(), item.tags().join("\n")]);
            row += 1;
        }
    }

    writeln!(out, "\n{}", finish_table(builder, &category_rows))?;
    writeln!(
        out,
        "{} items in {} categories",
        menu.item_count(),
        menu.categories().len()
    )?;

    Ok(())
}

/// Write nutrition facts for every visible item that has them.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_nutrition(
    mut out: impl io::Write,
    menu: &VisibleMenu<'_>,
    nutrition: &Nutrition,
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Nutrition"]);

    for item in menu.categories().iter().flat_map(|category| &category.items) {
        let facts = nutrition.facts(item.name());

        if !facts.is_empty() {
            builder.push_record([item.name().to_string(), facts.join("\n")]);
        }
    }

    writeln!(out, "\n{}", finish_table(builder, &[]))?;

    Ok(())
}

fn finish_table(builder: Builder, separator_rows: &[usize]) -> Table {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in separator_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    table
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        catalog::{
            Catalog, Category, MenuItem,
            visible::{EmptyCategories, compute_visible_items, compute_visible_items_with},
        },
        filters::FilterState,
    };

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new([
            Category::new(
                "Grill",
                [
                    MenuItem::new("Burger", &["icons/milk.png"]),
                    MenuItem::new("Salad", &["icons/veggie.png"]),
                ],
            ),
            Category::new("Bakery", [MenuItem::new("Muffin", &["icons/milk.png"])]),
        ])
    }

    #[test]
    fn write_header_prints_text() -> TestResult {
        let mut out = Vec::new();

        write_header(&mut out, "Dining Hall - Lunch")?;

        assert_eq!(String::from_utf8(out)?, "Dining Hall - Lunch\n");

        Ok(())
    }

    #[test]
    fn write_menu_lists_categories_and_items() -> TestResult {
        let catalog = catalog();
        let visible = compute_visible_items(&catalog, &FilterState::new());
        let mut out = Vec::new();

        write_menu(&mut out, &visible)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("-- Grill --"));
        assert!(text.contains("-- Bakery --"));
        assert!(text.contains("Salad"));
        assert!(text.contains("icons/veggie.png"));
        assert!(text.contains("3 items in 2 categories"));

        Ok(())
    }

    #[test]
    fn write_menu_keeps_or_drops_empty_category_headers() -> TestResult {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.toggle("icons/milk.png");

        let mut kept = Vec::new();
        write_menu(
            &mut kept,
            &compute_visible_items_with(&catalog, &state, EmptyCategories::Keep),
        )?;

        let mut omitted = Vec::new();
        write_menu(
            &mut omitted,
            &compute_visible_items_with(&catalog, &state, EmptyCategories::Omit),
        )?;

        let kept = String::from_utf8(kept)?;
        let omitted = String::from_utf8(omitted)?;

        assert!(kept.contains("-- Bakery --"));
        assert!(!kept.contains("Muffin"));
        assert!(!omitted.contains("-- Bakery --"));
        assert!(omitted.contains("1 items in 1 categories"));

        Ok(())
    }

    #[test]
    fn write_filter_buttons_marks_active_filters() -> TestResult {
        let buttons = [FilterButton {
            key: "Veggie",
            label: "VEGETARIAN".to_string(),
            icon: "icons/veggie.png",
            kind: FilterKind::Whitelist,
            active: true,
        }];
        let mut out = Vec::new();

        write_filter_buttons(&mut out, &buttons)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("●"));
        assert!(text.contains("VEGETARIAN"));
        assert!(text.contains("only"));

        Ok(())
    }

    #[test]
    fn write_nutrition_skips_items_without_facts() -> TestResult {
        let catalog = catalog();
        let visible = compute_visible_items(&catalog, &FilterState::new());
        let nutrition: Nutrition = serde_json::from_str(
            r#"{"Burger": ["Serving Size 1 each", "Calories 540"]}"#,
        )?;
        let mut out = Vec::new();

        write_nutrition(&mut out, &visible, &nutrition)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Calories 540"));
        assert!(!text.contains("Muffin"));

        Ok(())
    }
}
