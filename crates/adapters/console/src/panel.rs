//! Panel state — last text and style written to each field.

use std::collections::BTreeMap;
use std::fmt;

use terrarium_domain::view::{Cell, Field, Style};

const EMPTY: &str = "-";

/// What one field currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelCell {
    pub text: String,
    pub style: Style,
}

/// The nine dashboard fields as last written.
///
/// Fields that were never written render as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    cells: BTreeMap<Field, PanelCell>,
}

impl Panel {
    pub fn set_text(&mut self, field: Field, text: &str) {
        let cell = self.cells.entry(field).or_default();
        text.clone_into(&mut cell.text);
    }

    pub fn set_style(&mut self, field: Field, style: Style) {
        self.cells.entry(field).or_default().style = style;
    }

    /// Write a whole view. Cells without a style keep their current one.
    pub fn apply(&mut self, cells: &[Cell<'_>]) {
        for cell in cells {
            self.set_text(cell.field, cell.text);
            if let Some(style) = cell.style {
                self.set_style(cell.field, style);
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&PanelCell> {
        self.cells.get(&field)
    }

    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).map(|cell| cell.text.as_str())
    }

    #[must_use]
    pub fn style(&self, field: Field) -> Style {
        self.get(field).map(|cell| cell.style).unwrap_or_default()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            let (text, class) = match self.get(field) {
                Some(cell) => (cell.text.as_str(), cell.style.class_name()),
                None => (EMPTY, ""),
            };
            write!(f, "{:<12} {text}", field.caption())?;
            if !class.is_empty() {
                write!(f, " [{class}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
