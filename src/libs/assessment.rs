//! The self-assessment grid.
//!
//! The grid has a header row, two marker rows and a row of smileys between
//! them. Each marker row holds a single arrow that points at one of the five
//! smileys:
//!
//! ```text
//! Selbsteinschätzung
//! Qualität des Eintrags                 .           :arrow_double_down:  .           .
//!                                       :laughing:  :smiley:             ...
//! Effektivität in der Berichtsperiode   .           .                    .           :arrow_double_up:
//! ```
//!
//! All rows are normalized to the seven columns of the header row.

use super::error::LogbookError;
use super::table::MarkdownTable;

pub const COLUMNS: usize = 7;
pub const POSITIONS: std::ops::RangeInclusive<i64> = 1..=5;

pub const TITLE: &str = "Selbsteinschätzung";
pub const SMILEYS: [&str; 5] = [":laughing:", ":smiley:", ":neutral_face:", ":worried:", ":tired_face:"];

const SMILEY_ROW: usize = 2;

/// A rated aspect of the week, one per marker row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Quality,
    Effectiveness,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Quality, Category::Effectiveness];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Quality => "Qualität des Eintrags",
            Category::Effectiveness => "Effektivität in der Berichtsperiode",
        }
    }

    pub fn row(&self) -> usize {
        match self {
            Category::Quality => 1,
            Category::Effectiveness => 3,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Category::Quality => ":arrow_double_down:",
            Category::Effectiveness => ":arrow_double_up:",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentTable {
    grid: [[String; COLUMNS]; 4],
}

impl Default for AssessmentTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentTable {
    pub fn new() -> Self {
        let mut grid: [[String; COLUMNS]; 4] = Default::default();
        grid[0][0] = TITLE.to_string();
        for category in Category::ALL {
            grid[category.row()][0] = category.label().to_string();
        }
        for (i, smiley) in SMILEYS.iter().enumerate() {
            grid[SMILEY_ROW][i + 1] = smiley.to_string();
        }
        Self { grid }
    }

    /// Places the category's marker at `position` (1 to 5).
    ///
    /// Any marker previously set in the row is cleared.
    pub fn mark(&mut self, category: Category, position: i64) -> Result<(), LogbookError> {
        if !POSITIONS.contains(&position) {
            return Err(LogbookError::PositionOutOfRange(position));
        }
        let row = &mut self.grid[category.row()];
        for cell in row.iter_mut().skip(1) {
            cell.clear();
        }
        row[position as usize] = category.marker().to_string();
        Ok(())
    }

    /// Parses raw user input and marks the row with it.
    pub fn mark_input(&mut self, category: Category, input: &str) -> Result<(), LogbookError> {
        let position = input.trim().parse::<i64>().map_err(|_| LogbookError::NotANumber(input.trim().to_string()))?;
        self.mark(category, position)
    }

    /// The marked position of a category, if any.
    pub fn position(&self, category: Category) -> Option<usize> {
        self.grid[category.row()].iter().skip(1).position(|cell| !cell.is_empty()).map(|i| i + 1)
    }

    pub fn row(&self, category: Category) -> &[String] {
        &self.grid[category.row()]
    }

    pub fn to_table(&self) -> MarkdownTable {
        MarkdownTable::from_rows(self.grid.iter().map(|row| row.to_vec()).collect())
    }

    pub fn render(&self) -> String {
        self.to_table().render()
    }
}
