use crate::models::{format_rupees, Property};

/// How many plots sit side by side
pub const COMPARISON_WIDTH: usize = 3;

/// Sections of the comparison table, in display order
pub const COMPARISON_SECTIONS: [(&str, &[Field]); 3] = [
    (
        "Basic Information",
        &[Field::Title, Field::Location, Field::Price, Field::Size, Field::Facing],
    ),
    ("Amenities", &[Field::Amenities]),
    ("Status", &[Field::Status]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Location,
    Price,
    Size,
    Facing,
    Amenities,
    Status,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Location => "Location",
            Field::Price => "Price",
            Field::Size => "Size",
            Field::Facing => "Facing",
            Field::Amenities => "Amenities",
            Field::Status => "Status",
        }
    }

    pub fn value(&self, property: &Property) -> String {
        match self {
            Field::Title => property.title.clone(),
            Field::Location => property.location.clone(),
            Field::Price => format_rupees(property.price),
            Field::Size => property.size.clone(),
            Field::Facing => property.facing.clone(),
            Field::Amenities => property.amenities.join(", "),
            Field::Status => property.status_label().to_string(),
        }
    }
}

/// Sliding window over the plots picked for comparison
#[derive(Debug, Clone)]
pub struct ComparisonWindow<'a> {
    properties: Vec<&'a Property>,
    start: usize,
}

impl<'a> ComparisonWindow<'a> {
    pub fn new(properties: Vec<&'a Property>) -> Self {
        Self { properties, start: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn visible(&self) -> &[&'a Property] {
        let end = (self.start + COMPARISON_WIDTH).min(self.properties.len());
        &self.properties[self.start..end]
    }

    pub fn can_next(&self) -> bool {
        self.start + COMPARISON_WIDTH < self.properties.len()
    }

    pub fn can_prev(&self) -> bool {
        self.start > 0
    }

    /// Shift one plot to the right; returns whether the window moved
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.start += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.start -= 1;
            true
        } else {
            false
        }
    }

    /// Text rows for the visible plots: a header per section, then one row
    /// per field with a cell per plot.
    pub fn rows(&self) -> Vec<(String, Vec<String>)> {
        let mut rows = Vec::new();
        for (section, fields) in COMPARISON_SECTIONS {
            rows.push((section.to_string(), Vec::new()));
            for field in fields {
                let cells: Vec<String> = self.visible().iter().map(|p| field.value(p)).collect();
                rows.push((field.label().to_string(), cells));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::seed_properties;

    fn visible_ids(window: &ComparisonWindow<'_>) -> Vec<String> {
        window.visible().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn pages_one_plot_at_a_time() {
        let properties = seed_properties();
        let mut window = ComparisonWindow::new(properties.iter().collect());

        assert_eq!(visible_ids(&window), ["prop-001", "prop-002", "prop-003"]);
        assert!(!window.can_prev());
        assert!(!window.prev());

        assert!(window.next());
        assert_eq!(visible_ids(&window), ["prop-002", "prop-003", "prop-004"]);
        assert!(window.next());
        assert!(window.next());
        assert_eq!(visible_ids(&window), ["prop-004", "prop-005", "prop-006"]);
        assert!(!window.can_next());
        assert!(!window.next());
        assert_eq!(window.start(), 3);

        assert!(window.prev());
        assert_eq!(window.start(), 2);
    }

    #[test]
    fn short_lists_do_not_page() {
        let properties = seed_properties();
        let mut window = ComparisonWindow::new(properties.iter().take(2).collect());
        assert_eq!(window.visible().len(), 2);
        assert!(!window.next());

        let empty = ComparisonWindow::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.visible().is_empty());
    }

    #[test]
    fn rows_cover_every_section() {
        let mut properties = seed_properties();
        properties[1].booked_at = Some(chrono::Utc::now());
        let window = ComparisonWindow::new(properties.iter().collect());
        let rows = window.rows();

        // 3 section headers + 7 fields
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].0, "Basic Information");
        let price = rows.iter().find(|(label, _)| label == "Price").unwrap();
        assert_eq!(price.1, ["₹45,00,000", "₹52,00,000", "₹78,00,000"]);
        let status = rows
            .iter()
            .find(|(label, cells)| label == "Status" && !cells.is_empty())
            .unwrap();
        assert_eq!(status.1, ["Available", "Booked", "Available"]);
    }
}
