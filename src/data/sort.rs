use std::cmp::Ordering;
use std::fmt;

use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Table column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Brand,
    Model,
    BodyType,
    Commercialization,
    Appreciation,
    Reliability,
}

impl SortField {
    /// All fields in table-column order.
    pub const ALL: [SortField; 6] = [
        SortField::Brand,
        SortField::Model,
        SortField::BodyType,
        SortField::Commercialization,
        SortField::Appreciation,
        SortField::Reliability,
    ];

    /// Direction applied when a column is selected for the first time.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::Reliability => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Brand => "Marque",
            SortField::Model => "Modèle",
            SortField::BodyType => "Type",
            SortField::Commercialization => "Date",
            SortField::Appreciation => "Appréciation",
            SortField::Reliability => "Fiabilité",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The single active ordering of the vehicle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Reliability)
    }
}

impl SortSpec {
    /// Sort by `field` in its default direction.
    pub fn new(field: SortField) -> Self {
        Self {
            field,
            direction: field.default_direction(),
        }
    }

    /// Header-click behaviour: flip the direction when `field` is already
    /// active, otherwise switch to `field` with its default direction.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            *self = Self::new(field);
        }
    }

    /// Ascending comparison of two records on the active field, with the
    /// direction applied.
    pub fn compare(&self, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Brand => collate(&a.brand, &b.brand),
            SortField::Model => collate(&a.model, &b.model),
            SortField::BodyType => collate(&a.body_type, &b.body_type),
            SortField::Commercialization => {
                collate(&a.commercialization, &b.commercialization)
            }
            SortField::Appreciation => a.appreciation.ordinal().cmp(&b.appreciation.ordinal()),
            SortField::Reliability => a.reliability.total_cmp(&b.reliability),
        };
        self.direction.apply(ordering)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        write!(f, "{} {arrow}", self.field.label())
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Return `records` ordered by `spec`.  The sort is stable: records with equal
/// keys keep their relative input order in both directions.
pub fn sort_records<'a>(records: &[&'a VehicleRecord], spec: SortSpec) -> Vec<&'a VehicleRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

// ---------------------------------------------------------------------------
// Collation
// ---------------------------------------------------------------------------

/// Locale-style string comparison: accents and case are ignored at the first
/// level, then the raw text breaks ties so the order stays total.
///
/// `"Citroën"` sorts between `"Chevrolet"` and `"Cupra"`, `"alpine"` next to
/// `"Alpine"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ñ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            other => out.push(other),
        }
    }
    out
}
