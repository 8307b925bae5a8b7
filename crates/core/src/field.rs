use std::fmt;

/// One positional slot of a five-field schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// Fields in the order they appear in an interval.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value and step sub-patterns of a single field.
///
/// Both are bare alternations; [`FieldGrammar::expression`] wraps them in
/// non-capturing groups before combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGrammar {
    pub field: Field,
    pub value: &'static str,
    pub step: &'static str,
}

impl FieldGrammar {
    pub fn for_field(field: Field) -> Self {
        let (value, step) = match field {
            Field::Minute => ("[0-5]?[0-9]", "0?[1-9]|[1-5][0-9]"),
            Field::Hour => ("[01]?[0-9]|2[0-3]", "0?[1-9]|1[0-9]|2[0-3]"),
            Field::DayOfMonth => (
                r"(?:0?[1-9]|[12][0-9]|3[01])[LW]?|\?",
                "0?[1-9]|[12][0-9]|3[01]",
            ),
            Field::Month => (
                "0?[1-9]|1[012]|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec",
                "0?[1-9]|1[012]",
            ),
            Field::DayOfWeek => (
                r"(?:[0-7]|mon|tue|wed|thu|fri|sat|sun|\?)(?:L|#[1-5])?",
                "[1-7]",
            ),
        };

        Self { field, value, step }
    }

    /// Alternation accepted for this field: `*[/step]`, `value[/step]`, or a
    /// comma list of `value[-value[/step]]`.
    pub fn expression(&self) -> String {
        let value = format!("(?:{})", self.value);
        let step = format!("(?:/(?:{}))?", self.step);
        let range = format!("{value}(?:-{value}{step})?");

        format!(r"\*{step}|{value}{step}|{range}(?:,{range})*")
    }
}
