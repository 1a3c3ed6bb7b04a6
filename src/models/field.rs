//! The six WorkEntry fields and their two historical spellings.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Person,
    Task,
    TaskType,
    Time,
    Productivity,
    Date,
}

impl Field {
    /// Canonical order, also used for table and context projection.
    pub const ALL: [Field; 6] = [
        Field::Person,
        Field::Task,
        Field::TaskType,
        Field::Time,
        Field::Productivity,
        Field::Date,
    ];

    /// Key used by the current schema.
    pub fn canonical(&self) -> &'static str {
        match self {
            Field::Person => "person",
            Field::Task => "task",
            Field::TaskType => "task_type",
            Field::Time => "time",
            Field::Productivity => "productivity",
            Field::Date => "date",
        }
    }

    /// Key used by documents written with the earlier (Polish) schema.
    pub fn alternate(&self) -> &'static str {
        match self {
            Field::Person => "osoba",
            Field::Task => "zadanie",
            Field::TaskType => "typ_zadania",
            Field::Time => "czas",
            Field::Productivity => "produktywnosc",
            Field::Date => "data",
        }
    }
}
