/// Referential action the database applies when a referenced row changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// Reject the parent change while referencing rows exist.
    Restrict,
    /// Propagate the parent change to referencing rows.
    Cascade,
    /// Null out the referencing column.
    SetNull,
    /// Leave handling to the engine default.
    NoAction,
}

impl ForeignKeyAction {
    /// The SQL keyword for this action, as spelled in constraint clauses.
    pub fn as_sql(self) -> &'static str {
        match self {
            ForeignKeyAction::Restrict => "RESTRICT",
            ForeignKeyAction::Cascade => "CASCADE",
            ForeignKeyAction::SetNull => "SET NULL",
            ForeignKeyAction::NoAction => "NO ACTION",
        }
    }
}
