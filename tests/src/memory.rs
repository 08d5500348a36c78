use converge_core::driver::{Connection, Row, Value};
use converge_core::{err, Result};

use indexmap::IndexMap;

/// An in-memory stand-in for a MariaDB database.
///
/// Holds table structure, answers the engine's metadata queries from it,
/// and interprets the engine's DDL to mutate it. Every executed statement
/// is kept in order so tests can assert on the exact SQL stream.
///
/// Tests simulate drift by editing the public state directly between
/// reconciliation runs.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    pub tables: IndexMap<String, TableState>,
    executed: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub columns: Vec<ColumnState>,
    pub indexes: Vec<IndexState>,
    pub foreign_keys: Vec<ForeignKeyState>,
}

#[derive(Debug, Clone)]
pub struct ColumnState {
    pub name: String,
    pub ty: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub extra: String,
}

#[derive(Debug, Clone)]
pub struct IndexState {
    pub name: String,
    pub column: String,
    pub unique: bool,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyState {
    pub name: String,
    pub column: String,
    pub table: String,
    pub target: String,
    pub on_delete: String,
    pub on_update: String,
}

impl MemoryConnection {
    pub fn new() -> MemoryConnection {
        MemoryConnection::default()
    }

    /// Every statement executed so far, in order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Drains the statement log, leaving it empty for the next run.
    pub fn take_executed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.executed)
    }

    pub fn table(&self, name: &str) -> Option<&TableState> {
        self.tables.get(name)
    }

    pub fn table_mut(&mut self, name: &str) -> &mut TableState {
        self.tables
            .get_mut(name)
            .unwrap_or_else(|| panic!("no table `{name}` in memory connection"))
    }

    fn apply_ddl(&mut self, sql: &str) -> Result<()> {
        let sql = sql.strip_suffix(';').unwrap_or(sql);

        if let Some(rest) = sql.strip_prefix("CREATE TABLE ") {
            let names = backtick_names(rest);
            let [table, primary_key, ..] = names.as_slice() else {
                return Err(err!("malformed CREATE TABLE `{}`", sql));
            };
            let mut state = TableState::default();
            state.columns.push(ColumnState {
                name: primary_key.clone(),
                ty: "int(10) unsigned".to_string(),
                nullable: false,
                default: None,
                extra: "auto_increment".to_string(),
            });
            self.tables.insert(table.clone(), state);
            return Ok(());
        }

        if let Some(rest) = sql.strip_prefix("ALTER TABLE ") {
            let (table, rest) = take_backtick(rest)?;
            return self.apply_alter(&table, rest.trim_start());
        }

        if let Some(rest) = sql.strip_prefix("CREATE UNIQUE INDEX ") {
            return self.apply_create_index(rest, true);
        }
        if let Some(rest) = sql.strip_prefix("CREATE INDEX ") {
            return self.apply_create_index(rest, false);
        }

        if let Some(rest) = sql.strip_prefix("DROP INDEX ") {
            let names = backtick_names(rest);
            let [index, table] = names.as_slice() else {
                return Err(err!("malformed DROP INDEX `{}`", sql));
            };
            let index = index.clone();
            self.table_mut(table).indexes.retain(|i| i.name != index);
            return Ok(());
        }

        Err(err!("memory connection cannot apply `{}`", sql))
    }

    fn apply_alter(&mut self, table: &str, rest: &str) -> Result<()> {
        if let Some(def) = rest.strip_prefix("ADD COLUMN ") {
            let (column, after) = parse_column_def(def)?;
            let state = self.table_mut(table);
            let position = match &after {
                Some(previous) => match state.position(previous) {
                    Some(at) => at + 1,
                    None => state.columns.len(),
                },
                None => state.columns.len(),
            };
            state.columns.insert(position, column);
            return Ok(());
        }

        if let Some(def) = rest.strip_prefix("MODIFY COLUMN ") {
            let (column, after) = parse_column_def(def)?;
            let state = self.table_mut(table);
            let Some(at) = state.position(&column.name) else {
                return Err(err!("cannot modify unknown column `{}`", column.name));
            };
            state.columns.remove(at);
            let position = match &after {
                Some(previous) => match state.position(previous) {
                    Some(at) => at + 1,
                    None => state.columns.len(),
                },
                None => at,
            };
            state.columns.insert(position, column);
            return Ok(());
        }

        if let Some(rest) = rest.strip_prefix("DROP COLUMN ") {
            let (column, _) = take_backtick(rest)?;
            let state = self.table_mut(table);
            state.columns.retain(|c| c.name != column);
            // MariaDB drops the single-column structures with it.
            state.indexes.retain(|i| i.column != column);
            state.foreign_keys.retain(|fk| fk.column != column);
            return Ok(());
        }

        if let Some(rest) = rest.strip_prefix("RENAME TO ") {
            let (to, _) = take_backtick(rest)?;
            let Some(state) = self.tables.shift_remove(table) else {
                return Err(err!("cannot rename unknown table `{}`", table));
            };
            self.tables.insert(to, state);
            return Ok(());
        }

        if let Some(rest) = rest.strip_prefix("RENAME COLUMN ") {
            let (from, rest) = take_backtick(rest)?;
            let rest = rest
                .trim_start()
                .strip_prefix("TO ")
                .ok_or_else(|| err!("malformed RENAME COLUMN on `{}`", table))?;
            let (to, _) = take_backtick(rest)?;
            let state = self.table_mut(table);
            let Some(at) = state.position(&from) else {
                return Err(err!("cannot rename unknown column `{}`", from));
            };
            state.columns[at].name = to.clone();
            for index in &mut state.indexes {
                if index.column == from {
                    index.column = to.clone();
                }
            }
            for fk in &mut state.foreign_keys {
                if fk.column == from {
                    fk.column = to.clone();
                }
            }
            return Ok(());
        }

        if rest.starts_with("ADD CONSTRAINT ") {
            let names = backtick_names(rest);
            let [name, column, ref_table, ref_column] = names.as_slice() else {
                return Err(err!("malformed ADD CONSTRAINT on `{}`", table));
            };
            let delete_at = rest
                .find(" ON DELETE ")
                .ok_or_else(|| err!("constraint on `{}` is missing ON DELETE", table))?;
            let update_at = rest
                .find(" ON UPDATE ")
                .ok_or_else(|| err!("constraint on `{}` is missing ON UPDATE", table))?;
            let fk = ForeignKeyState {
                name: name.clone(),
                column: column.clone(),
                table: ref_table.clone(),
                target: ref_column.clone(),
                on_delete: rest[delete_at + " ON DELETE ".len()..update_at].to_string(),
                on_update: rest[update_at + " ON UPDATE ".len()..].to_string(),
            };
            self.table_mut(table).foreign_keys.push(fk);
            return Ok(());
        }

        if let Some(rest) = rest.strip_prefix("DROP FOREIGN KEY ") {
            let (name, _) = take_backtick(rest)?;
            self.table_mut(table).foreign_keys.retain(|fk| fk.name != name);
            return Ok(());
        }

        Err(err!("memory connection cannot alter `{}` with `{}`", table, rest))
    }

    fn apply_create_index(&mut self, rest: &str, unique: bool) -> Result<()> {
        let names = backtick_names(rest);
        let [index, table, column] = names.as_slice() else {
            return Err(err!("malformed CREATE INDEX `{}`", rest));
        };
        let index = IndexState {
            name: index.clone(),
            column: column.clone(),
            unique,
        };
        self.table_mut(table).indexes.push(index);
        Ok(())
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        if sql.starts_with("SELECT `table_name` FROM `information_schema`.`tables`") {
            let name = param_str(params, 0)?;
            if !self.tables.contains_key(&name) {
                return Ok(vec![]);
            }
            let mut row = Row::new();
            row.push("table_name", Value::Str(name));
            return Ok(vec![row]);
        }

        if let Some(rest) = sql.strip_prefix("SHOW COLUMNS FROM ") {
            let (table, rest) = take_backtick(rest)?;
            let state = self.existing(&table)?;
            if rest.trim_start().starts_with("WHERE `Field` = ?") {
                let field = param_str(params, 0)?;
                return Ok(state
                    .columns
                    .iter()
                    .filter(|column| column.name == field)
                    .map(column_row)
                    .collect());
            }
            return Ok(state.columns.iter().map(column_row).collect());
        }

        if let Some(rest) = sql.strip_prefix("SHOW INDEX FROM ") {
            let (table, _) = take_backtick(rest)?;
            let state = self.existing(&table)?;
            let name = param_str(params, 0)?;
            return Ok(state
                .indexes
                .iter()
                .filter(|index| index.name == name)
                .map(|index| index_row(&table, index))
                .collect());
        }

        if let Some(rest) = sql.strip_prefix("SHOW CREATE TABLE ") {
            let (table, _) = take_backtick(rest)?;
            let state = self.existing(&table)?;
            let mut row = Row::new();
            row.push("Table", Value::Str(table.clone()));
            row.push("Create Table", Value::Str(render_create_table(&table, state)));
            return Ok(vec![row]);
        }

        Err(err!("memory connection cannot answer `{}`", sql))
    }

    fn existing(&self, table: &str) -> Result<&TableState> {
        self.tables
            .get(table)
            .ok_or_else(|| err!("table `{}` does not exist", table))
    }
}

impl TableState {
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == column)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnState> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> &mut ColumnState {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no column `{name}` in memory table"))
    }

    /// The live column order, for position assertions.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[async_trait::async_trait]
impl Connection for MemoryConnection {
    async fn execute(&mut self, sql: &str, _params: Vec<Value>) -> Result<u64> {
        self.executed.push(sql.to_string());
        self.apply_ddl(sql)?;
        Ok(0)
    }

    async fn fetch_one(&mut self, sql: &str, params: Vec<Value>) -> Result<Option<Row>> {
        Ok(self.query(sql, &params)?.into_iter().next())
    }

    async fn fetch_all(&mut self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>> {
        self.query(sql, &params)
    }
}

fn column_row(column: &ColumnState) -> Row {
    let mut row = Row::new();
    row.push("Field", Value::Str(column.name.clone()));
    row.push("Type", Value::Str(column.ty.clone()));
    row.push(
        "Null",
        Value::Str(if column.nullable { "YES" } else { "NO" }.to_string()),
    );
    row.push("Key", Value::Str(String::new()));
    row.push(
        "Default",
        match &column.default {
            Some(value) => Value::Str(value.clone()),
            None => Value::Null,
        },
    );
    row.push("Extra", Value::Str(column.extra.clone()));
    row
}

fn index_row(table: &str, index: &IndexState) -> Row {
    let mut row = Row::new();
    row.push("Table", Value::Str(table.to_string()));
    row.push("Non_unique", Value::Int(if index.unique { 0 } else { 1 }));
    row.push("Key_name", Value::Str(index.name.clone()));
    row.push("Column_name", Value::Str(index.column.clone()));
    row
}

fn render_create_table(name: &str, state: &TableState) -> String {
    let mut body = vec![];
    for column in &state.columns {
        let mut line = format!("  `{}` {}", column.name, column.ty);
        if !column.nullable {
            line.push_str(" NOT NULL");
        }
        if let Some(default) = &column.default {
            line.push_str(&format!(" DEFAULT {default}"));
        }
        if !column.extra.is_empty() {
            line.push_str(&format!(" {}", column.extra.to_uppercase()));
        }
        body.push(line);
    }
    for column in &state.columns {
        if column.extra == "auto_increment" {
            body.push(format!("  PRIMARY KEY (`{}`)", column.name));
        }
    }
    for index in &state.indexes {
        let kind = if index.unique { "UNIQUE KEY" } else { "KEY" };
        body.push(format!("  {} `{}` (`{}`)", kind, index.name, index.column));
    }
    for fk in &state.foreign_keys {
        body.push(format!(
            "  CONSTRAINT `{}` FOREIGN KEY (`{}`) REFERENCES `{}` (`{}`) ON DELETE {} ON UPDATE {}",
            fk.name, fk.column, fk.table, fk.target, fk.on_delete, fk.on_update
        ));
    }
    format!(
        "CREATE TABLE `{}` (\n{}\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4",
        name,
        body.join(",\n")
    )
}

fn parse_column_def(def: &str) -> Result<(ColumnState, Option<String>)> {
    let (name, rest) = take_backtick(def)?;
    let mut rest = rest.trim().to_string();

    let mut after = None;
    if let Some(at) = rest.find(" AFTER `") {
        let tail = &rest[at + " AFTER `".len()..];
        let end = tail
            .find('`')
            .ok_or_else(|| err!("unterminated AFTER in `{}`", def))?;
        after = Some(tail[..end].to_string());
        rest.truncate(at);
    }

    let mut extra = String::new();
    if let Some(stripped) = rest.strip_suffix(" ON UPDATE current_timestamp()") {
        rest = stripped.to_string();
        extra = "on update current_timestamp()".to_string();
    }

    let mut nullable = true;
    if let Some(stripped) = rest.strip_suffix(" NOT NULL") {
        rest = stripped.to_string();
        nullable = false;
    }

    let (ty, default) = match rest.find(" DEFAULT ") {
        Some(at) => {
            let value = &rest[at + " DEFAULT ".len()..];
            let default = if value == "NULL" {
                None
            } else if let Some(quoted) = value.strip_prefix('\'') {
                let inner = quoted
                    .strip_suffix('\'')
                    .ok_or_else(|| err!("unterminated literal in `{}`", def))?;
                Some(inner.replace("''", "'"))
            } else {
                Some(value.to_string())
            };
            (rest[..at].to_string(), default)
        }
        None => (rest.clone(), None),
    };

    Ok((
        ColumnState {
            name,
            ty,
            nullable,
            default,
            extra,
        },
        after,
    ))
}

fn param_str(params: &[Value], at: usize) -> Result<String> {
    match params.get(at) {
        Some(Value::Str(value)) => Ok(value.clone()),
        other => Err(err!("expected a string parameter at {}; got {:?}", at, other)),
    }
}

fn take_backtick(input: &str) -> Result<(String, &str)> {
    let rest = input
        .strip_prefix('`')
        .ok_or_else(|| err!("expected a quoted identifier in `{}`", input))?;
    let end = rest
        .find('`')
        .ok_or_else(|| err!("unterminated identifier in `{}`", input))?;
    Ok((rest[..end].to_string(), &rest[end + 1..]))
}

fn backtick_names(input: &str) -> Vec<String> {
    let mut names = vec![];
    let mut rest = input;
    while let Some(start) = rest.find('`') {
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('`') else { break };
        names.push(tail[..end].to_string());
        rest = &tail[end + 1..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_string_parameters() {
        let params = vec![Value::Str("users".to_string()), Value::Int(3)];

        assert_eq!(param_str(&params, 0).unwrap(), "users");

        let err = param_str(&params, 1).unwrap_err();
        assert!(err.to_string().contains("expected a string parameter"));

        let err = param_str(&params, 2).unwrap_err();
        assert!(err.to_string().contains("expected a string parameter"));
    }
}
