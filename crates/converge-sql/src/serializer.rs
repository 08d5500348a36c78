mod ident;
pub use ident::quote_identifier;

use crate::stmt::{
    AddColumn, AddForeignKey, CreateIndex, CreateTable, DropColumn, DropForeignKey, DropIndex,
    ModifyColumn, RenameColumn, RenameTable, Statement,
};

use converge_core::schema::{Column, CURRENT_TIMESTAMP};
use converge_core::Result;

/// Serializes a statement to a SQL string in the MySQL family dialect.
#[derive(Debug, Default)]
pub struct Serializer;

impl Serializer {
    /// Creates a serializer for the MySQL family dialect.
    pub fn mysql() -> Serializer {
        Serializer
    }

    /// Serializes a statement to its final SQL text.
    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = match stmt {
            Statement::AddColumn(stmt) => self.add_column(stmt)?,
            Statement::AddForeignKey(stmt) => self.add_foreign_key(stmt)?,
            Statement::CreateIndex(stmt) => self.create_index(stmt)?,
            Statement::CreateTable(stmt) => self.create_table(stmt)?,
            Statement::DropColumn(stmt) => self.drop_column(stmt)?,
            Statement::DropForeignKey(stmt) => self.drop_foreign_key(stmt)?,
            Statement::DropIndex(stmt) => self.drop_index(stmt)?,
            Statement::ModifyColumn(stmt) => self.modify_column(stmt)?,
            Statement::RenameColumn(stmt) => self.rename_column(stmt)?,
            Statement::RenameTable(stmt) => self.rename_table(stmt)?,
        };
        ret.push(';');
        Ok(ret)
    }

    fn create_table(&self, stmt: &CreateTable) -> Result<String> {
        let table = quote_identifier(&stmt.name)?;
        let pk = quote_identifier(&stmt.primary_key.name)?;
        Ok(format!(
            "CREATE TABLE {} ({} {} NOT NULL AUTO_INCREMENT, PRIMARY KEY ({}))",
            table,
            pk,
            stmt.primary_key.sql_type(),
            pk
        ))
    }

    fn add_column(&self, stmt: &AddColumn) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} ADD COLUMN {}",
            quote_identifier(&stmt.table)?,
            self.column_def(&stmt.column, stmt.after.as_deref())?
        ))
    }

    fn modify_column(&self, stmt: &ModifyColumn) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} MODIFY COLUMN {}",
            quote_identifier(&stmt.table)?,
            self.column_def(&stmt.column, stmt.after.as_deref())?
        ))
    }

    fn drop_column(&self, stmt: &DropColumn) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} DROP COLUMN {}",
            quote_identifier(&stmt.table)?,
            quote_identifier(&stmt.column)?
        ))
    }

    fn rename_table(&self, stmt: &RenameTable) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} RENAME TO {}",
            quote_identifier(&stmt.from)?,
            quote_identifier(&stmt.to)?
        ))
    }

    fn rename_column(&self, stmt: &RenameColumn) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} RENAME COLUMN {} TO {}",
            quote_identifier(&stmt.table)?,
            quote_identifier(&stmt.from)?,
            quote_identifier(&stmt.to)?
        ))
    }

    fn create_index(&self, stmt: &CreateIndex) -> Result<String> {
        let unique = if stmt.unique { "UNIQUE " } else { "" };
        let index = quote_identifier(&stmt.column)?;
        let table = quote_identifier(&stmt.table)?;
        Ok(format!(
            "CREATE {}INDEX {} ON {} ({})",
            unique, index, table, index
        ))
    }

    fn drop_index(&self, stmt: &DropIndex) -> Result<String> {
        Ok(format!(
            "DROP INDEX {} ON {}",
            quote_identifier(&stmt.index)?,
            quote_identifier(&stmt.table)?
        ))
    }

    fn add_foreign_key(&self, stmt: &AddForeignKey) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {} ON UPDATE {}",
            quote_identifier(&stmt.table)?,
            quote_identifier(&stmt.name)?,
            quote_identifier(&stmt.column)?,
            quote_identifier(&stmt.target_table)?,
            quote_identifier(&stmt.target_column)?,
            stmt.on_delete.as_sql(),
            stmt.on_update.as_sql()
        ))
    }

    fn drop_foreign_key(&self, stmt: &DropForeignKey) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} DROP FOREIGN KEY {}",
            quote_identifier(&stmt.table)?,
            quote_identifier(&stmt.name)?
        ))
    }

    /// Renders a full column definition:
    /// name, type, DEFAULT clause, NOT NULL, on-update extra, AFTER position.
    ///
    /// A nullable column with no declared default renders `DEFAULT NULL`,
    /// matching the definition the database itself reports.
    fn column_def(&self, column: &Column, after: Option<&str>) -> Result<String> {
        let mut out = format!("{} {}", quote_identifier(&column.name)?, column.sql_type());

        match &column.default {
            Some(default) if default.is_current_timestamp() => {
                out.push_str(" DEFAULT ");
                out.push_str(CURRENT_TIMESTAMP);
            }
            Some(default) => {
                out.push_str(" DEFAULT ");
                out.push_str(&quote_literal(&default.as_sql_literal()));
            }
            None if column.allow_null => out.push_str(" DEFAULT NULL"),
            None => {}
        }

        if !column.allow_null {
            out.push_str(" NOT NULL");
        }

        if column.auto_update_timestamp {
            out.push_str(" ON UPDATE ");
            out.push_str(CURRENT_TIMESTAMP);
        }

        if let Some(after) = after {
            out.push_str(" AFTER ");
            out.push_str(&quote_identifier(after)?);
        }

        Ok(out)
    }
}

/// Single-quotes a literal, doubling embedded quotes.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
