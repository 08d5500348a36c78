use converge_core::driver::{Connection, Value};
use converge_core::schema::{Column, ForeignKey};
use converge_core::{Error, Result};
use converge_sql::{quote_identifier, Serializer, Statement};

use tracing::debug;

/// Live details of one column, as reported by `SHOW COLUMNS`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDetails {
    /// The native type string, e.g. `varchar(255)` or `int(10) unsigned`.
    pub ty: String,

    /// Whether the live column accepts NULL.
    pub nullable: bool,

    /// The live default, if any.
    pub default: Option<String>,

    /// The `Extra` field, carrying auto-update markers and the like.
    pub extra: String,
}

/// Live details of one index, as reported by `SHOW INDEX`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDetails {
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

/// Metadata reads and single-statement mutations against the live
/// database.
///
/// Reads never mutate anything; every mutation executes exactly one DDL
/// statement. Table and column names are interpolated into metadata
/// queries only after passing the identifier gate, values always bind as
/// parameters.
pub struct Introspector<'a> {
    conn: &'a mut dyn Connection,
    serializer: Serializer,
}

impl<'a> Introspector<'a> {
    pub fn new(conn: &'a mut dyn Connection) -> Introspector<'a> {
        Introspector {
            conn,
            serializer: Serializer::mysql(),
        }
    }

    /// Whether `table` exists in the connected database.
    ///
    /// Uses an exact `information_schema` match; `SHOW TABLES LIKE` would
    /// treat `_` in the name as a wildcard.
    pub async fn table_exists(&mut self, table: &str) -> Result<bool> {
        let row = self
            .conn
            .fetch_one(
                "SELECT `table_name` FROM `information_schema`.`tables` \
                 WHERE `table_schema` = database() AND `table_name` = ?",
                vec![Value::from(table)],
            )
            .await?;
        Ok(row.is_some())
    }

    /// Whether `column` exists on `table`.
    pub async fn column_exists(&mut self, table: &str, column: &str) -> Result<bool> {
        Ok(self.column_details(table, column).await?.is_some())
    }

    /// The live definition of `column`, or `None` if it does not exist.
    pub async fn column_details(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Option<ColumnDetails>> {
        let sql = format!(
            "SHOW COLUMNS FROM {} WHERE `Field` = ?",
            quote_identifier(table)?
        );
        let Some(row) = self.conn.fetch_one(&sql, vec![Value::from(column)]).await? else {
            return Ok(None);
        };
        Ok(Some(ColumnDetails {
            ty: row.get_str("Type").unwrap_or_default(),
            nullable: row.get_str("Null").as_deref() == Some("YES"),
            default: row.get_str("Default"),
            extra: row.get_str("Extra").unwrap_or_default(),
        }))
    }

    /// The index named `name` on `table`, or `None` if absent.
    pub async fn index_by_name(&mut self, table: &str, name: &str) -> Result<Option<IndexDetails>> {
        let sql = format!(
            "SHOW INDEX FROM {} WHERE `Key_name` = ?",
            quote_identifier(table)?
        );
        let Some(row) = self.conn.fetch_one(&sql, vec![Value::from(name)]).await? else {
            return Ok(None);
        };
        Ok(Some(IndexDetails {
            // Non_unique is 0 for unique indexes
            unique: row.get_str("Non_unique").as_deref() == Some("0"),
        }))
    }

    /// The line of the table's DDL text declaring the constraint `name`,
    /// or `None` if absent.
    ///
    /// More than one matching line means the table carries ambiguous
    /// constraint names; that is pre-existing corruption the engine
    /// refuses to resolve.
    pub async fn constraint_line(&mut self, table: &str, name: &str) -> Result<Option<String>> {
        let sql = format!("SHOW CREATE TABLE {}", quote_identifier(table)?);
        let Some(row) = self.conn.fetch_one(&sql, vec![]).await? else {
            return Ok(None);
        };
        let ddl = row.get_str("Create Table").unwrap_or_default();

        let matches: Vec<&str> = ddl
            .lines()
            .filter(|line| line.contains("CONSTRAINT") && line.contains(name))
            .collect();
        if matches.len() > 1 {
            return Err(Error::integrity_defect(format!(
                "{} constraint lines match `{}` on `{}`",
                matches.len(),
                name,
                table
            )));
        }
        Ok(matches.first().map(|line| line.to_string()))
    }

    /// True when `column` sits immediately after `previous` in the live
    /// column order.
    pub async fn column_is_after(
        &mut self,
        table: &str,
        column: &str,
        previous: &str,
    ) -> Result<bool> {
        let sql = format!("SHOW COLUMNS FROM {}", quote_identifier(table)?);
        let rows = self.conn.fetch_all(&sql, vec![]).await?;
        let fields: Vec<String> = rows.iter().filter_map(|row| row.get_str("Field")).collect();

        let position = fields
            .iter()
            .position(|field| field == column)
            .ok_or_else(|| Error::missing_column(table, column))?;
        let previous_position = fields
            .iter()
            .position(|field| field == previous)
            .ok_or_else(|| Error::missing_column(table, previous))?;
        Ok(position == previous_position + 1)
    }

    /// Creates `table` holding only its primary key column.
    pub async fn create_table(&mut self, table: &str, primary_key: &str) -> Result<()> {
        self.apply(&Statement::create_table(table, primary_key)).await
    }

    /// Adds `column`, positioned after `after` when set.
    pub async fn create_column(
        &mut self,
        table: &str,
        column: &Column,
        after: Option<&str>,
    ) -> Result<()> {
        self.apply(&Statement::add_column(table, column, after)).await
    }

    /// Redefines `column` in place, repositioning it after `after` when
    /// set.
    pub async fn modify_column(
        &mut self,
        table: &str,
        column: &Column,
        after: Option<&str>,
    ) -> Result<()> {
        self.apply(&Statement::modify_column(table, column, after))
            .await
    }

    /// Drops `column` from `table`.
    pub async fn drop_column(&mut self, table: &str, column: &str) -> Result<()> {
        self.apply(&Statement::drop_column(table, column)).await
    }

    /// Renames a table.
    pub async fn rename_table(&mut self, from: &str, to: &str) -> Result<()> {
        self.apply(&Statement::rename_table(from, to)).await
    }

    /// Renames a column without touching its definition.
    pub async fn rename_column(&mut self, table: &str, from: &str, to: &str) -> Result<()> {
        self.apply(&Statement::rename_column(table, from, to)).await
    }

    /// Creates a plain index named after `column`.
    pub async fn create_index(&mut self, table: &str, column: &str) -> Result<()> {
        self.apply(&Statement::create_index(table, column)).await
    }

    /// Creates a unique index named after `column`.
    pub async fn create_unique_index(&mut self, table: &str, column: &str) -> Result<()> {
        self.apply(&Statement::create_unique_index(table, column))
            .await
    }

    /// Drops the index named `index`.
    pub async fn drop_index(&mut self, table: &str, index: &str) -> Result<()> {
        self.apply(&Statement::drop_index(table, index)).await
    }

    /// Creates the foreign key declared on `table`.`column` under its
    /// conventional name.
    pub async fn create_foreign_key(
        &mut self,
        table: &str,
        column: &str,
        fk: &ForeignKey,
    ) -> Result<()> {
        self.apply(&Statement::add_foreign_key(table, column, fk))
            .await
    }

    /// Drops the foreign key constraint `name`.
    pub async fn drop_foreign_key(&mut self, table: &str, name: &str) -> Result<()> {
        self.apply(&Statement::drop_foreign_key(table, name)).await
    }

    async fn apply(&mut self, stmt: &Statement) -> Result<()> {
        let sql = self.serializer.serialize(stmt)?;
        debug!(%sql, "applying DDL");
        self.conn.execute(&sql, vec![]).await?;
        Ok(())
    }
}
