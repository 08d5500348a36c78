mod report;
pub use report::Report;

use crate::introspect::{ColumnDetails, Introspector};

use converge_core::driver::Connection;
use converge_core::schema::{Column, Entity, ForeignKey, ForeignKeyAction, Table};
use converge_core::{Error, Result};

use tracing::debug;

/// Drives one table's convergence.
///
/// Reads live state through the [`Introspector`], compares it to the
/// shape declared by an [`Entity`], and applies the DDL needed to close
/// every difference, in a fixed order: ensure table, drops, renames, then
/// one pass over the declared columns.
pub struct Reconciler<'a> {
    introspector: Introspector<'a>,
}

impl<'a> Reconciler<'a> {
    pub fn new(conn: &'a mut dyn Connection) -> Reconciler<'a> {
        Reconciler {
            introspector: Introspector::new(conn),
        }
    }

    /// Converges the live table declared by `E` to its desired shape.
    ///
    /// Safe to call repeatedly: a converged table yields an empty report.
    /// Fails fast on the first error; statements already applied stay
    /// applied, and a later run resumes convergence where this one
    /// stopped.
    pub async fn reconcile<E: Entity>(&mut self) -> Result<Report> {
        let mut table = Table::new(E::table_name());
        E::populate(&mut table)?;

        let name = E::table_name();
        let mut report = Report::new();

        debug!(table = name, "reconciling table");

        // 1. Ensure the table exists, with just its primary key column.
        if !self.introspector.table_exists(name).await? {
            self.introspector
                .create_table(name, &E::primary_key_name())
                .await?;
            report.record(format!("created table `{}`", name));
        }

        // 2. Drops. The conventional foreign key goes first so no
        // constraint dangles on a dropped column.
        for dropped in &table.dropped {
            if !self.introspector.column_exists(name, dropped).await? {
                continue;
            }
            let constraint = ForeignKey::constraint_name(name, dropped);
            if self
                .introspector
                .constraint_line(name, &constraint)
                .await?
                .is_some()
            {
                self.introspector.drop_foreign_key(name, &constraint).await?;
                report.record(format!(
                    "dropped foreign key `{}` from `{}`",
                    constraint, name
                ));
            }
            self.introspector.drop_column(name, dropped).await?;
            report.record(format!("dropped column `{}` from `{}`", dropped, name));
        }

        // 3. Renames, name-only. The renamed column's definition is
        // reconciled by the per-column pass below.
        for (old, new) in &table.renamed {
            if !self.introspector.column_exists(name, old).await? {
                continue;
            }
            self.introspector.rename_column(name, old, new).await?;
            report.record(format!("renamed column `{}` to `{}` on `{}`", old, new, name));
        }

        // 4. Per-column pass in declaration order, tracking the declared
        // predecessor for positioning.
        let mut previous: Option<&str> = None;
        for (column_name, column) in &table.columns {
            self.reconcile_column(name, column, previous, &mut report)
                .await?;
            self.reconcile_index(name, column, &mut report).await?;
            self.reconcile_foreign_key(name, column, &mut report).await?;
            previous = Some(column_name.as_str());
        }

        Ok(report)
    }

    async fn reconcile_column(
        &mut self,
        table: &str,
        column: &Column,
        previous: Option<&str>,
        report: &mut Report,
    ) -> Result<()> {
        let Some(live) = self.introspector.column_details(table, &column.name).await? else {
            self.introspector
                .create_column(table, column, previous)
                .await?;
            report.record(format!("added column `{}` to `{}`", column.name, table));
            return Ok(());
        };

        if self
            .column_needs_modify(table, column, &live, previous)
            .await?
        {
            self.introspector
                .modify_column(table, column, previous)
                .await?;
            report.record(format!("modified column `{}` on `{}`", column.name, table));
        }
        Ok(())
    }

    /// One declared column against its live counterpart. The checks are
    /// independent; any hit means one `modify_column` carrying the full
    /// target definition.
    async fn column_needs_modify(
        &mut self,
        table: &str,
        column: &Column,
        live: &ColumnDetails,
        previous: Option<&str>,
    ) -> Result<bool> {
        if column.sql_type() != live.ty {
            return Ok(true);
        }

        // Nullability, relaxed or tightened.
        if column.allow_null != live.nullable {
            return Ok(true);
        }

        match (&column.default, &live.default) {
            (None, Some(_)) => return Ok(true),
            (Some(_), None) => return Ok(true),
            (Some(want), Some(have)) if !want.matches_live(have) => return Ok(true),
            _ => {}
        }

        let live_auto_update = live
            .extra
            .to_ascii_lowercase()
            .contains("on update current_timestamp");
        if column.auto_update_timestamp != live_auto_update {
            return Ok(true);
        }

        if let Some(previous) = previous {
            if !self
                .introspector
                .column_is_after(table, &column.name, previous)
                .await?
            {
                return Ok(true);
            }
        }

        Ok(false)
    }

    async fn reconcile_index(
        &mut self,
        table: &str,
        column: &Column,
        report: &mut Report,
    ) -> Result<()> {
        if !column.wants_index() {
            return Ok(());
        }
        let want_unique = column.wants_unique_index();

        let mut existing = self.introspector.index_by_name(table, &column.name).await?;
        if let Some(live) = &existing {
            if live.unique != want_unique {
                self.introspector.drop_index(table, &column.name).await?;
                report.record(format!("dropped index `{}` on `{}`", column.name, table));
                existing = None;
            }
        }

        if existing.is_none() {
            if want_unique {
                self.introspector
                    .create_unique_index(table, &column.name)
                    .await?;
                report.record(format!(
                    "created unique index `{}` on `{}`",
                    column.name, table
                ));
            } else {
                self.introspector.create_index(table, &column.name).await?;
                report.record(format!("created index `{}` on `{}`", column.name, table));
            }
        }
        Ok(())
    }

    async fn reconcile_foreign_key(
        &mut self,
        table: &str,
        column: &Column,
        report: &mut Report,
    ) -> Result<()> {
        let Some(fk) = &column.foreign_key else {
            return Ok(());
        };

        // Only detectable once the full definition is known: SET NULL
        // cannot fire against a NOT NULL column.
        if fk.on_delete == ForeignKeyAction::SetNull && !column.allow_null {
            return Err(Error::configuration(format!(
                "ON DELETE SET NULL requires column `{}`.`{}` to be nullable",
                table, column.name
            )));
        }

        let constraint = ForeignKey::constraint_name(table, &column.name);
        let mut line = self.introspector.constraint_line(table, &constraint).await?;

        if let Some(text) = &line {
            let update_token = format!("UPDATE {}", fk.on_update.as_sql());
            let delete_token = format!("DELETE {}", fk.on_delete.as_sql());
            if !(text.contains(&update_token) && text.contains(&delete_token)) {
                self.introspector.drop_foreign_key(table, &constraint).await?;
                report.record(format!(
                    "dropped foreign key `{}` from `{}`",
                    constraint, table
                ));
                line = None;
            }
        }

        if line.is_none() {
            self.introspector
                .create_foreign_key(table, &column.name, fk)
                .await?;
            report.record(format!("created foreign key `{}` on `{}`", constraint, table));
        }
        Ok(())
    }
}
