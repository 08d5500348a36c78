mod add_column;
pub use add_column::AddColumn;

mod add_foreign_key;
pub use add_foreign_key::AddForeignKey;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod drop_column;
pub use drop_column::DropColumn;

mod drop_foreign_key;
pub use drop_foreign_key::DropForeignKey;

mod drop_index;
pub use drop_index::DropIndex;

mod modify_column;
pub use modify_column::ModifyColumn;

mod rename_column;
pub use rename_column::RenameColumn;

mod rename_table;
pub use rename_table::RenameTable;

/// A single DDL statement against the target database.
///
/// Every mutation the engine performs maps to exactly one statement; there
/// is no batching and no multi-action ALTER.
#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    AddForeignKey(AddForeignKey),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropColumn(DropColumn),
    DropForeignKey(DropForeignKey),
    DropIndex(DropIndex),
    ModifyColumn(ModifyColumn),
    RenameColumn(RenameColumn),
    RenameTable(RenameTable),
}
