pub mod upgrade;

use crate::store::TableConfig;

#[derive(Debug)]
pub enum Action {
    Upgrade { dsn: String, table: TableConfig },
}
