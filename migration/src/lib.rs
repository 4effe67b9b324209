pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_accounts_table;
mod m20250810_000002_create_profiles_table;
mod m20250811_000001_create_content_items_table;
mod m20250812_000001_create_ads_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_accounts_table::Migration),
            Box::new(m20250810_000002_create_profiles_table::Migration),
            Box::new(m20250811_000001_create_content_items_table::Migration),
            Box::new(m20250812_000001_create_ads_table::Migration),
        ]
    }
}
