pub use sea_orm_migration::prelude::*;

mod util;
mod m20260801_091500_init;
mod m20260803_142000_seed;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_091500_init::Migration),
            Box::new(m20260803_142000_seed::Migration),
        ]
    }
}
