pub use sea_orm_migration::prelude::*;

mod m20261018_create_snapshot_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261018_create_snapshot_tables::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::{Migrator, MigratorTrait, SchemaManager};
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn test_up_creates_tables_and_down_drops_them() {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("hotels").await.unwrap());
        assert!(manager.has_table("reservations").await.unwrap());
        assert!(manager.has_column("reservations", "guestName").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("hotels").await.unwrap());
        assert!(!manager.has_table("reservations").await.unwrap());
    }
}
