use crate::entities::{hotels, reservations};
use models::{Hotel, Reservation};
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, TryInsertResult,
    sea_query::OnConflict,
};

/// One-way export of the in-memory store.
///
/// Every call inserts every row it is given. A row whose id is already in the
/// table is skipped, so storage never sees updates or deletions.
pub struct SnapshotService;

impl SnapshotService {
    /// Writes hotels first so that reservation rows can reference them.
    /// Returns the number of rows actually inserted.
    pub async fn save_snapshot(
        db: &DatabaseConnection,
        hotels: &[Hotel],
        reservations: &[Reservation],
    ) -> Result<u64, DbErr> {
        let hotel_rows = Self::save_hotels(db, hotels).await?;
        let reservation_rows = Self::save_reservations(db, reservations).await?;

        log::debug!(
            "Snapshot exported: {hotel_rows} new hotel rows, {reservation_rows} new reservation rows"
        );
        Ok(hotel_rows + reservation_rows)
    }

    pub async fn save_hotels(db: &DatabaseConnection, hotels: &[Hotel]) -> Result<u64, DbErr> {
        if hotels.is_empty() {
            return Ok(0);
        }

        let result = hotels::Entity::insert_many(hotels.iter().map(Self::hotel_to_active_model))
            .on_conflict(OnConflict::column(hotels::Column::Id).do_nothing().to_owned())
            .do_nothing()
            .exec_without_returning(db)
            .await?;

        Ok(Self::rows_inserted(result))
    }

    pub async fn save_reservations(
        db: &DatabaseConnection,
        reservations: &[Reservation],
    ) -> Result<u64, DbErr> {
        if reservations.is_empty() {
            return Ok(0);
        }

        let result = reservations::Entity::insert_many(
            reservations.iter().map(Self::reservation_to_active_model),
        )
        .on_conflict(
            OnConflict::column(reservations::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec_without_returning(db)
        .await?;

        Ok(Self::rows_inserted(result))
    }

    fn rows_inserted(result: TryInsertResult<u64>) -> u64 {
        match result {
            TryInsertResult::Inserted(rows) => rows,
            TryInsertResult::Empty | TryInsertResult::Conflicted => 0,
        }
    }

    fn hotel_to_active_model(hotel: &Hotel) -> hotels::ActiveModel {
        hotels::ActiveModel {
            id: Set(hotel.id),
            name: Set(hotel.name.clone()),
            location: Set(hotel.location.clone()),
        }
    }

    fn reservation_to_active_model(reservation: &Reservation) -> reservations::ActiveModel {
        reservations::ActiveModel {
            id: Set(reservation.id),
            hotel_id: Set(reservation.hotel_id),
            room_id: Set(reservation.room_id),
            guest_name: Set(reservation.guest_name.clone()),
            check_in: Set(reservation.check_in.map(|t| t.to_rfc3339())),
            check_out: Set(reservation.check_out.map(|t| t.to_rfc3339())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotService;
    use crate::entities::{hotels, reservations};
    use chrono::{TimeZone, Utc};
    use migration::{Migrator, MigratorTrait};
    use models::{Hotel, Reservation};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryOrder};

    async fn setup() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn hotel(id: i32, name: &str) -> Hotel {
        Hotel::new(id, name.to_owned(), "Localização Teste".to_owned())
    }

    async fn stored_hotels(db: &DatabaseConnection) -> Vec<hotels::Model> {
        hotels::Entity::find()
            .order_by_asc(hotels::Column::Id)
            .all(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_snapshot_writes_all_rows() {
        let db = setup().await;
        let hotels = vec![hotel(1, "Hotel A"), hotel(2, "Hotel B")];
        let reservations = vec![Reservation::new(1, 1, 1, "João Silva".to_owned())];

        let rows = SnapshotService::save_snapshot(&db, &hotels, &reservations)
            .await
            .unwrap();
        assert_eq!(rows, 3);

        let stored = stored_hotels(&db).await;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "Hotel A");
        assert_eq!(stored[1].location, "Localização Teste");

        let stored = reservations::Entity::find_by_id(1)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.guest_name, "João Silva");
        assert_eq!(stored.check_in, None);
        assert_eq!(stored.check_out, None);
    }

    #[tokio::test]
    async fn test_timestamps_are_stored_as_text() {
        let db = setup().await;
        let arrival = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
        let mut reservation = Reservation::new(1, 1, 1, "João Silva".to_owned());
        reservation.check_in = Some(arrival);

        SnapshotService::save_snapshot(&db, &[hotel(1, "Hotel A")], &[reservation])
            .await
            .unwrap();

        let stored = reservations::Entity::find_by_id(1)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.check_in.as_deref(), Some("2024-05-01T14:00:00+00:00"));
        assert_eq!(stored.check_out, None);
    }

    #[tokio::test]
    async fn test_existing_rows_are_never_updated_or_deleted() {
        let db = setup().await;
        SnapshotService::save_hotels(&db, &[hotel(1, "Hotel A"), hotel(2, "Hotel B")])
            .await
            .unwrap();

        // Hotel 1 renamed, hotel 2 deleted, hotel 3 created
        let rows = SnapshotService::save_hotels(&db, &[hotel(1, "Hotel Z"), hotel(3, "Hotel C")])
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let names: Vec<_> = stored_hotels(&db)
            .await
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, ["Hotel A", "Hotel B", "Hotel C"]);
    }

    #[tokio::test]
    async fn test_repeated_save_is_a_no_op() {
        let db = setup().await;
        let hotels = vec![hotel(1, "Hotel A")];

        assert_eq!(SnapshotService::save_hotels(&db, &hotels).await.unwrap(), 1);
        assert_eq!(SnapshotService::save_hotels(&db, &hotels).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_snapshot() {
        let db = setup().await;

        let rows = SnapshotService::save_snapshot(&db, &[], &[]).await.unwrap();
        assert_eq!(rows, 0);
        assert!(stored_hotels(&db).await.is_empty());
    }
}
