use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create hotels table
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hotels::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Hotels::Name).text().not_null())
                    .col(ColumnDef::new(Hotels::Location).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create reservations table, timestamps kept as text
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::HotelId).integer().not_null())
                    .col(ColumnDef::new(Reservations::RoomId).integer().not_null())
                    .col(ColumnDef::new(Reservations::GuestName).text().not_null())
                    .col(ColumnDef::new(Reservations::CheckIn).text())
                    .col(ColumnDef::new(Reservations::CheckOut).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-hotel_id")
                            .from(Reservations::Table, Reservations::HotelId)
                            .to(Hotels::Table, Hotels::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Hotels {
    Table,
    Id,
    Name,
    Location,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    #[iden = "hotelId"]
    HotelId,
    #[iden = "roomId"]
    RoomId,
    #[iden = "guestName"]
    GuestName,
    #[iden = "checkIn"]
    CheckIn,
    #[iden = "checkOut"]
    CheckOut,
}
