use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Check-in and check-out are stored as RFC 3339 text
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "hotelId")]
    pub hotel_id: i32,
    #[sea_orm(column_name = "roomId")]
    pub room_id: i32,
    #[sea_orm(column_name = "guestName")]
    pub guest_name: String,
    #[sea_orm(column_name = "checkIn")]
    pub check_in: Option<String>,
    #[sea_orm(column_name = "checkOut")]
    pub check_out: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotels::Entity",
        from = "Column::HotelId",
        to = "super::hotels::Column::Id"
    )]
    Hotel,
}

impl Related<super::hotels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
