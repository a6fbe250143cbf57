use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "workshops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: DateTimeUtc,
    pub time: String,
    pub duration: String,
    pub venue: String,
    pub price: String,
    pub max_seats: i32,
    /// Derived counter, bumped by the requested seat count on booking.
    pub booked_seats: i32,
    pub image_url: Option<String>,
    pub is_past: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
