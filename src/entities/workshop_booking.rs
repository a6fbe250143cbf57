use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::entities::order::PaymentStatus;

/// Same contract as class registrations: `workshop_id` is a plain column and
/// a booking row outlives a missing or deleted parent workshop.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "workshop_bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub workshop_id: String,
    pub attendee_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub number_of_seats: i32,
    pub payment_status: PaymentStatus,
    pub booked_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
