use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::entities::order::PaymentStatus;

/// `class_id` is deliberately not an enforced foreign key: a registration is
/// accepted even when the parent class row cannot be found, and the enrolled
/// counter update becomes a no-op in that case.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "class_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub class_id: String,
    pub student_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub parent_name: Option<String>,
    pub payment_status: PaymentStatus,
    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
