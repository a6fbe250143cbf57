use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Point-in-time copy of a product at checkout. `product_id` is kept as a
/// plain column on purpose: later edits or deletion of the product must not
/// touch historical items.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_id: String,
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: i32,
    pub price: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
