use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Decimal-formatted string, never a float.
    pub price: String,
    pub discount_percent: i32,
    pub category: Category,
    pub image_url: Option<String>,
    pub additional_images: Option<String>,
    pub video_url: Option<String>,
    pub stock_quantity: i32,
    pub stock_status: StockStatus,
    pub is_enabled: bool,
    pub is_customizable: bool,
    pub featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    enum_name = "product_category_enum",
    db_type = "String(StringLen::N(255))",
    rs_type = "String"
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[sea_orm(string_value = "decor")]
    Decor,
    #[sea_orm(string_value = "gifts")]
    Gifts,
    #[sea_orm(string_value = "paintings")]
    Paintings,
    #[sea_orm(string_value = "crafts")]
    Crafts,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decor" => Ok(Self::Decor),
            "gifts" => Ok(Self::Gifts),
            "paintings" => Ok(Self::Paintings),
            "crafts" => Ok(Self::Crafts),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    enum_name = "stock_status_enum",
    db_type = "String(StringLen::N(255))",
    rs_type = "String"
)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "limited")]
    Limited,
    #[sea_orm(string_value = "out_of_stock")]
    OutOfStock,
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "limited" => Ok(Self::Limited),
            "out_of_stock" => Ok(Self::OutOfStock),
            _ => Err(format!("Invalid stock status: {}", s)),
        }
    }
}
