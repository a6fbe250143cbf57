use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{order, order_item};
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<order::Model>, DbErr> {
    order::Entity::find()
        .order_by_desc(order::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn get<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<order::Model>, DbErr> {
    order::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: order::ActiveModel,
) -> Result<order::Model, DbErr> {
    model.id = Set(new_id());
    model.created_at = Set(Utc::now());
    model.insert(conn).await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    model: order::ActiveModel,
) -> Result<order::Model, DbErr> {
    model.update(conn).await
}

pub async fn create_item<C: ConnectionTrait>(
    conn: &C,
    mut model: order_item::ActiveModel,
) -> Result<order_item::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}

pub async fn list_items<C: ConnectionTrait>(
    conn: &C,
    order_id: &str,
) -> Result<Vec<order_item::Model>, DbErr> {
    order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .all(conn)
        .await
}
