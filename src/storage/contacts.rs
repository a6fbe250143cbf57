use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, Set};

use crate::entities::contact;
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<contact::Model>, DbErr> {
    contact::Entity::find()
        .order_by_desc(contact::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn get<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<contact::Model>, DbErr> {
    contact::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: contact::ActiveModel,
) -> Result<contact::Model, DbErr> {
    model.id = Set(new_id());
    model.created_at = Set(Utc::now());
    model.insert(conn).await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    model: contact::ActiveModel,
) -> Result<contact::Model, DbErr> {
    model.update(conn).await
}
