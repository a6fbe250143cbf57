use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entities::product;
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<product::Model>, DbErr> {
    product::Entity::find().all(conn).await
}

pub async fn get<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<product::Model>, DbErr> {
    product::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: product::ActiveModel,
) -> Result<product::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    model: product::ActiveModel,
) -> Result<product::Model, DbErr> {
    model.update(conn).await
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<u64, DbErr> {
    let result = product::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
