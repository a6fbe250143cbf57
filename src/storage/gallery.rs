use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entities::gallery_item;
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<gallery_item::Model>, DbErr> {
    gallery_item::Entity::find().all(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: gallery_item::ActiveModel,
) -> Result<gallery_item::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<u64, DbErr> {
    let result = gallery_item::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
