use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entities::testimonial;
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<testimonial::Model>, DbErr> {
    testimonial::Entity::find().all(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: testimonial::ActiveModel,
) -> Result<testimonial::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}
