pub mod art_class;
pub mod class_registration;
pub mod contact;
pub mod gallery_item;
pub mod order;
pub mod order_item;
pub mod product;
pub mod product_like;
pub mod testimonial;
pub mod user;
pub mod workshop;
pub mod workshop_booking;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Schema, Set,
};

use crate::storage::new_id;

pub async fn setup_schema(db: &DatabaseConnection) {
    let schema = Schema::new(db.get_database_backend());

    let statements = [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(product::Entity),
        schema.create_table_from_entity(order::Entity),
        schema.create_table_from_entity(order_item::Entity),
        schema.create_table_from_entity(art_class::Entity),
        schema.create_table_from_entity(class_registration::Entity),
        schema.create_table_from_entity(workshop::Entity),
        schema.create_table_from_entity(workshop_booking::Entity),
        schema.create_table_from_entity(testimonial::Entity),
        schema.create_table_from_entity(contact::Entity),
        schema.create_table_from_entity(gallery_item::Entity),
        schema.create_table_from_entity(product_like::Entity),
    ];

    for mut statement in statements {
        db.execute(db.get_database_backend().build(statement.if_not_exists()))
            .await
            .expect("Failed to create schema");
    }
}

/// Startup seed: make sure one admin account exists. Idempotent, so restarts
/// against a persistent database do not trip the unique username constraint.
pub async fn seed_admin(db: &DatabaseConnection, username: &str, password: &str) {
    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .expect("Failed to query users during seed");

    if existing.is_some() {
        return;
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash admin password")
        .to_string();

    let admin = user::ActiveModel {
        id: Set(new_id()),
        username: Set(username.to_owned()),
        password: Set(password_hash),
        role: Set(user::Role::Admin),
    };

    user::Entity::insert(admin)
        .exec(db)
        .await
        .expect("Failed to seed admin user");
}
