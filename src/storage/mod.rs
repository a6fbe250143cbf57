//! Data-access layer. Every function is generic over
//! [`sea_orm::ConnectionTrait`] so route handlers can pass either the shared
//! connection or an open transaction. No business logic lives here beyond the
//! two derived-counter increments (class enrollment, workshop seats).

pub mod classes;
pub mod contacts;
pub mod gallery;
pub mod likes;
pub mod orders;
pub mod products;
pub mod testimonials;
pub mod users;
pub mod workshops;

use uuid::Uuid;

/// Opaque 32-char lowercase hex id, the same shape as a
/// `lower(hex(randomblob(16)))` column default.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
