pub mod entities;
pub mod middleware;
pub mod routes;
pub mod storage;
