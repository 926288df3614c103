pub mod ask;
pub mod campaign;
pub mod credentials;
pub mod events;
pub mod posts;
