pub mod handlers;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod source;
pub mod sportradar_client;

pub use source::PlayerSource;
pub use sportradar_client::SportradarClient;
