pub mod ingestion;
pub mod server;

pub use ingestion::IngestionService;
pub use server::ServerService;
