mod health;
mod process_invoice;
mod root;

pub use health::health_handler;
pub use process_invoice::process_invoice_handler;
pub use root::root_handler;
