//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod locations;
pub mod methods;
pub mod settings;
pub mod times;

pub use health::health_handler;
pub use locations::{
    create_location_handler, delete_location_handler, get_location_handler, location_list_handler,
    update_location_handler,
};
pub use methods::method_list_handler;
pub use settings::{settings_handler, update_settings_handler};
pub use times::{location_times_handler, times_handler};
