//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod products;
pub mod roles;
pub mod users;

pub use auth::{login_handler, me_handler};
pub use health::health_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_by_name_handler,
    get_product_handler, list_products_handler, update_product_handler,
};
pub use roles::{
    create_role_handler, delete_role_handler, get_role_handler, list_roles_handler,
    update_role_handler,
};
pub use users::{
    assign_role_handler, create_user_handler, delete_user_handler, get_user_handler,
    list_users_handler, update_user_handler,
};
