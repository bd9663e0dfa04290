pub mod catalog;
pub mod cms;
pub mod config;
pub mod error;
pub mod gallery;
pub mod images;
pub mod model;
pub mod render;
pub mod server;
