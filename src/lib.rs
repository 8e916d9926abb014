#![doc = "The `plantx` library crate."]
#![doc = ""]
#![doc = "This crate contains the business logic of the PlantX e-commerce backend:"]
#![doc = "configuration, database pool setup, authentication (bcrypt + JWT), the"]
#![doc = "catalog models (categories, products), the HTTP route groups, and error"]
#![doc = "handling. The binary (`main.rs`) only performs the one-time startup"]
#![doc = "sequence and wires these modules into an actix-web application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
