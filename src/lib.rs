pub mod config;
pub mod create_payment_intent_handler;
pub mod health_check;
pub mod http_server;
pub mod models;
pub mod payment_service;
