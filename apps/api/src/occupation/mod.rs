// Occupation data: CareerOneStop client, normalizer, and career lookups.
// Only `client` performs network calls; everything downstream works on its output.

pub mod catalog;
pub mod client;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod service;
pub mod view;
