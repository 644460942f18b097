//! Sales CSV ingestion and dashboard aggregation.
//!
//! An upload flows through [`ingest::Ingestor`] into a [`models::Dataset`],
//! which [`session::DashboardSession`] publishes as immutable snapshots. The
//! functions in [`aggregate`] turn a dataset into chart-ready views and a
//! [`render::Renderer`] writes them out.

pub mod aggregate;
pub mod config;
pub mod ingest;
pub mod models;
pub mod render;
pub mod session;
pub mod types;
