//! Decision Wizard - Guided decision making with remote option analysis
//!
//! A five-step wizard collects a decision title, options, weighted criteria
//! and constraints, submits them to an external analysis function, and turns
//! the returned recommendation and scores into chart, table and reasoning
//! views.
//!
//! # Layers
//!
//! - `domain` - Form state, step gates, status lifecycle, result ranking and rendering
//! - `ports` - Contracts for persistence, analysis, notifications, templates and auth
//! - `adapters` - In-memory, HTTP, log and YAML implementations of the ports
//! - `application` - The wizard controller and dashboard handlers
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
