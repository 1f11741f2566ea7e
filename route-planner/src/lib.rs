//! Multi-leg journey planner core.
//!
//! Answers: "how do I get from this city to that one on a given date,
//! by bus or train, optimizing for time, cost, or changes?"
//!
//! The crate is the route-search subsystem only. It consumes a
//! [`provider::ScheduleProvider`] for candidate schedules and exposes
//! [`service::RouteService`] to the presentation layers; it owns no
//! schedule storage, persistence, or wire format.

pub mod cache;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod provider;
pub mod service;
