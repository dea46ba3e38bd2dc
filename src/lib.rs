//! Grid Traffic Simulation Library
//!
//! Routing and vehicle kinematics for a rectangular grid of intersections.
//! Rendering is left to the caller, which reads state through
//! [`simulation::SimulationController::snapshot`].

pub mod simulation;
