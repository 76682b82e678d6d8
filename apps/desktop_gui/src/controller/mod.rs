//! Controller layer: UI events and their dispatch into the panel controller.

pub mod events;
pub mod orchestration;
