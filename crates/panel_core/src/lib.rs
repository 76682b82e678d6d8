//! Coefficient tuning panel: progression model, chart rendering, and the
//! configuring → running session lifecycle that hands a frozen configuration
//! to an external simulation.

pub mod config;
pub mod controller;
pub mod controls;
pub mod domain;
pub mod error;
pub mod progression;
pub mod render;
pub mod scale;
pub mod session;
pub mod simulation;
pub mod surface;
pub mod svg;

pub use config::{load_settings, Settings};
pub use controller::{PanelController, PanelUpdate, PanelView};
pub use domain::{Coefficient, CoefficientPair, Point, PointSeries};
pub use session::{SessionKey, SessionState, StartOutcome};
pub use simulation::{KeyReporter, SimulationConfig, SimulationFactory, SimulationViewport};
pub use surface::{DrawableRegion, Scene, Surface};
