pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod spring;
pub mod integrator;
pub mod collision;
pub mod constraint;
pub mod scene;
pub mod scenario;
