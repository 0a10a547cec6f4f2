pub mod messages;
pub mod observer;
pub mod server;

pub use messages::*;
pub use observer::EventForwarder;
pub use server::SimulationDriver;
