//! Bridge from driver events to async code.
//!
//! The forwarder is subscribed to the driver like any other observer and pushes
//! every [`SimulationEvent`] into a tokio channel the caller can await.

use actix::prelude::*;
use tokio::sync::mpsc;

use super::messages::SimulationEvent;

pub struct EventForwarder {
    tx: mpsc::UnboundedSender<SimulationEvent>,
}

impl EventForwarder {
    pub fn new(tx: mpsc::UnboundedSender<SimulationEvent>) -> Self {
        Self { tx }
    }

    /// Start a forwarder and return its recipient with the receiving end.
    pub fn channel() -> (Recipient<SimulationEvent>, mpsc::UnboundedReceiver<SimulationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let addr = Self::new(tx).start();
        (addr.recipient(), rx)
    }
}

impl Actor for EventForwarder {
    type Context = Context<Self>;
}

impl Handler<SimulationEvent> for EventForwarder {
    type Result = ();

    fn handle(&mut self, msg: SimulationEvent, _: &mut Context<Self>) -> Self::Result {
        // Receiver may have been dropped.
        let _ = self.tx.send(msg);
    }
}
