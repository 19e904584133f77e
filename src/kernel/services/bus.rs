use tokio::sync::mpsc::error::{SendError, TryRecvError};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub enum SessionMessage {
    Action(crate::kernel::Action),
}

#[derive(Clone)]
pub struct SessionBusSender {
    tx: UnboundedSender<SessionMessage>,
}

pub struct SessionBusReceiver {
    rx: UnboundedReceiver<SessionMessage>,
}

pub fn session_bus() -> (SessionBusSender, SessionBusReceiver) {
    let (tx, rx) = unbounded_channel();
    (SessionBusSender { tx }, SessionBusReceiver { rx })
}

impl SessionBusSender {
    pub fn send(&self, msg: SessionMessage) -> Result<(), SendError<SessionMessage>> {
        self.tx.send(msg)
    }

    pub fn send_action(
        &self,
        action: crate::kernel::Action,
    ) -> Result<(), SendError<SessionMessage>> {
        self.send(SessionMessage::Action(action))
    }
}

impl SessionBusReceiver {
    pub fn try_recv(&mut self) -> Result<SessionMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub async fn recv(&mut self) -> Option<SessionMessage> {
        self.rx.recv().await
    }
}
