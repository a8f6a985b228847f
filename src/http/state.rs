use crate::session::SessionStore;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct HttpServerState {
    pub name: Arc<String>,
    pub sessions: Arc<SessionStore>,
}
