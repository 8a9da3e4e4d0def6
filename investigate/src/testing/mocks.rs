use crate::http::{RawResponse, TransportError};
use crate::traits::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

#[derive(Clone)]
enum MockReply {
    Response(RawResponse),
    Failure(TransportError),
}

/// Scripted transport that answers every call the same way and counts calls
#[derive(Clone)]
pub struct MockTransport {
    reply: MockReply,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    last_url: Arc<Mutex<Option<Url>>>,
}

impl MockTransport {
    pub fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(MockReply::Response(RawResponse::new(status, body)))
    }

    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::respond(status, body.to_string())
    }

    pub fn fail(error: TransportError) -> Self {
        Self::with_reply(MockReply::Failure(error))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_url: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<Url> {
        self.last_url.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Transport for MockTransport {
    async fn post(&self, url: Url) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.last_url.lock() {
            *slot = Some(url);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            MockReply::Response(response) => Ok(response.clone()),
            MockReply::Failure(error) => Err(error.clone()),
        }
    }
}
