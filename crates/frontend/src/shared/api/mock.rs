//! In-memory transport for controller and client tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<MockInner>>,
}

#[derive(Default)]
struct MockInner {
    requests: Vec<HttpRequest>,
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    holds: VecDeque<oneshot::Receiver<()>>,
}

impl MockTransport {
    /// Queues the response for the next request.
    pub fn respond(&self, status: u16, body: &str) {
        self.inner.borrow_mut().responses.push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    /// Keeps the next request pending until the returned sender fires.
    /// Its response is taken from the queue only once released.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().holds.push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let hold = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            inner.holds.pop_front()
        };
        if let Some(hold) = hold {
            let _ = hold.await;
        }
        self.inner
            .borrow_mut()
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
    }
}
