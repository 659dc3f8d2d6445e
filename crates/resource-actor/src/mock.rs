//! # Mock Clients
//!
//! Test doubles for code that talks to a resource actor through a [`ResourceClient`].
//!
//! Two styles are supported:
//!
//! - [`MockClient`]: queue canned responses up front (`expect_get(..).return_ok(..)`) and
//!   call [`MockClient::verify`] at the end. Requests must arrive in the queued order.
//! - [`create_mock_client`] + `expect_*` helpers: receive each raw request yourself,
//!   inspect the payload, and answer through its reply channel. Use this when the test
//!   needs to assert on what was sent (e.g. the quantity in a `ReserveStock`).
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, canned replies | real store |
//! | Error injection | `return_err` | needs a crafted state |
//! | Use case | logic around a client | the entity itself, or the whole system |

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "get",
            Expectation::Create(_) => "create",
            Expectation::Update(_) => "update",
            Expectation::Delete(_) => "delete",
            Expectation::Action(_) => "action",
        }
    }
}

struct Queued<T: ActorEntity> {
    id: Option<T::Id>,
    expectation: Expectation<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Queued<T>>>>;

/// A mock client answering from a queue of expectations.
///
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get(ProductId(1)).return_ok(Some(product));
/// mock.expect_action(ProductId(1)).return_ok(ProductActionResult::ReserveStock(()));
///
/// let client = ProductClient::new(mock.client());
/// // exercise code under test...
/// mock.verify();
/// ```
///
/// When an id is given to `expect_*`, the request's id must match it.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().expect("mock queue poisoned").pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Expectation::Get)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, Expectation::Create)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Expectation::Update)
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Expectation::Delete)
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Expectation::Action)
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned");
        if !remaining.is_empty() {
            let names: Vec<_> = remaining.iter().map(|q| q.expectation.name()).collect();
            panic!("Not all expectations were met. Remaining: {:?}", names);
        }
    }

    fn builder<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

/// Completes an expectation with its canned response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request with `Ok(value)`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the request with `Err(error)`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(Queued {
                id: self.id,
                expectation: (self.wrap)(response),
            });
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, next: Option<Queued<T>>) {
    let Some(Queued { id: expected_id, expectation }) = next else {
        panic!(
            "Unexpected {} request with no expectation left",
            request_name(&request)
        );
    };

    fn check<I: PartialEq + std::fmt::Debug>(expected: &Option<I>, actual: &I) {
        if let Some(expected) = expected {
            assert_eq!(expected, actual, "request id does not match expectation");
        }
    }

    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Expectation::Get(r)) => {
            check(&expected_id, &id);
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Create { respond_to, .. }, Expectation::Create(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Update { id, respond_to, .. }, Expectation::Update(r)) => {
            check(&expected_id, &id);
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Delete { id, respond_to }, Expectation::Delete(r)) => {
            check(&expected_id, &id);
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Action { id, respond_to, .. }, Expectation::Action(r)) => {
            check(&expected_id, &id);
            let _ = respond_to.send(r);
        }
        (request, expectation) => panic!(
            "Expected a {} request, got {}",
            expectation.name(),
            request_name(&request)
        ),
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Delete.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
