//! Test doubles for the controller seams: a hand-driven clock, scripted
//! chat/auth services that record every request, and a recording navigator.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::net::service::{AuthService, ChatService, ServiceError};
use crate::net::types::{AuthReply, ChatReply, ChatRequest, LoginRequest, RegisterRequest};
use crate::util::navigation::Navigator;
use crate::util::timer::Clock;

// =============================================================
// Clock
// =============================================================

#[derive(Default)]
struct ManualClockInner {
    now_ms: f64,
    sleepers: Vec<(f64, oneshot::Sender<()>)>,
    tasks: Vec<(f64, Box<dyn FnOnce()>)>,
    requested: Vec<u32>,
}

/// Clock whose sleeps only complete when the test calls [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ManualClockInner>>,
}

impl ManualClock {
    pub fn at(now_ms: f64) -> Self {
        let clock = Self::default();
        clock.inner.borrow_mut().now_ms = now_ms;
        clock
    }

    /// Move time forward and wake every sleeper that is now due.
    pub fn advance(&self, ms: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.now_ms += f64::from(ms);
        let now = inner.now_ms;
        let (due, waiting): (Vec<_>, Vec<_>) = inner.sleepers.drain(..).partition(|(at, _)| *at <= now);
        inner.sleepers = waiting;
        let (mut due_tasks, waiting): (Vec<_>, Vec<_>) = inner.tasks.drain(..).partition(|(at, _)| *at <= now);
        inner.tasks = waiting;
        drop(inner);
        for (_, tx) in due {
            tx.send(()).unwrap_or_default();
        }
        due_tasks.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (_, task) in due_tasks {
            task();
        }
    }

    /// Scheduled tasks that have not run yet.
    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Durations of every sleep requested so far.
    pub fn requested_sleeps(&self) -> Vec<u32> {
        self.inner.borrow().requested.clone()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.inner.borrow_mut();
        let at = inner.now_ms + f64::from(ms);
        inner.sleepers.push((at, tx));
        inner.requested.push(ms);
        rx.map(|_| ()).boxed_local()
    }

    fn schedule(&self, ms: u32, task: Box<dyn FnOnce()>) {
        let mut inner = self.inner.borrow_mut();
        let at = inner.now_ms + f64::from(ms);
        inner.tasks.push((at, task));
    }
}

// =============================================================
// Services
// =============================================================

/// How a scripted service answers one request.
pub enum Script<T> {
    Reply(Result<T, ServiceError>),
    /// Wait for the test to send the answer.
    Deferred(oneshot::Receiver<Result<T, ServiceError>>),
    /// Never answer.
    Hang,
}

async fn play<T>(script: Option<Script<T>>) -> Result<T, ServiceError> {
    match script {
        Some(Script::Reply(result)) => result,
        Some(Script::Deferred(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(ServiceError::Request("deferred reply dropped".to_owned()))),
        Some(Script::Hang) => futures::future::pending().await,
        None => Err(ServiceError::Request("no scripted reply".to_owned())),
    }
}

#[derive(Default)]
pub struct ScriptedChatService {
    pub requests: RefCell<Vec<ChatRequest>>,
    scripts: RefCell<VecDeque<Script<ChatReply>>>,
}

impl ScriptedChatService {
    pub fn replying(texts: &[&str]) -> Self {
        let service = Self::default();
        for text in texts {
            service.push(Script::Reply(Ok(ChatReply { response: (*text).to_owned() })));
        }
        service
    }

    pub fn push(&self, script: Script<ChatReply>) {
        self.scripts.borrow_mut().push_back(script);
    }

    /// Queue a reply the test resolves later through the returned sender.
    pub fn defer(&self) -> oneshot::Sender<Result<ChatReply, ServiceError>> {
        let (tx, rx) = oneshot::channel();
        self.push(Script::Deferred(rx));
        tx
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.message.clone()).collect()
    }
}

#[async_trait(?Send)]
impl ChatService for ScriptedChatService {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError> {
        self.requests.borrow_mut().push(request.clone());
        let script = self.scripts.borrow_mut().pop_front();
        play(script).await
    }
}

#[derive(Default)]
pub struct ScriptedAuthService {
    pub logins: RefCell<Vec<LoginRequest>>,
    pub registrations: RefCell<Vec<RegisterRequest>>,
    scripts: RefCell<VecDeque<Script<AuthReply>>>,
}

impl ScriptedAuthService {
    pub fn push(&self, script: Script<AuthReply>) {
        self.scripts.borrow_mut().push_back(script);
    }

    pub fn reply(&self, success: bool, message: Option<&str>) {
        self.push(Script::Reply(Ok(AuthReply { success, message: message.map(str::to_owned) })));
    }

    pub fn fail(&self, err: ServiceError) {
        self.push(Script::Reply(Err(err)));
    }

    pub fn request_count(&self) -> usize {
        self.logins.borrow().len() + self.registrations.borrow().len()
    }
}

#[async_trait(?Send)]
impl AuthService for ScriptedAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthReply, ServiceError> {
        self.logins.borrow_mut().push(request.clone());
        let script = self.scripts.borrow_mut().pop_front();
        play(script).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthReply, ServiceError> {
        self.registrations.borrow_mut().push(request.clone());
        let script = self.scripts.borrow_mut().pop_front();
        play(script).await
    }
}

// =============================================================
// Navigation
// =============================================================

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}
