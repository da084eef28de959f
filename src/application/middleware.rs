// src/application/middleware.rs
use crate::domain::params::MiddlewareParams;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::{future::Future, sync::Arc};

/// Continuation handed to a middleware: the rest of the pipeline, ending in the
/// actual ORM operation. It must be run exactly once.
pub struct Next<'a, T> {
    run: Box<dyn FnOnce(MiddlewareParams) -> BoxFuture<'a, T> + Send + 'a>,
}

impl<'a, T> Next<'a, T> {
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce(MiddlewareParams) -> BoxFuture<'a, T> + Send + 'a,
    {
        Self { run: Box::new(run) }
    }

    pub fn run(self, params: MiddlewareParams) -> BoxFuture<'a, T> {
        (self.run)(params)
    }
}

/// A stage in the host's middleware pipeline.
///
/// Implementations may inspect or rewrite the params, and must pass them on
/// through `next`, returning whatever the continuation produced.
#[async_trait]
pub trait Middleware<T: Send + 'static>: Send + Sync {
    async fn handle(&self, params: MiddlewareParams, next: Next<'_, T>) -> T;
}

type Terminal<T> = Arc<dyn Fn(MiddlewareParams) -> BoxFuture<'static, T> + Send + Sync>;

/// Ordered middleware stack in front of a terminal operation.
pub struct MiddlewareChain<T: Send + 'static> {
    middlewares: Vec<Arc<dyn Middleware<T>>>,
    terminal: Terminal<T>,
}

impl<T: Send + 'static> MiddlewareChain<T> {
    pub fn new<F, Fut>(terminal: F) -> Self
    where
        F: Fn(MiddlewareParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self {
            middlewares: Vec::new(),
            terminal: Arc::new(move |params| Box::pin(terminal(params))),
        }
    }

    #[must_use]
    pub fn with(mut self, middleware: impl Middleware<T> + 'static) -> Self {
        self.push(Arc::new(middleware));
        self
    }

    pub fn push(&mut self, middleware: Arc<dyn Middleware<T>>) {
        self.middlewares.push(middleware);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// Run `params` through every middleware in insertion order, then the
    /// terminal operation.
    pub async fn run(&self, params: MiddlewareParams) -> T {
        self.dispatch(0, params).await
    }

    fn dispatch(&self, index: usize, params: MiddlewareParams) -> BoxFuture<'_, T> {
        match self.middlewares.get(index) {
            Some(middleware) => {
                let next = Next::new(move |params| self.dispatch(index + 1, params));
                middleware.handle(params, next)
            }
            None => (self.terminal)(params),
        }
    }
}
