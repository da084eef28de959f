// tests/support/helpers.rs
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

use orm_slug::{MiddlewareChain, MiddlewareParams, SlugMiddleware};
use serde_json::{Value, json};

static TRACING: Lazy<()> = Lazy::new(orm_slug::infrastructure::init_tracing);

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Params seen by the terminal operation, in call order.
pub type Captured = Arc<Mutex<Vec<MiddlewareParams>>>;

/// Chain of `middleware` in front of a terminal that records what it received
/// and answers with `{"ok": true, "data": <args.data>}`.
pub fn capturing_chain(middleware: SlugMiddleware) -> (MiddlewareChain<Value>, Captured) {
    let captured: Captured = Arc::default();
    let sink = Arc::clone(&captured);
    let chain = MiddlewareChain::new(move |params: MiddlewareParams| {
        let sink = Arc::clone(&sink);
        async move {
            let data = params.args.get("data").cloned().unwrap_or(Value::Null);
            sink.lock().unwrap().push(params);
            json!({ "ok": true, "data": data })
        }
    })
    .with(middleware);
    (chain, captured)
}
