// tests/support/builders.rs
use orm_slug::{Action, MiddlewareParams};
use serde_json::{Map, Value, json};

pub struct ParamsBuilder {
    action: Action,
    model: Option<String>,
    data: Map<String, Value>,
    in_transaction: bool,
}

impl ParamsBuilder {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            model: None,
            data: Map::new(),
            in_transaction: false,
        }
    }

    pub fn create() -> Self {
        Self::new(Action::Create)
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn in_transaction(mut self) -> Self {
        self.in_transaction = true;
        self
    }

    pub fn build(self) -> MiddlewareParams {
        let mut params = MiddlewareParams::new(self.action, json!({ "data": self.data }))
            .in_transaction(self.in_transaction);
        if let Some(model) = self.model {
            params = params.with_model(model);
        }
        params
    }
}
