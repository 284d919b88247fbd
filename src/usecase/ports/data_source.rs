use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::domain::entities::page::PageEnvelope;

/// Request parameters as they go over the wire: a flat JSON object.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;

/// Stock row record: a JSON object, read by string key.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// A row the table can display. The table never assumes a concrete shape;
/// it only reads fields named by column keys.
pub trait TableRecord: Clone + PartialEq + 'static {
    fn field(&self, key: &str) -> Option<serde_json::Value>;
}

impl TableRecord for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key).cloned()
    }
}

type PageFuture<T> = Pin<Box<dyn Future<Output = anyhow::Result<PageEnvelope<T>>>>>;

/// The injected remote-data contract: merged request parameters in, page
/// envelope out. How it reaches a network is the caller's business.
#[derive(Clone)]
pub struct PageSource<T> {
    fetch: Rc<dyn Fn(ParamMap) -> PageFuture<T>>,
}

impl<T> PageSource<T> {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(ParamMap) -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<PageEnvelope<T>>> + 'static,
    {
        Self {
            fetch: Rc::new(move |params| Box::pin(fetch(params))),
        }
    }

    pub fn fetch(&self, params: ParamMap) -> PageFuture<T> {
        (self.fetch)(params)
    }
}

impl<T> PartialEq for PageSource<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fetch, &other.fetch)
    }
}
