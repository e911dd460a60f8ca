//! Scripted page source for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::PageSource;
use crate::error::LoadError;
use crate::models::Product;

/// Replays canned responses in order and records every requested offset
pub struct ScriptedSource {
    responses: RefCell<VecDeque<Result<Vec<Product>, LoadError>>>,
    requested: RefCell<Vec<u32>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Vec<Product>, LoadError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, offset: u32) -> Result<Vec<Product>, LoadError> {
        self.requested.borrow_mut().push(offset);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(LoadError::Network("script exhausted".to_string())))
    }
}
