use async_trait::async_trait;
use printwatch::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DeviceQueryClient for testing: answers with canned descriptions
#[derive(Clone, Default)]
pub struct MockDeviceQueryClient {
    pub descriptions: HashMap<String, DeviceDescription>,
    pub queried: Arc<Mutex<Vec<String>>>,
}

impl MockDeviceQueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, address: &str, description: DeviceDescription) -> Self {
        self.descriptions.insert(address.to_string(), description);
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceQueryClient for MockDeviceQueryClient {
    async fn query(&self, address: &str) -> Option<DeviceDescription> {
        self.queried.lock().unwrap().push(address.to_string());
        self.descriptions.get(address).cloned()
    }
}
