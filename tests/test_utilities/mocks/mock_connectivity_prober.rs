use async_trait::async_trait;
use printwatch::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock ConnectivityProber for testing: only listed addresses answer
#[derive(Clone, Default)]
pub struct MockConnectivityProber {
    pub reachable: HashSet<String>,
    pub probed: Arc<Mutex<Vec<String>>>,
}

impl MockConnectivityProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reachable(mut self, address: &str) -> Self {
        self.reachable.insert(address.to_string());
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnectivityProber for MockConnectivityProber {
    async fn is_reachable(&self, address: &str) -> bool {
        self.probed.lock().unwrap().push(address.to_string());
        self.reachable.contains(address)
    }
}
