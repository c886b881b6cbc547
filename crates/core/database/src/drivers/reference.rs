use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::Report;

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
    }
);

impl ReferenceDb {
    /// Reset all collections
    pub async fn clear(&self) {
        self.reports.lock().await.clear();
    }
}
