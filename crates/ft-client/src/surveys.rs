use crate::Result as ClientResult;
use crate::client::ApiClient;

use ft_core::{Survey, SurveyStats};

use reqwest::Method;

// =========================================================================
// Survey Operations
// =========================================================================

impl ApiClient {
    /// Fetch all dissatisfaction-survey records
    pub async fn list_surveys(&self) -> ClientResult<Vec<Survey>> {
        let req = self.request(Method::GET, "/api/surveys/all");
        self.execute(req).await
    }

    /// Fetch aggregate survey counts by satisfaction level and category
    pub async fn survey_stats(&self) -> ClientResult<SurveyStats> {
        let req = self.request(Method::GET, "/api/surveys/stats");
        self.execute(req).await
    }
}
