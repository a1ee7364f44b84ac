//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::api::{ApiResult, FilingsApi, QueryParams};

mock! {
    pub FilingsBackend {}

    #[async_trait]
    impl FilingsApi for FilingsBackend {
        async fn call(&self, endpoint: &str, params: &[(String, String)]) -> ApiResult<Value>;
    }
}

fn same_call(
    endpoint: &str,
    params: &[(String, String)],
    expected_endpoint: &str,
    expected_params: &[(String, String)],
) -> bool {
    endpoint == expected_endpoint && params == expected_params
}

impl MockFilingsBackend {
    /// Expects exactly one call to `endpoint` with `params` and answers it
    /// with `response`.
    pub fn expect_endpoint(
        &mut self,
        endpoint: impl Into<String>,
        params: &[(&str, &str)],
        response: ApiResult<Value>,
    ) -> &mut Self {
        let endpoint: String = endpoint.into();
        let expected: QueryParams = params
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        self.expect_call()
            .withf(move |called, called_params| {
                same_call(called, called_params, &endpoint, &expected)
            })
            .times(1)
            .return_const(response);

        self
    }
}
