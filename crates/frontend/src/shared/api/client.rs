use contracts::domain::common::Resource;
use serde::Serialize;

use super::envelope::{decode_list, decode_one, server_message};
use super::error::ApiError;
use super::payload::Payload;
use super::transport::{HttpRequest, Method, Transport};
use crate::system::auth::{AuthContext, AuthSource};

/// One backend call, used for fallback messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Fetch,
    Create,
    Update,
    Delete,
    ChangeStatus,
}

impl Operation {
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ChangeStatus => "update the status of",
        }
    }

    /// "Failed to create product", "Failed to load products".
    pub fn fallback<R: Resource>(self) -> String {
        let noun = match self {
            Operation::Load => R::list_name(),
            _ => R::element_name(),
        };
        format!("Failed to {} {}", self.verb(), noun.to_lowercase())
    }
}

/// REST client for every resource of the backend.
#[derive(Clone)]
pub struct ApiClient<T> {
    base: String,
    auth: AuthSource,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, auth: AuthSource, transport: T) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            auth,
            transport,
        }
    }

    /// `base + template` with `{id}` replaced by the url-encoded id.
    pub fn url(&self, template: &str, id: Option<&str>) -> String {
        let path = match id {
            Some(id) => template.replace("{id}", &urlencoding::encode(id)),
            None => template.to_string(),
        };
        format!("{}{}", self.base, path)
    }

    fn route<R: Resource>(
        operation: Operation,
        route: Option<&'static str>,
    ) -> Result<&'static str, ApiError> {
        route.ok_or(ApiError::Unsupported {
            operation: operation.verb(),
            resource: R::list_name(),
        })
    }

    async fn call<R: Resource>(
        &self,
        operation: Operation,
        method: Method,
        url: String,
        body: Payload,
    ) -> Result<String, ApiError> {
        let auth: AuthContext = (self.auth)();
        let request = HttpRequest {
            method,
            url,
            bearer: auth.token().map(str::to_string),
            body,
        };
        log::debug!("{} {:?} {}", R::resource_index(), request.method, request.url);

        let response = self.transport.send(request).await?;
        if response.ok() {
            Ok(response.body)
        } else {
            Err(ApiError::Status {
                status: response.status,
                message: server_message(&response.body)
                    .unwrap_or_else(|| operation.fallback::<R>()),
            })
        }
    }

    /// Whole collection; `query` is an already encoded query string.
    pub async fn list<R: Resource>(&self, query: &str) -> Result<Vec<R>, ApiError> {
        let mut url = self.url(R::endpoints().list, None);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        let body = self
            .call::<R>(Operation::Load, Method::Get, url, Payload::Empty)
            .await?;
        decode_list(&body)
    }

    pub async fn get<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let route = Self::route::<R>(Operation::Fetch, R::endpoints().item)?;
        let body = self
            .call::<R>(Operation::Fetch, Method::Get, self.url(route, Some(id)), Payload::Empty)
            .await?;
        decode_one(&body)
    }

    pub async fn create<R: Resource>(&self, payload: Payload) -> Result<(), ApiError> {
        let route = Self::route::<R>(Operation::Create, R::endpoints().create)?;
        self.call::<R>(Operation::Create, Method::Post, self.url(route, None), payload)
            .await
            .map(drop)
    }

    pub async fn update<R: Resource>(&self, id: &str, payload: Payload) -> Result<(), ApiError> {
        let route = Self::route::<R>(Operation::Update, R::endpoints().update)?;
        self.call::<R>(Operation::Update, Method::Put, self.url(route, Some(id)), payload)
            .await
            .map(drop)
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let route = Self::route::<R>(Operation::Delete, R::endpoints().delete)?;
        self.call::<R>(Operation::Delete, Method::Delete, self.url(route, Some(id)), Payload::Empty)
            .await
            .map(drop)
    }

    /// `PUT .../{id}/status` with a typed body.
    pub async fn change_status<R: Resource, B: Serialize>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let route = Self::route::<R>(Operation::ChangeStatus, R::endpoints().status)?;
        let payload = Payload::json(body)?;
        self.call::<R>(Operation::ChangeStatus, Method::Put, self.url(route, Some(id)), payload)
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use contracts::domain::a003_order::{Order, OrderStatusUpdate};
    use contracts::domain::a004_promotor::Promotor;
    use contracts::domain::a011_payout::AggregatedPayout;
    use futures::executor::block_on;
    use serde_json::json;

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new("http://api.test/", || AuthContext::bearer("t0k"), mock.clone())
    }

    #[test]
    fn ids_are_encoded_into_templates() {
        let client = client(&MockTransport::default());
        assert_eq!(
            client.url("/api/promotor/update/{id}", Some("a b/c")),
            "http://api.test/api/promotor/update/a%20b%2Fc"
        );
    }

    #[test]
    fn list_sends_query_and_bearer() {
        let mock = MockTransport::default();
        mock.respond(200, r#"{"orders":[{"_id":"o1","orderId":"FST-1"}]}"#);

        let orders = block_on(client(&mock).list::<Order>("status=pending")).unwrap();

        assert_eq!(orders[0].order_id, "FST-1");
        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/orders?status=pending");
        assert_eq!(sent[0].bearer.as_deref(), Some("t0k"));
    }

    #[test]
    fn anonymous_requests_carry_no_bearer() {
        let mock = MockTransport::default();
        mock.respond(200, "[]");
        let client = ApiClient::new("http://api.test", AuthContext::anonymous, mock.clone());
        block_on(client.list::<Order>("")).unwrap();
        assert_eq!(mock.requests()[0].bearer, None);
    }

    #[test]
    fn error_body_message_or_operation_fallback() {
        let mock = MockTransport::default();
        mock.respond(400, r#"{"message":"Referral code taken"}"#);
        mock.respond(500, "Internal Server Error");
        let client = client(&mock);

        let first = block_on(client.create::<Promotor>(Payload::Empty)).unwrap_err();
        assert_eq!(first.user_message("x"), "Referral code taken");

        let second = block_on(client.delete::<Promotor>("p1")).unwrap_err();
        assert_eq!(
            second,
            ApiError::Status {
                status: 500,
                message: "Failed to delete promotor".into()
            }
        );
        assert_eq!(mock.requests()[1].url, "http://api.test/api/promotor/delete/p1");
    }

    #[test]
    fn unsupported_routes_do_not_hit_the_network() {
        let mock = MockTransport::default();
        let err = block_on(client(&mock).delete::<Order>("o1")).unwrap_err();
        assert!(matches!(err, ApiError::Unsupported { operation: "delete", .. }));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn status_changes_use_the_resource_route() {
        let mock = MockTransport::default();
        mock.respond(200, "{}");
        mock.respond(200, "{}");
        let client = client(&mock);

        let body = OrderStatusUpdate {
            status: "packed".into(),
            note: None,
        };
        block_on(client.change_status::<Order, _>("o1", &body)).unwrap();
        block_on(client.change_status::<AggregatedPayout, _>("p9", &json!({"status": "paid"})))
            .unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "http://api.test/api/orders/o1/status");
        assert_eq!(sent[0].body, Payload::Json(json!({ "status": "packed" })));
        assert_eq!(sent[1].url, "http://api.test/api/payouts/promotor/p9/status");
    }

    #[test]
    fn fallbacks_name_the_resource() {
        assert_eq!(Operation::Load.fallback::<Order>(), "Failed to load orders");
        assert_eq!(Operation::Create.fallback::<Promotor>(), "Failed to create promotor");
    }
}
