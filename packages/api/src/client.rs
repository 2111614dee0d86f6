use reqwest::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shop::{
    Address, Credentials, NewAccount, NewAddress, NewProduct, Product, Role, ShopConfig,
    SignInResponse, TokenStore,
};

use crate::error::ApiError;

/// Header carrying the auth token, both on requests and on the sign-in response.
pub const AUTH_HEADER: &str = "x-auth-token";

/// A successful sign-in: the token to store and the role to record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    pub token: String,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    /// Refuse to send without a token.
    Required,
    /// Attach the token if one is stored.
    Optional,
    Anonymous,
}

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    http: reqwest::Client,
    base_url: String,
    tokens: T,
    fallback_token: Option<String>,
}

impl<T: TokenStore> ApiClient<T> {
    pub fn new(base_url: &str, tokens: T) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            fallback_token: None,
        }
    }

    pub fn from_config(config: &ShopConfig, tokens: T) -> Self {
        Self::new(&config.api.base_url, tokens)
            .with_fallback_token(config.auth.fallback_token.clone())
    }

    /// Token stored when the sign-in response carries none.
    pub fn with_fallback_token(mut self, token: Option<String>) -> Self {
        self.fallback_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    // --- Auth ---

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignedIn, ApiError> {
        let request = self.sign_in_request(credentials)?;
        let response = self.send(request).await?;
        let header_token = response
            .headers()
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;
        // An empty or non-JSON body is tolerated; the role then defaults to user.
        let parsed: SignInResponse = serde_json::from_str(&body).unwrap_or_default();
        let signed_in = resolve_sign_in(
            header_token.as_deref(),
            parsed,
            self.fallback_token.as_deref(),
        )?;
        tracing::info!(role = ?signed_in.role, "signed in");
        Ok(signed_in)
    }

    pub async fn sign_up(&self, account: &NewAccount) -> Result<(), ApiError> {
        let request = self.sign_up_request(account)?;
        self.send(request).await?;
        Ok(())
    }

    // --- Products ---

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.list_products_request()?;
        self.json(request).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let request = self.get_product_request(id)?;
        self.json(request).await
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let request = self.list_categories_request()?;
        self.json(request).await
    }

    /// Create a product. Returns the stored product, or the payload itself when
    /// the server answers with just the new id.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let request = self.create_product_request(product)?;
        let body = self.send(request).await?.text().await?;
        Ok(product_from_body(&body, product))
    }

    pub async fn update_product(&self, id: &str, product: &NewProduct) -> Result<Product, ApiError> {
        let request = self.update_product_request(id, product)?;
        let body = self.send(request).await?.text().await?;
        let mut saved = product_from_body(&body, product);
        if saved.id.is_empty() {
            saved.id = id.to_string();
        }
        Ok(saved)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let request = self.delete_product_request(id)?;
        self.send(request).await?;
        Ok(())
    }

    // --- Addresses ---

    pub async fn list_addresses(&self) -> Result<Vec<Address>, ApiError> {
        let request = self.list_addresses_request()?;
        self.json(request).await
    }

    pub async fn create_address(&self, address: &NewAddress) -> Result<(), ApiError> {
        let request = self.create_address_request(address)?;
        self.send(request).await?;
        Ok(())
    }

    // --- Request builders ---

    pub(crate) fn sign_in_request(&self, credentials: &Credentials) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::POST, "/auth/signin", Auth::Anonymous)?
            .json(credentials)
            .build()?)
    }

    pub(crate) fn sign_up_request(&self, account: &NewAccount) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::POST, "/auth/signup", Auth::Anonymous)?
            .json(account)
            .build()?)
    }

    pub(crate) fn list_products_request(&self) -> Result<Request, ApiError> {
        Ok(self.builder(Method::GET, "/products", Auth::Required)?.build()?)
    }

    pub(crate) fn get_product_request(&self, id: &str) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::GET, &format!("/products/{id}"), Auth::Optional)?
            .build()?)
    }

    pub(crate) fn list_categories_request(&self) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::GET, "/products/categories", Auth::Optional)?
            .build()?)
    }

    pub(crate) fn create_product_request(&self, product: &NewProduct) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::POST, "/products", Auth::Required)?
            .json(product)
            .build()?)
    }

    pub(crate) fn update_product_request(
        &self,
        id: &str,
        product: &NewProduct,
    ) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::PUT, &format!("/products/{id}"), Auth::Required)?
            .json(product)
            .build()?)
    }

    pub(crate) fn delete_product_request(&self, id: &str) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::DELETE, &format!("/products/{id}"), Auth::Required)?
            .build()?)
    }

    pub(crate) fn list_addresses_request(&self) -> Result<Request, ApiError> {
        Ok(self.builder(Method::GET, "/addresses", Auth::Required)?.build()?)
    }

    pub(crate) fn create_address_request(&self, address: &NewAddress) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::POST, "/addresses", Auth::Required)?
            .json(address)
            .build()?)
    }

    fn builder(&self, method: Method, path: &str, auth: Auth) -> Result<RequestBuilder, ApiError> {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        let token = self.tokens.get().filter(|t| !t.is_empty());
        match (auth, token) {
            (Auth::Required, None) => {
                tracing::warn!(path, "no auth token stored; request not sent");
                Err(ApiError::MissingToken)
            }
            (Auth::Required | Auth::Optional, Some(token)) => {
                Ok(builder.header(AUTH_HEADER, token))
            }
            _ => Ok(builder),
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "api request");

        let response = self.http.execute(request).await.map_err(|err| {
            tracing::warn!(%method, %url, "request failed: {err}");
            ApiError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(%method, %url, status = status.as_u16(), "api error: {err}");
        Err(err)
    }

    async fn json<R: DeserializeOwned>(&self, request: Request) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<R>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// Pick the token for a successful sign-in: the response header, then a
/// `token` field in the body, then the configured fallback.
pub(crate) fn resolve_sign_in(
    header_token: Option<&str>,
    body: SignInResponse,
    fallback: Option<&str>,
) -> Result<SignedIn, ApiError> {
    let token = header_token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| body.token.clone().filter(|t| !t.trim().is_empty()))
        .or_else(|| fallback.map(str::to_string))
        .ok_or(ApiError::MissingToken)?;
    Ok(SignedIn {
        token,
        role: Role::from_roles(&body.roles),
    })
}

/// Interpret a create/update response body as the saved product. Falls back
/// to the submitted payload, taking a bare id string as the new id.
pub(crate) fn product_from_body(body: &str, submitted: &NewProduct) -> Product {
    if let Ok(product) = serde_json::from_str::<Product>(body) {
        if !product.name.is_empty() {
            return product;
        }
    }
    let id = serde_json::from_str::<String>(body)
        .unwrap_or_else(|_| body.trim().to_string());
    Product {
        id,
        name: submitted.name.clone(),
        category: submitted.category.clone(),
        price: submitted.price,
        description: submitted.description.clone(),
        manufacturer: submitted.manufacturer.clone(),
        available_items: submitted.available_items,
        image_url: submitted.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::{MemoryTokenStore, SessionService};

    const BASE: &str = "http://127.0.0.1:9/api/";

    fn header(request: &Request) -> Option<String> {
        request
            .headers()
            .get(AUTH_HEADER)
            .map(|v| v.to_str().unwrap().to_string())
    }

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Ladies Watch".into(),
            category: "Watches".into(),
            price: 1998.0,
            description: "It's not a watch, it's your partner!".into(),
            manufacturer: "Titan".into(),
            available_items: 4,
            image_url: "https://placehold.jp/400x400.png".into(),
        }
    }

    #[test]
    fn test_urls_join_base() {
        let client = ApiClient::new(BASE, MemoryTokenStore::with_token("t"));
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api");
        let request = client.get_product_request("abc").unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:9/api/products/abc");
        assert_eq!(request.method(), Method::GET);
    }

    #[test]
    fn test_authenticated_requests_carry_token() {
        let client = ApiClient::new(BASE, MemoryTokenStore::with_token("abc123"));
        for request in [
            client.list_products_request().unwrap(),
            client.list_addresses_request().unwrap(),
            client.delete_product_request("p1").unwrap(),
            client.update_product_request("p1", &new_product()).unwrap(),
        ] {
            assert_eq!(header(&request).as_deref(), Some("abc123"));
        }
        let create = client.create_product_request(&new_product()).unwrap();
        assert_eq!(create.method(), Method::POST);
        assert_eq!(create.url().path(), "/api/products");
    }

    #[test]
    fn test_required_token_short_circuits() {
        let client = ApiClient::new(BASE, MemoryTokenStore::new());
        assert_eq!(
            client.list_products_request().unwrap_err(),
            ApiError::MissingToken
        );
        assert_eq!(
            client.delete_product_request("p1").unwrap_err(),
            ApiError::MissingToken
        );
        assert_eq!(
            client.list_addresses_request().unwrap_err(),
            ApiError::MissingToken
        );
    }

    #[tokio::test]
    async fn test_list_products_without_token_sends_nothing() {
        let client = ApiClient::new(BASE, MemoryTokenStore::new());
        let err = client.list_products().await.unwrap_err();
        assert_eq!(err, ApiError::MissingToken);
        assert!(err.requires_login());
    }

    #[test]
    fn test_optional_token_endpoints() {
        let anonymous = ApiClient::new(BASE, MemoryTokenStore::new());
        let request = anonymous.list_categories_request().unwrap();
        assert_eq!(header(&request), None);
        let request = anonymous.get_product_request("p1").unwrap();
        assert_eq!(header(&request), None);

        let signed_in = ApiClient::new(BASE, MemoryTokenStore::with_token("t"));
        let request = signed_in.list_categories_request().unwrap();
        assert_eq!(header(&request).as_deref(), Some("t"));
    }

    #[test]
    fn test_auth_requests_are_anonymous() {
        let client = ApiClient::new(BASE, MemoryTokenStore::with_token("stale"));
        let request = client
            .sign_in_request(&Credentials {
                username: "a@b.co".into(),
                password: "pw".into(),
            })
            .unwrap();
        assert_eq!(header(&request), None);
        assert_eq!(request.url().path(), "/api/auth/signin");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["username"], "a@b.co");
    }

    #[test]
    fn test_resolve_sign_in_sources() {
        let body = SignInResponse {
            roles: vec!["ADMIN".into()],
            token: Some("body-token".into()),
            ..Default::default()
        };
        let signed = resolve_sign_in(Some("header-token"), body.clone(), None).unwrap();
        assert_eq!(signed.token, "header-token");
        assert_eq!(signed.role, Role::Admin);

        let signed = resolve_sign_in(None, body, None).unwrap();
        assert_eq!(signed.token, "body-token");

        let bare = SignInResponse::default();
        let signed = resolve_sign_in(Some(" "), bare.clone(), Some("fallback")).unwrap();
        assert_eq!(signed.token, "fallback");
        assert_eq!(signed.role, Role::User);

        assert_eq!(resolve_sign_in(None, bare, None), Err(ApiError::MissingToken));
    }

    #[test]
    fn test_fallback_from_config() {
        let mut config = ShopConfig::default().with_base_url(BASE);
        config.auth.fallback_token = Some("fixed".into());
        let client = ApiClient::from_config(&config, MemoryTokenStore::new());
        assert_eq!(client.fallback_token.as_deref(), Some("fixed"));

        let blank = ApiClient::new(BASE, MemoryTokenStore::new()).with_fallback_token(Some("".into()));
        assert_eq!(blank.fallback_token, None);
    }

    #[test]
    fn test_product_from_body() {
        let submitted = new_product();
        let full = r#"{"id":"p9","name":"Ladies Watch","category":"Watches","price":1998}"#;
        assert_eq!(product_from_body(full, &submitted).id, "p9");

        let bare = product_from_body("\"p10\"", &submitted);
        assert_eq!(bare.id, "p10");
        assert_eq!(bare.name, "Ladies Watch");
        assert_eq!(bare.available_items, 4);

        assert_eq!(product_from_body("", &submitted).id, "");
    }

    #[test]
    fn test_login_then_catalog_uses_token() {
        let tokens = MemoryTokenStore::new();
        let mut session = SessionService::new(tokens.clone());
        let client = ApiClient::new(BASE, tokens);

        let body: SignInResponse =
            serde_json::from_str(r#"{"id":"u1","email":"admin@demo.com","roles":["ADMIN"]}"#)
                .unwrap();
        let signed = resolve_sign_in(Some("tok-1"), body, None).unwrap();
        session.login(signed.role, &signed.token);

        assert!(session.current().is_admin());
        let request = client.list_products_request().unwrap();
        assert_eq!(header(&request).as_deref(), Some("tok-1"));

        session.logout();
        assert_eq!(
            client.list_products_request().unwrap_err(),
            ApiError::MissingToken
        );
    }
}
