// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the profile, upload and category ports.
//!
//! Speaks JSON over `reqwest`. Authenticated calls send the access token as a
//! bearer credential. Non-success responses are mapped to
//! [`ApiError::Status`] carrying the server's `message` (or `detail`) text
//! when the body provides one.

use crate::application::port::{ApiError, ApiFuture, CategoryApi, ProfileApi, UploadApi};
use crate::config::MAX_AVATAR_DOWNLOAD_BYTES;
use crate::domain::category::{Category, CategoryId, CategoryType, CategoryTypeId};
use crate::domain::profile::{AccessToken, ProfileValues, UserProfile};
use futures_util::StreamExt;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedServices/", env!("CARGO_PKG_VERSION"));

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "image";

/// Remote backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl ProfileApi for HttpBackend {
    fn fetch_profile(&self, token: &AccessToken) -> ApiFuture<UserProfile> {
        let request = self
            .client
            .get(self.endpoint("/users/profile"))
            .bearer_auth(token.expose());

        Box::pin(async move {
            let response = request.send().await?;
            let dto: UserDto = decode(response).await?;
            Ok(dto.into())
        })
    }

    fn update_user(&self, token: &AccessToken, values: &ProfileValues) -> ApiFuture<UserProfile> {
        let request = self
            .client
            .put(self.endpoint("/users/profile"))
            .bearer_auth(token.expose())
            .json(&UpdateUserDto::from(values));

        Box::pin(async move {
            let response = request.send().await?;
            let dto: UserDto = decode(response).await?;
            Ok(dto.into())
        })
    }
}

impl UploadApi for HttpBackend {
    fn upload_image(&self, path: PathBuf) -> ApiFuture<String> {
        let client = self.client.clone();
        let url = self.endpoint("/upload");

        Box::pin(async move {
            let bytes = tokio::fs::read(&path).await?;
            let mime = super::file::sniff_mime(&bytes);
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name(&path))
                .mime_str(mime)?;
            let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

            let response = client.post(url).multipart(form).send().await?;
            let dto: UploadDto = decode(response).await?;
            dto.into_url()
        })
    }

    /// Shares the client's timeout. Image hosts are usually not the API
    /// host, so `url` is used as given.
    fn download_image(&self, url: String) -> ApiFuture<Vec<u8>> {
        let request = self.client.get(url);
        Box::pin(async move {
            let response = request.send().await?;
            read_limited(response, MAX_AVATAR_DOWNLOAD_BYTES).await
        })
    }
}

impl CategoryApi for HttpBackend {
    fn fetch_category_types(&self) -> ApiFuture<Vec<CategoryType>> {
        let request = self.client.get(self.endpoint("/category-types"));
        Box::pin(async move {
            let response = request.send().await?;
            let list: ListDto<CategoryTypeDto> = decode(response).await?;
            Ok(list.into_vec().into_iter().map(Into::into).collect())
        })
    }

    fn fetch_categories(&self) -> ApiFuture<Vec<Category>> {
        let request = self.client.get(self.endpoint("/categories"));
        Box::pin(async move {
            let response = request.send().await?;
            let list: ListDto<CategoryDto> = decode(response).await?;
            Ok(list.into_vec().into_iter().map(Into::into).collect())
        })
    }
}

/// Reads a response body, refusing bodies larger than `max_bytes`.
async fn read_limited(response: Response, max_bytes: usize) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            code: status.as_u16(),
            message: None,
        });
    }
    let too_large = || ApiError::Decode(format!("image larger than {max_bytes} bytes"));
    if response
        .content_length()
        .is_some_and(|len| len > max_bytes as u64)
    {
        return Err(too_large());
    }

    let mut stream = response.bytes_stream();
    let mut bytes = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > max_bytes {
            return Err(too_large());
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Checks the status and decodes a JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            code: status.as_u16(),
            message: error_message(&body),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extracts a human-readable message from an error body.
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        detail: Option<String>,
        error: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.detail)
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string())
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct UserDto {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    dob: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        Self {
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            dob: dto.dob.unwrap_or_default(),
            avatar: dto.avatar,
        }
    }
}

#[derive(Debug, Serialize)]
struct UpdateUserDto<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    dob: &'a str,
}

impl<'a> From<&'a ProfileValues> for UpdateUserDto<'a> {
    fn from(values: &'a ProfileValues) -> Self {
        Self {
            first_name: &values.first_name,
            last_name: &values.last_name,
            email: &values.email,
            phone: &values.phone,
            dob: &values.dob,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadDto {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl UploadDto {
    fn into_url(self) -> Result<String, ApiError> {
        self.url
            .or(self.image_url)
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("upload response has no url".to_string()))
    }
}

/// Lists arrive either bare or wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListDto<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListDto<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListDto::Bare(items) | ListDto::Wrapped { data: items } => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryTypeDto {
    id: u64,
    name: String,
}

impl From<CategoryTypeDto> for CategoryType {
    fn from(dto: CategoryTypeDto) -> Self {
        Self {
            id: CategoryTypeId(dto.id),
            name: dto.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    id: u64,
    category_name: String,
    category_type: u64,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: CategoryId(dto.id),
            category_name: dto.category_name,
            category_type: CategoryTypeId(dto.category_type),
        }
    }
}
