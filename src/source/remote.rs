use crate::{
    error::FetchError,
    model::{api::ErrorDto, course::Course},
    source::CatalogSource,
};

/// Lessons endpoint serving the catalog as a JSON array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    url: String,
    image_host: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, image_host: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            image_host: image_host.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for RemoteSource {
    #[cfg(feature = "web")]
    async fn fetch(&self) -> Result<Vec<Course>, FetchError> {
        use reqwasm::http::Request;

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        check_status(status, &body)?;
        decode_lessons(&body, &self.image_host)
    }

    #[cfg(not(feature = "web"))]
    async fn fetch(&self) -> Result<Vec<Course>, FetchError> {
        Err(FetchError::Unsupported)
    }
}

/// Maps a non-2xx status to an error, using the API's error body for the message when present
pub fn check_status(status: u16, body: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };

    Err(FetchError::Status { status, message })
}

/// Decodes a lessons payload, resolving relative image paths against the image host
pub fn decode_lessons(body: &str, image_host: &str) -> Result<Vec<Course>, FetchError> {
    let mut courses: Vec<Course> = serde_json::from_str(body)?;

    for course in &mut courses {
        course.image_url = resolve_image_url(image_host, &course.image_url);
    }

    Ok(courses)
}

fn resolve_image_url(image_host: &str, image_url: &str) -> String {
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        return image_url.to_string();
    }

    if image_url.starts_with('/') {
        format!("{}{}", image_host, image_url)
    } else {
        format!("{}/{}", image_host, image_url)
    }
}
