//! `/attachment` upload, listing, and download.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::debug;

use sms_core::error::{AppError, ErrorKind};
use sms_core::result::AppResult;
use sms_entity::attachment::{Attachment, RelatedType};
use sms_http::{Download, RequestPipeline};

/// A file to attach to a record.
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type; the backend sniffs it when absent.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Bytes,
    /// ID of the record the file belongs to.
    pub related_id: String,
    /// Kind of record the file belongs to.
    pub related_type: RelatedType,
    /// Uploading user.
    pub upload_user_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListParams<'a> {
    related_id: &'a str,
    related_type: RelatedType,
}

const NO_QUERY: [(&str, &str); 0] = [];

/// Attachment endpoints.
#[derive(Debug, Clone)]
pub struct AttachmentApi {
    pipeline: Arc<RequestPipeline>,
}

impl AttachmentApi {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Lists the files attached to a record.
    pub async fn list(
        &self,
        related_id: &str,
        related_type: RelatedType,
    ) -> AppResult<Vec<Attachment>> {
        self.pipeline
            .get_query(
                "/attachment/list",
                &ListParams {
                    related_id,
                    related_type,
                },
            )
            .await
    }

    /// Fetches attachment metadata.
    pub async fn get(&self, id: &str) -> AppResult<Attachment> {
        self.pipeline.get(&format!("/attachment/{id}")).await
    }

    /// Uploads a file as multipart form data.
    pub async fn upload(&self, upload: AttachmentUpload) -> AppResult<Attachment> {
        debug!(
            file = %upload.file_name,
            size = upload.bytes.len(),
            related_type = %upload.related_type,
            "Uploading attachment"
        );
        let mut part = Part::bytes(upload.bytes.to_vec()).file_name(upload.file_name.clone());
        if let Some(content_type) = &upload.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Validation,
                    format!("Invalid content type '{content_type}'"),
                    e,
                )
            })?;
        }

        let form = Form::new()
            .part("file", part)
            .text("relatedId", upload.related_id)
            .text("relatedType", upload.related_type.as_str())
            .text("uploadUserId", upload.upload_user_id);

        self.pipeline
            .post_multipart("/attachment/upload", form)
            .await
    }

    /// Downloads the file contents.
    pub async fn download(&self, id: &str) -> AppResult<Download> {
        self.pipeline
            .download(&format!("/attachment/download/{id}"), &NO_QUERY)
            .await
    }

    /// Deletes an attachment.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        self.pipeline.delete(&format!("/attachment/{id}")).await
    }
}
