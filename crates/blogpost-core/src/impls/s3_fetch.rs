//! S3ObjectFetcher - 本番用の ObjectFetcher（aws-sdk-s3）

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use futures::stream;

use crate::config::StorageConfig;
use crate::domain::{ContentStream, FetchError, ObjectRequest, ObjectResponse};
use crate::ports::ObjectFetcher;

/// S3ObjectFetcher は S3 の GetObject を 1 回呼ぶだけの実装
///
/// リトライ・タイムアウトは SDK の設定に任せます。
#[derive(Debug, Clone)]
pub struct S3ObjectFetcher {
    client: aws_sdk_s3::Client,
}

impl S3ObjectFetcher {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// 設定の region で client を作る
    ///
    /// 認証情報や `AWS_ENDPOINT_URL` は aws-config の標準の解決順に従います。
    pub async fn from_config(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(aws_sdk_s3::Client::new(&sdk_config))
    }
}

#[async_trait::async_trait]
impl ObjectFetcher for S3ObjectFetcher {
    #[tracing::instrument(skip(self, request), fields(bucket = %request.bucket_name, key = %request.key))]
    async fn fetch(&self, request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        let resp = self
            .client
            .get_object()
            .bucket(&request.bucket_name)
            .key(&request.key)
            .send()
            .await
            .map_err(|err| classify(request, err))?;

        let content_length = to_content_length(resp.content_length());
        tracing::debug!(?content_length, "got object");

        Ok(Some(ObjectResponse {
            key: request.key.clone(),
            bucket_name: request.bucket_name.clone(),
            content_length,
            content_stream: body_stream(resp.body),
        }))
    }
}

fn classify(request: &ObjectRequest, err: SdkError<GetObjectError>) -> FetchError {
    match err.as_service_error() {
        Some(service_err) if service_err.is_no_such_key() => FetchError::NotFound {
            bucket: request.bucket_name.clone(),
            key: request.key.clone(),
        },
        _ => FetchError::Backend(DisplayErrorContext(&err).to_string()),
    }
}

fn body_stream(body: ByteStream) -> ContentStream {
    Box::pin(stream::unfold(body, |mut body| async move {
        body.next().await.map(|chunk| {
            let chunk = chunk.map_err(|e| FetchError::Stream(DisplayErrorContext(&e).to_string()));
            (chunk, body)
        })
    }))
}

fn to_content_length(len: Option<i64>) -> Option<u64> {
    len.and_then(|len| u64::try_from(len).ok())
}
