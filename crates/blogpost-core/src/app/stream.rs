//! Stream adaptation - content stream を String にする
//!
//! stream は move で受け取り、最後まで読んだら関数を抜けるときに drop されます。

use bytes::BytesMut;
use futures::StreamExt;

use crate::domain::{AccessError, ObjectRequest, ObjectResponse};

/// レスポンスの body をすべて読み、UTF-8 として decode する
pub(crate) async fn read_to_string(
    request: &ObjectRequest,
    response: ObjectResponse,
) -> Result<String, AccessError> {
    let ObjectResponse {
        content_length,
        mut content_stream,
        ..
    } = response;

    let capacity = content_length
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0);
    let mut buf = BytesMut::with_capacity(capacity);
    while let Some(chunk) = content_stream.next().await {
        let chunk = chunk.map_err(|source| AccessError::Stream {
            bucket: request.bucket_name.clone(),
            key: request.key.clone(),
            source,
        })?;
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf.into()).map_err(|source| AccessError::Decode {
        bucket: request.bucket_name.clone(),
        key: request.key.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchError;
    use bytes::Bytes;

    #[tokio::test]
    async fn joins_chunks_in_order() {
        let request = ObjectRequest::new("b", "k");
        let response = ObjectResponse::from_chunks(
            &request,
            vec![
                Ok(Bytes::from_static(b"This is ")),
                Ok(Bytes::from_static(b"some ")),
                Ok(Bytes::from_static(b"fake content")),
            ],
        );
        let content = read_to_string(&request, response).await.unwrap();
        assert_eq!(content, "This is some fake content");
    }

    #[tokio::test]
    async fn multibyte_char_split_across_chunks() {
        let request = ObjectRequest::new("b", "k");
        let bytes = "héllo".as_bytes();
        let response = ObjectResponse::from_chunks(
            &request,
            vec![
                Ok(Bytes::copy_from_slice(&bytes[..2])),
                Ok(Bytes::copy_from_slice(&bytes[2..])),
            ],
        );
        assert_eq!(read_to_string(&request, response).await.unwrap(), "héllo");
    }

    #[tokio::test]
    async fn empty_body_is_empty_string() {
        let request = ObjectRequest::default();
        let response = ObjectResponse::from_chunks(&request, vec![]);
        assert_eq!(read_to_string(&request, response).await.unwrap(), "");
    }

    #[tokio::test]
    async fn stream_error_stops_reading() {
        let request = ObjectRequest::new("b", "k");
        let response = ObjectResponse::from_chunks(
            &request,
            vec![
                Ok(Bytes::from_static(b"partial")),
                Err(FetchError::Stream("connection reset".into())),
            ],
        );
        let err = read_to_string(&request, response).await.unwrap_err();
        assert!(matches!(err, AccessError::Stream { .. }));
    }

    #[tokio::test]
    async fn invalid_utf8_is_decode_error() {
        let request = ObjectRequest::new("b", "k");
        let response = ObjectResponse::from_bytes(&request, vec![0xffu8, 0xfe, 0xfd]);
        let err = read_to_string(&request, response).await.unwrap_err();
        assert!(matches!(err, AccessError::Decode { .. }));
    }
}
