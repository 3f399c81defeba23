// Chunked newline-delimited JSON streaming utilities
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;

/// Marks a stream whose chunks are individually Brotli-compressed
pub const CHUNK_ENCODING_HEADER: &str = "x-chunk-encoding";

/// Create a chunked JSON response.
///
/// Uncompressed, each message is one NDJSON line. Compressed, each message is
/// Brotli-encoded on its own and framed with a 4-byte big-endian length. The
/// HTTP body itself carries no `Content-Encoding`.
pub fn chunked_json_stream<S, T>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let byte_stream = stream.then(move |msg| {
        let json = serde_json::to_vec(&msg);
        async move {
            match json {
                Ok(json) => frame_chunk(json, compress).await,
                Err(e) => Err(std::io::Error::other(e)),
            }
        }
    });

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache");
    if compress {
        response = response.header(CHUNK_ENCODING_HEADER, "br");
    }

    response
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn frame_chunk(json: Vec<u8>, compress: bool) -> Result<Bytes, std::io::Error> {
    if !compress {
        let mut chunk = BytesMut::with_capacity(json.len() + 1);
        chunk.put_slice(&json);
        chunk.put_u8(b'\n');
        return Ok(chunk.freeze());
    }

    let payload = brotli_compress(json).await?;
    let length = u32::try_from(payload.len()).map_err(std::io::Error::other)?;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver, mapping each message first
pub fn stream_from_receiver<M, T, F>(
    mut rx: tokio::sync::mpsc::Receiver<M>,
    map: F,
    compress: bool,
) -> impl IntoResponse
where
    M: Send + 'static,
    T: Serialize + Send + 'static,
    F: Fn(M) -> T + Send + 'static,
{
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield map(msg);
        }
    };

    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lines_are_newline_delimited() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        tx.send(1_u32).await.unwrap();
        tx.send(2_u32).await.unwrap();
        drop(tx);

        let response =
            stream_from_receiver(rx, |n| serde_json::json!({ "n": n }), false).into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/x-ndjson"
        );

        let body = axum::body::to_bytes(response.into_body(), 10_000).await.unwrap();
        assert_eq!(&body[..], b"{\"n\":1}\n{\"n\":2}\n");
    }

    #[tokio::test]
    async fn test_compressed_chunks_are_length_prefixed_brotli() {
        use async_compression::tokio::bufread::BrotliDecoder;
        use tokio::io::AsyncReadExt;

        let (tx, rx) = tokio::sync::mpsc::channel(4);
        tx.send("Carregando").await.unwrap();
        tx.send("pronto").await.unwrap();
        drop(tx);

        let response =
            stream_from_receiver(rx, |s: &str| serde_json::json!({ "msg": s }), true).into_response();
        assert_eq!(response.headers()[CHUNK_ENCODING_HEADER], "br");
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());

        let body = axum::body::to_bytes(response.into_body(), 10_000).await.unwrap();
        let mut rest = &body[..];
        let mut decoded = Vec::new();
        while !rest.is_empty() {
            let len = u32::from_be_bytes(rest[..4].try_into().unwrap()) as usize;
            let mut decoder = BrotliDecoder::new(&rest[4..4 + len]);
            let mut json = String::new();
            decoder.read_to_string(&mut json).await.unwrap();
            decoded.push(json);
            rest = &rest[4 + len..];
        }
        assert_eq!(decoded, vec![r#"{"msg":"Carregando"}"#, r#"{"msg":"pronto"}"#]);
    }
}
