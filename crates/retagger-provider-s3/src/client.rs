//! Narrow client surface over the S3 SDK.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::types::{Tag, Tagging};

use retagger_provider::error::{ProviderError, ProviderResult};

/// The S3 calls the adapter issues.
///
/// Implemented by the real SDK client and by test doubles. Remote failures
/// are captured with their fully rendered error context as the message and
/// the SDK error retained as source.
#[async_trait]
pub trait S3Api: Send + Sync {
    /// One `ListBuckets` page request.
    async fn list_buckets(
        &self,
        continuation_token: Option<String>,
        max_buckets: i32,
    ) -> ProviderResult<ListBucketsOutput>;

    /// `GetBucketTagging` for one bucket; an untagged bucket reports an
    /// empty tag set, not an error.
    async fn get_bucket_tagging(&self, bucket: &str) -> ProviderResult<Vec<Tag>>;

    /// `PutBucketTagging` for one bucket, replacing the whole tag set.
    async fn put_bucket_tagging(&self, bucket: &str, tag_set: Vec<Tag>) -> ProviderResult<()>;
}

#[async_trait]
impl S3Api for aws_sdk_s3::Client {
    async fn list_buckets(
        &self,
        continuation_token: Option<String>,
        max_buckets: i32,
    ) -> ProviderResult<ListBucketsOutput> {
        self.list_buckets()
            .set_continuation_token(continuation_token)
            .max_buckets(max_buckets)
            .send()
            .await
            .map_err(|e| ProviderError::list_with_source(DisplayErrorContext(&e).to_string(), e))
    }

    async fn get_bucket_tagging(&self, bucket: &str) -> ProviderResult<Vec<Tag>> {
        match self.get_bucket_tagging().bucket(bucket).send().await {
            Ok(out) => Ok(out.tag_set().to_vec()),
            // S3 reports a bucket with no tagging configuration as an error;
            // for this adapter that is simply an empty tag set.
            Err(err) if err.as_service_error().and_then(ProvideErrorMetadata::code)
                == Some("NoSuchTagSet") =>
            {
                Ok(Vec::new())
            }
            Err(err) => Err(ProviderError::tag_read_with_source(
                DisplayErrorContext(&err).to_string(),
                err,
            )),
        }
    }

    async fn put_bucket_tagging(&self, bucket: &str, tag_set: Vec<Tag>) -> ProviderResult<()> {
        let tagging = Tagging::builder()
            .set_tag_set(Some(tag_set))
            .build()
            .expect("tag_set is always set; building an s3 Tagging cannot fail");
        self.put_bucket_tagging()
            .bucket(bucket)
            .tagging(tagging)
            .send()
            .await
            .map_err(|e| {
                ProviderError::tag_write_with_source(DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }
}
