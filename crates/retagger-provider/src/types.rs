//! Provider type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The AWS service a provider adapter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwsService {
    /// CloudWatch Logs log groups
    CloudWatchLogs,
    /// CloudFront distributions
    CloudFront,
    /// EC2 instances
    Ec2,
    /// RDS database instances
    Rds,
    /// S3 buckets
    S3,
    /// Lambda functions
    Lambda,
}

impl AwsService {
    /// Get all supported services.
    #[must_use]
    pub fn all() -> &'static [AwsService] {
        &[
            AwsService::CloudWatchLogs,
            AwsService::CloudFront,
            AwsService::Ec2,
            AwsService::Rds,
            AwsService::S3,
            AwsService::Lambda,
        ]
    }

    /// Get the string representation used in logs and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AwsService::CloudWatchLogs => "cloudwatch-logs",
            AwsService::CloudFront => "cloudfront",
            AwsService::Ec2 => "ec2",
            AwsService::Rds => "rds",
            AwsService::S3 => "s3",
            AwsService::Lambda => "lambda",
        }
    }
}

impl fmt::Display for AwsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AwsService {
    type Err = ParseAwsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cloudwatch-logs" => Ok(AwsService::CloudWatchLogs),
            "cloudfront" => Ok(AwsService::CloudFront),
            "ec2" => Ok(AwsService::Ec2),
            "rds" => Ok(AwsService::Rds),
            "s3" => Ok(AwsService::S3),
            "lambda" => Ok(AwsService::Lambda),
            _ => Err(ParseAwsServiceError(s.to_string())),
        }
    }
}

/// Error parsing a service name from string.
#[derive(Debug, Clone)]
pub struct ParseAwsServiceError(String);

impl fmt::Display for ParseAwsServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown service '{}', expected one of: cloudwatch-logs, cloudfront, ec2, rds, s3, lambda",
            self.0
        )
    }
}

impl std::error::Error for ParseAwsServiceError {}
