//! StorageConfig - 記事の置き場所の設定
//!
//! 値は外から渡される不透明な文字列として扱い、形式は検証しません。

use thiserror::Error;

pub const BUCKET_NAME_VAR: &str = "BucketName";
pub const BUCKET_REGION_VAR: &str = "BucketRegion";
pub const POSTS_DIRECTORY_VAR: &str = "PostsDirectory";
pub const META_DIRECTORY_VAR: &str = "MetaDirectory";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be provided")]
    Missing(&'static str),
}

/// 記事本文とメタデータの保存先
///
/// - `posts_directory`: 本文の key prefix
/// - `meta_directory`: タイトルなどメタデータの key prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub bucket_name: String,
    pub region: String,
    pub posts_directory: String,
    pub meta_directory: String,
}

impl StorageConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の lookup 関数から読み込む（テストでは HashMap を渡す）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        Ok(Self {
            bucket_name: require(BUCKET_NAME_VAR)?,
            region: require(BUCKET_REGION_VAR)?,
            posts_directory: require(POSTS_DIRECTORY_VAR)?,
            meta_directory: require(META_DIRECTORY_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (BUCKET_NAME_VAR, "blog".to_string()),
            (BUCKET_REGION_VAR, "us-east-1".to_string()),
            (POSTS_DIRECTORY_VAR, "posts".to_string()),
            (META_DIRECTORY_VAR, "meta".to_string()),
        ])
    }

    #[test]
    fn loads_all_values() {
        let env = full_env();
        let config = StorageConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(
            config,
            StorageConfig {
                bucket_name: "blog".into(),
                region: "us-east-1".into(),
                posts_directory: "posts".into(),
                meta_directory: "meta".into(),
            }
        );
    }

    #[test]
    fn empty_values_are_accepted() {
        let env: HashMap<&str, String> = full_env()
            .into_keys()
            .map(|name| (name, String::new()))
            .collect();
        let config = StorageConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config, StorageConfig::default());
    }

    #[rstest]
    #[case::bucket(BUCKET_NAME_VAR)]
    #[case::region(BUCKET_REGION_VAR)]
    #[case::posts(POSTS_DIRECTORY_VAR)]
    #[case::meta(META_DIRECTORY_VAR)]
    fn missing_value_is_reported(#[case] missing: &'static str) {
        let mut env = full_env();
        env.remove(missing);
        let err = StorageConfig::from_lookup(|name| env.get(name).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing(missing));
        assert_eq!(err.to_string(), format!("{missing} must be provided"));
    }
}
