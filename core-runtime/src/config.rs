//! # File List Configuration Module
//!
//! Provides the behavioral switches shared by every `ExtendedFileList`.
//!
//! ## Overview
//!
//! The configuration uses a builder pattern to construct a [`FileListConfig`].
//! A list captures its configuration at construction time and passes it on
//! to every list derived from it (`filter`, `slice`, `concat`).
//!
//! Two behaviors are configurable:
//!
//! - [`ArgumentPolicy`] - what happens when an untyped boundary (e.g. the
//!   JavaScript bindings) hands the constructor a value that is neither a
//!   file, a file collection, nor a sequence of files
//! - [`DefaultSort`] - the ordering used by `sort()` when no comparator is given
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::{ArgumentPolicy, DefaultSort, FileListConfig};
//!
//! let config = FileListConfig::builder()
//!     .argument_policy(ArgumentPolicy::Ignore)
//!     .default_sort(DefaultSort::Insertion)
//!     .build();
//!
//! assert_eq!(config.argument_policy, ArgumentPolicy::Ignore);
//! ```
//!
//! Hosts that ship configuration as JSON can load it directly:
//!
//! ```
//! use core_runtime::config::{ArgumentPolicy, FileListConfig};
//!
//! let config = FileListConfig::from_json(r#"{ "argumentPolicy": "ignore" }"#).unwrap();
//! assert_eq!(config.argument_policy, ArgumentPolicy::Ignore);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Handling of constructor arguments that match none of the accepted shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgumentPolicy {
    /// Fail construction with an invalid-argument error naming the position
    #[default]
    Reject,
    /// Skip the argument and log a warning
    Ignore,
}

/// Ordering applied by `sort()` when the caller supplies no comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultSort {
    /// Ascending by file name, compared by UTF-16 code units
    #[default]
    Name,
    /// Leave the current order untouched
    ///
    /// This is what a browser's default element sort does with `File`
    /// objects, since every one of them stringifies to `"[object File]"`.
    Insertion,
}

/// Configuration carried by every `ExtendedFileList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileListConfig {
    /// Policy for malformed constructor arguments
    pub argument_policy: ArgumentPolicy,

    /// Ordering used by comparator-less sorts
    pub default_sort: DefaultSort,
}

impl FileListConfig {
    /// Creates a new builder for constructing a `FileListConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::FileListConfig;
    ///
    /// let config = FileListConfig::builder().build();
    /// assert_eq!(config, FileListConfig::default());
    /// ```
    pub fn builder() -> FileListConfigBuilder {
        FileListConfigBuilder::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// Missing fields take their defaults. Unknown variants fail fast.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the document is not valid JSON or names
    /// an unknown policy.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid file list configuration: {}", e)))
    }

    /// Whether malformed arguments should abort construction
    pub fn rejects_malformed_arguments(&self) -> bool {
        self.argument_policy == ArgumentPolicy::Reject
    }
}

/// Builder for [`FileListConfig`].
#[derive(Debug, Default)]
pub struct FileListConfigBuilder {
    argument_policy: Option<ArgumentPolicy>,
    default_sort: Option<DefaultSort>,
}

impl FileListConfigBuilder {
    /// Sets the policy for malformed constructor arguments.
    pub fn argument_policy(mut self, policy: ArgumentPolicy) -> Self {
        self.argument_policy = Some(policy);
        self
    }

    /// Sets the ordering used by comparator-less sorts.
    pub fn default_sort(mut self, sort: DefaultSort) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Builds the configuration, filling unset fields with their defaults.
    pub fn build(self) -> FileListConfig {
        FileListConfig {
            argument_policy: self.argument_policy.unwrap_or_default(),
            default_sort: self.default_sort.unwrap_or_default(),
        }
    }
}
