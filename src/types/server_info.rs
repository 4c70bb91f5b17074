//! Server information returned by `admin/serverinfo`.

use serde::{Deserialize, Serialize};

/// Version, runtime, memory, and feature information about the server.
///
/// Only the sections below are decoded; themes, locales, and provider
/// listings in the same document are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoRepresentation {
    /// Server version and host runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfoRepresentation>,
    /// JVM memory usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<MemoryInfoRepresentation>,
    /// Enabled profile and feature flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_info: Option<ProfileInfoRepresentation>,
    /// Cryptography provider details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_info: Option<CryptoInfoRepresentation>,
}

/// Server version and host runtime.
///
/// Field names mirror the server's representation.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_millis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_vendor: Option<String>,
    #[serde(rename = "javaVM", skip_serializing_if = "Option::is_none")]
    pub java_vm: Option<String>,
    #[serde(rename = "javaVMVersion", skip_serializing_if = "Option::is_none")]
    pub java_vm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
}

/// JVM memory usage, in bytes and pre-formatted.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfoRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_percentage: Option<i64>,
}

/// Enabled profile and feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfoRepresentation {
    /// Profile name, e.g. `community`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Features turned off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_features: Option<Vec<String>>,
    /// Preview features turned on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_features: Option<Vec<String>>,
    /// Experimental features turned on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental_features: Option<Vec<String>>,
}

/// Cryptography provider details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoInfoRepresentation {
    /// Provider class name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_provider: Option<String>,
    /// Keystore types the provider supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_keystore_types: Option<Vec<String>>,
}
