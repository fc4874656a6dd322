//! Resource-type name normalization.
//!
//! The dashboard works with a closed vocabulary of Kubernetes-style resource
//! types. Names arrive as free-form strings (singular, plural, or something
//! else entirely), so every lookup here is total: a name outside the
//! vocabulary is passed through unchanged.
//!
//! - [`ResourceType`]: the closed vocabulary, with short and camelCase forms
//! - [`ResourceName`]: a boundary string, either a known type or a passthrough
//! - [`title`]: human-readable titles and CSS class names

pub mod title;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ParseResourceTypeError;

pub use title::{friendly_title, to_class_name, FriendlyTitle};

/// A resource type known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Deployment,
    DaemonSet,
    Namespace,
    Pod,
    ReplicationController,
    ReplicaSet,
    Service,
    StatefulSet,
    Authority,
}

impl ResourceType {
    /// Every known type, in short-name table order.
    pub const ALL: [ResourceType; 9] = [
        ResourceType::Deployment,
        ResourceType::DaemonSet,
        ResourceType::Namespace,
        ResourceType::Pod,
        ResourceType::ReplicationController,
        ResourceType::ReplicaSet,
        ResourceType::Service,
        ResourceType::StatefulSet,
        ResourceType::Authority,
    ];

    /// Canonical lowercase singular name, e.g. `"statefulset"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Deployment => "deployment",
            ResourceType::DaemonSet => "daemonset",
            ResourceType::Namespace => "namespace",
            ResourceType::Pod => "pod",
            ResourceType::ReplicationController => "replicationcontroller",
            ResourceType::ReplicaSet => "replicaset",
            ResourceType::Service => "service",
            ResourceType::StatefulSet => "statefulset",
            ResourceType::Authority => "authority",
        }
    }

    /// Lowercase plural name. `authority` is the one irregular plural.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceType::Deployment => "deployments",
            ResourceType::DaemonSet => "daemonsets",
            ResourceType::Namespace => "namespaces",
            ResourceType::Pod => "pods",
            ResourceType::ReplicationController => "replicationcontrollers",
            ResourceType::ReplicaSet => "replicasets",
            ResourceType::Service => "services",
            ResourceType::StatefulSet => "statefulsets",
            ResourceType::Authority => "authorities",
        }
    }

    /// Abbreviated name used in compact labels, e.g. `"deploy"`.
    pub fn short_name(&self) -> &'static str {
        match self {
            ResourceType::Deployment => "deploy",
            ResourceType::DaemonSet => "ds",
            ResourceType::Namespace => "ns",
            ResourceType::Pod => "po",
            ResourceType::ReplicationController => "rc",
            ResourceType::ReplicaSet => "rs",
            ResourceType::Service => "svc",
            ResourceType::StatefulSet => "sts",
            ResourceType::Authority => "au",
        }
    }

    /// camelCase form as it appears in the pods API response, for the types
    /// that have one.
    pub fn camel_case(&self) -> Option<&'static str> {
        match self {
            ResourceType::ReplicaSet => Some("replicaSet"),
            ResourceType::ReplicationController => Some("replicationController"),
            ResourceType::StatefulSet => Some("statefulSet"),
            ResourceType::DaemonSet => Some("daemonSet"),
            _ => None,
        }
    }

    /// Whether a resource of this type can own pods.
    pub fn can_own_pods(&self) -> bool {
        !matches!(
            self,
            ResourceType::Namespace
                | ResourceType::Pod
                | ResourceType::Service
                | ResourceType::Authority
        )
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ParseResourceTypeError;

    /// Parse the exact canonical singular name. Plurals are not accepted here;
    /// run them through [`singular_resource`] first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseResourceTypeError(s.to_string()))
    }
}

/// A resource name at the boundary: either a known type or a free-form
/// string that lookups pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName<'a> {
    Known(ResourceType),
    Passthrough(&'a str),
}

impl<'a> From<&'a str> for ResourceName<'a> {
    fn from(name: &'a str) -> Self {
        match name.parse() {
            Ok(resource_type) => ResourceName::Known(resource_type),
            Err(_) => {
                trace!(name, "resource name outside known vocabulary");
                ResourceName::Passthrough(name)
            }
        }
    }
}

impl<'a> ResourceName<'a> {
    /// The name as given (canonical form for known types).
    pub fn as_str(&self) -> &'a str {
        match self {
            ResourceName::Known(t) => t.as_str(),
            ResourceName::Passthrough(name) => *name,
        }
    }

    /// Short name, or the name itself when unknown.
    pub fn short_name(&self) -> &'a str {
        match self {
            ResourceName::Known(t) => t.short_name(),
            ResourceName::Passthrough(name) => *name,
        }
    }

    /// camelCase form, or the name itself when there is none.
    pub fn camel_case(&self) -> &'a str {
        match self {
            ResourceName::Known(t) => t.camel_case().unwrap_or(t.as_str()),
            ResourceName::Passthrough(name) => *name,
        }
    }
}

/// A (type, name) pair identifying a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Compact label, e.g. `deploy/web`.
    pub fn display_name(&self) -> String {
        format!("{}/{}", to_short_resource_name(&self.resource_type), self.name)
    }
}

/// Strip a plural `s`, with `authorities` mapped to `authority`.
pub fn singular_resource(resource: &str) -> &str {
    if resource == "authorities" {
        "authority"
    } else {
        resource.strip_suffix('s').unwrap_or(resource)
    }
}

/// camelCase form of a resource type, e.g. `replicaset` to `replicaSet`.
pub fn resource_type_to_camel_case(resource: &str) -> &str {
    ResourceName::from(resource).camel_case()
}

/// Short name for a full resource type name, e.g. `deployment` to `deploy`.
///
/// Unknown names are returned unchanged.
pub fn to_short_resource_name(name: &str) -> &str {
    ResourceName::from(name).short_name()
}

/// Short name for any known resource type.
pub fn short_name_lookup(name: &str) -> Option<&'static str> {
    name.parse::<ResourceType>().ok().map(|t| t.short_name())
}

/// Short name for resource types that can own pods.
pub fn pod_owner_lookup(name: &str) -> Option<&'static str> {
    name.parse::<ResourceType>()
        .ok()
        .filter(ResourceType::can_own_pods)
        .map(|t| t.short_name())
}

/// Compact `<short type>/<name>` label for a resource.
pub fn display_name(resource: &Resource) -> String {
    resource.display_name()
}

/// Whether `name`, singular or plural, is a known resource type.
pub fn is_resource(name: &str) -> bool {
    singular_resource(name).parse::<ResourceType>().is_ok()
}
