use serde::{Deserialize, Serialize};

// Unset fields are left out of the JSON, so None and Some("") stay distinct
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceMarathon {
    // Marathon pod or application ID
    #[serde(rename = "serviceID", default, skip_serializing_if = "Option::is_none")]
    service_id: Option<String>,

    #[serde(rename = "serviceIDPattern", default, skip_serializing_if = "Option::is_none")]
    service_id_pattern: Option<String>,

    // Only meaningful for Marathon pods
    #[serde(rename = "containerName", default, skip_serializing_if = "Option::is_none")]
    container_name: Option<String>,

    #[serde(rename = "containerNamePattern", default, skip_serializing_if = "Option::is_none")]
    container_name_pattern: Option<String>,
}

impl ServiceMarathon {
    pub fn new() -> ServiceMarathon {
        ServiceMarathon::default()
    }

    pub fn with_service_id(mut self, service_id: impl Into<String>) -> ServiceMarathon {
        self.service_id = Some(service_id.into());
        self
    }

    pub fn with_service_id_pattern(mut self, pattern: impl Into<String>) -> ServiceMarathon {
        self.service_id_pattern = Some(pattern.into());
        self
    }

    pub fn with_container_name(mut self, container_name: impl Into<String>) -> ServiceMarathon {
        self.container_name = Some(container_name.into());
        self
    }

    pub fn with_container_name_pattern(mut self, pattern: impl Into<String>) -> ServiceMarathon {
        self.container_name_pattern = Some(pattern.into());
        self
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn service_id_pattern(&self) -> Option<&str> {
        self.service_id_pattern.as_deref()
    }

    pub fn container_name(&self) -> Option<&str> {
        self.container_name.as_deref()
    }

    pub fn container_name_pattern(&self) -> Option<&str> {
        self.container_name_pattern.as_deref()
    }

    // "" still counts as set
    pub fn is_empty(&self) -> bool {
        self.service_id.is_none()
            && self.service_id_pattern.is_none()
            && self.container_name.is_none()
            && self.container_name_pattern.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let selector = ServiceMarathon::new();
        assert!(selector.is_empty());
        assert_eq!(selector, ServiceMarathon::default());
        assert_eq!(selector.service_id(), None);
        assert_eq!(selector.container_name_pattern(), None);
    }

    #[test]
    fn builder_sets_each_field() {
        let selector = ServiceMarathon::new()
            .with_service_id("/pod")
            .with_service_id_pattern("^/pod-.*$")
            .with_container_name("web")
            .with_container_name_pattern("web-.*");

        assert_eq!(selector.service_id(), Some("/pod"));
        assert_eq!(selector.service_id_pattern(), Some("^/pod-.*$"));
        assert_eq!(selector.container_name(), Some("web"));
        assert_eq!(selector.container_name_pattern(), Some("web-.*"));
        assert!(!selector.is_empty());
    }

    #[test]
    fn empty_string_counts_as_set() {
        let selector = ServiceMarathon::new().with_container_name("");
        assert!(!selector.is_empty());
        assert_eq!(selector.container_name(), Some(""));
    }

    #[test]
    fn absent_and_empty_are_not_equal() {
        let a = ServiceMarathon::new().with_service_id("svc");
        let b = ServiceMarathon::new().with_service_id("svc").with_container_name("");

        assert_ne!(a, b);
        assert_eq!(a, ServiceMarathon::new().with_service_id("svc"));
    }

    #[test]
    fn id_and_pattern_may_both_be_set() {
        let selector = ServiceMarathon::new()
            .with_service_id("/app")
            .with_service_id_pattern("/app.*");

        assert_eq!(selector.service_id(), Some("/app"));
        assert_eq!(selector.service_id_pattern(), Some("/app.*"));
    }
}
