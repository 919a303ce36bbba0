use crate::identifiers::{guid::Guid, sid::SecurityIdentifier};

pub(super) const GUID_TEXT: &str = "01234567-89ab-cdef-0123-456789abcdef";
pub(super) const OTHER_GUID_TEXT: &str = "fedcba98-7654-3210-fedc-ba9876543210";
pub(super) const SID_TEXT: &str = "S-1-5-21-1004336348-1177238915-682003330-512";

/// Descriptor assembled segment by segment, as a directory server would
/// return it for an extended DN request.
#[derive(Default)]
pub(super) struct DescriptorBuilder {
    segments: Vec<String>,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guid(mut self, text: &str) -> Self {
        self.segments.push(format!("<GUID={text}>"));
        self
    }

    pub fn sid(mut self, text: &str) -> Self {
        self.segments.push(format!("<SID={text}>"));
        self
    }

    pub fn raw(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.segments.join(";")
    }
}

pub(super) fn guid(text: &str) -> Guid {
    Guid::parse(text).unwrap()
}

pub(super) fn sid(text: &str) -> SecurityIdentifier {
    SecurityIdentifier::parse(text).unwrap()
}

/// Distinguished names seen in rootDSE `namingContexts` replies.
pub(super) fn rootdse_naming_contexts() -> Vec<&'static str> {
    vec![
        "DC=example,DC=com",
        "CN=Configuration,DC=example,DC=com",
        "CN=Schema,CN=Configuration,DC=example,DC=com",
        "DC=DomainDnsZones,DC=example,DC=com",
        "DC=ForestDnsZones,DC=example,DC=com",
        "OU=Sales\\, EMEA,DC=example,DC=com",
        "CN=Müller\\+Söhne,OU=Users,DC=example,DC=com",
        "",
    ]
}

/// Checks the three fields of a parsed context in one go.
macro_rules! assert_context {
    ($context:expr, dn: $dn:expr, guid: $guid:expr, sid: $sid:expr $(,)?) => {{
        let context = &$context;
        assert_eq!(context.distinguished_name(), $dn, "distinguished name");
        assert_eq!(context.global_id().cloned(), $guid, "global id");
        assert_eq!(context.security_identifier().cloned(), $sid, "security identifier");
    }};
}
