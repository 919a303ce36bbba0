#[macro_use]
mod fixtures;

use fixtures::{
    DescriptorBuilder, GUID_TEXT, OTHER_GUID_TEXT, SID_TEXT, guid, rootdse_naming_contexts, sid,
};

use crate::{
    error::NamingError,
    flatten::{Flattened, flatten},
    naming::{NamingContext, parse_naming_context},
};

#[test]
fn integration_plain_names_round_trip_verbatim() {
    for dn in rootdse_naming_contexts() {
        let context = parse_naming_context(dn);
        assert_context!(context, dn: Some(dn), guid: None, sid: None);
        assert_eq!(context.to_string(), dn);
    }
}

#[test]
fn integration_extended_dn_reply() {
    for dn in rootdse_naming_contexts().into_iter().filter(|dn| !dn.is_empty()) {
        let raw = DescriptorBuilder::new().guid(GUID_TEXT).sid(SID_TEXT).raw(dn).build();
        let context = parse_naming_context(&raw);
        assert_context!(
            context,
            dn: Some(dn),
            guid: Some(guid(GUID_TEXT)),
            sid: Some(sid(SID_TEXT)),
        );
        assert_eq!(context.to_string(), dn);
        assert_eq!(context.extended_form(), raw);
    }
}

#[test]
fn integration_segment_order_does_not_matter_across_kinds() {
    let orders = [
        DescriptorBuilder::new().guid(GUID_TEXT).sid(SID_TEXT).raw("DC=example,DC=com"),
        DescriptorBuilder::new().sid(SID_TEXT).raw("DC=example,DC=com").guid(GUID_TEXT),
        DescriptorBuilder::new().raw("DC=example,DC=com").guid(GUID_TEXT).sid(SID_TEXT),
    ];
    let expected = parse_naming_context(&orders[0].build());
    for builder in &orders {
        assert_eq!(parse_naming_context(&builder.build()), expected);
    }
}

#[test]
fn integration_identifier_layouts_in_segments() {
    let layouts = [
        "0123456789ABCDEF0123456789ABCDEF",
        "{01234567-89ab-cdef-0123-456789abcdef}",
        "(01234567-89ab-cdef-0123-456789abcdef)",
    ];
    for layout in layouts {
        let raw = DescriptorBuilder::new().guid(layout).raw("DC=example,DC=com").build();
        assert_context!(
            parse_naming_context(&raw),
            dn: Some("DC=example,DC=com"),
            guid: Some(guid(GUID_TEXT)),
            sid: None,
        );
    }

    let raw = DescriptorBuilder::new().sid("BA").raw("CN=Builtin,DC=example,DC=com").build();
    assert_context!(
        parse_naming_context(&raw),
        dn: Some("CN=Builtin,DC=example,DC=com"),
        guid: None,
        sid: Some(sid("S-1-5-32-544")),
    );
}

#[test]
fn integration_malformed_identifiers_never_leak() {
    let malformed = ["", "x", "S-1-5-", "01234567-89ab", "<GUID=nested>", ";"];
    for body in malformed {
        let raw = DescriptorBuilder::new().guid(body).sid(body).raw("CN=X").build();
        let context = parse_naming_context(&raw);
        assert_eq!(context.distinguished_name(), Some("CN=X"), "body {body:?}");
        assert!(context.global_id().is_none(), "body {body:?}");
        assert!(context.security_identifier().is_none(), "body {body:?}");
    }
}

#[test]
fn integration_rightmost_wins_per_kind() {
    let raw = DescriptorBuilder::new()
        .guid(GUID_TEXT)
        .raw("CN=First")
        .sid("SY")
        .guid(OTHER_GUID_TEXT)
        .sid(SID_TEXT)
        .raw("CN=Second")
        .build();
    assert_context!(
        parse_naming_context(&raw),
        dn: Some("CN=Second"),
        guid: Some(guid(OTHER_GUID_TEXT)),
        sid: Some(sid(SID_TEXT)),
    );
}

#[test]
fn integration_truncated_prefixes() {
    // Only the absence of a panic and of leaked values is checked here.
    let truncated = [
        "<GUID=",
        "<SID=",
        "<GUID=0",
        "<SID=S",
        "<GUID=01234567-89ab-cdef-0123-456789abcdef",
        "<SID=S-1-5-32-544",
        "<GUID=\u{00E9}",
        "<SID=\u{1F600}\u{1F600}",
    ];
    for segment in truncated {
        let raw = DescriptorBuilder::new().raw(segment).raw("CN=X").build();
        let context = parse_naming_context(&raw);
        assert_eq!(context.distinguished_name(), Some("CN=X"), "segment {segment:?}");
    }
}

#[test]
fn integration_optional_attribute_values() {
    let values: Vec<Option<&str>> = vec![Some("DC=example,DC=com"), None];
    let results: Vec<_> = values.into_iter().map(NamingContext::try_from_optional).collect();
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(NamingError::InvalidArgument(_))));
}

#[test]
fn integration_flatten_parsed_attribute() {
    let single: Vec<NamingContext> =
        vec!["DC=example,DC=com"].into_iter().map(parse_naming_context).collect();
    let flattened = flatten(single);
    assert_eq!(
        flattened.as_single().and_then(NamingContext::distinguished_name),
        Some("DC=example,DC=com")
    );

    let many: Vec<NamingContext> =
        rootdse_naming_contexts().into_iter().map(parse_naming_context).collect();
    let count = many.len();
    match flatten(many) {
        Flattened::Many(contexts) => {
            assert_eq!(contexts.len(), count);
            assert_eq!(contexts[0].to_string(), "DC=example,DC=com");
        }
        other => panic!("expected many contexts, got {other:?}"),
    }

    assert!(flatten(None::<Vec<NamingContext>>).is_empty());
}
