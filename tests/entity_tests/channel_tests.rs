//! Channel Tests
//!
//! Tests for the channel entity schema.

use ts3query::entity::{deserialize, serialize, Channel, Entity, FieldKind, SerializeMode};
use ts3query::QueryError;

const VALID_CHANNEL: &str = "cid=1 pid=2 channel_order=3 channel_name=Sample\\sChannel\\sName total_clients=4 channel_needed_subscribe_power=5";
const VALID_CHANNEL_WITH_NULL: &str = "cid=1 pid channel_order=3 channel_name=Sample\\sChannel\\sName total_clients=4 channel_needed_subscribe_power=5";

const CHANNEL_INFO: &str = "pid=0 channel_name=Default\\sChannel channel_topic=Default\\sChannel\\shas\\sno\\stopic \
channel_description channel_password channel_codec=4 channel_codec_quality=6 channel_maxclients=-1 \
channel_maxfamilyclients=-1 channel_order=0 channel_flag_permanent=1 channel_flag_semi_permanent=0 \
channel_flag_default=1 channel_flag_password=0 channel_codec_latency_factor=1 channel_codec_is_unencrypted=1 \
channel_security_salt channel_delete_delay=0 channel_flag_maxclients_unlimited=1 \
channel_flag_maxfamilyclients_unlimited=0 channel_flag_maxfamilyclients_inherited=1 \
channel_filepath=files\\/virtualserver_1\\/channel_1 channel_needed_talk_power=0 channel_forced_silence=0 \
channel_name_phonetic channel_icon_id=0 channel_flag_private=0 seconds_empty=-1";

// =============================================================================
// Schema Tests
// =============================================================================

#[test]
fn test_schema_has_unique_names() {
    let schema = Channel::schema();

    assert_eq!(schema.name(), "channel");
    assert_eq!(schema.fields().len(), 31);
    assert_eq!(schema.find_duplicate(), None);
}

#[test]
fn test_schema_kinds() {
    let schema = Channel::schema();

    assert_eq!(schema.by_wire_name("cid").unwrap().kind(), FieldKind::UInt32);
    assert_eq!(schema.by_wire_name("channel_maxclients").unwrap().kind(), FieldKind::Int32);
    assert_eq!(schema.by_wire_name("channel_flag_default").unwrap().kind(), FieldKind::Bool);
    assert_eq!(schema.by_wire_name("channel_name").unwrap().kind(), FieldKind::String);
}

#[test]
fn test_identifiers_are_not_editable() {
    let schema = Channel::schema();

    for ident in ["cid", "total_clients", "filepath", "seconds_empty"] {
        assert!(!schema.by_ident(ident).unwrap().is_mutable(), "{}", ident);
    }
    assert!(!schema.mutable_idents().contains(&"cid"));
}

#[test]
fn test_list_fields_exist() {
    for ident in Channel::LIST_FIELDS {
        assert!(Channel::schema().by_ident(ident).is_some(), "{}", ident);
    }
}

// =============================================================================
// Deserialize Tests
// =============================================================================

#[test]
fn test_valid_channel() {
    let mut channel = Channel::default();
    deserialize(VALID_CHANNEL, &mut channel).unwrap();

    assert_eq!(channel.cid, 1);
    assert_eq!(channel.pid, 2);
    assert_eq!(channel.order, 3);
    assert_eq!(channel.name, "Sample Channel Name");
    assert_eq!(channel.total_clients, 4);
    assert_eq!(channel.needed_subscribe_power, 5);
}

#[test]
fn test_valid_channel_with_null() {
    let mut channel = Channel::default();
    deserialize(VALID_CHANNEL_WITH_NULL, &mut channel).unwrap();

    assert_eq!(channel.cid, 1);
    assert_eq!(channel.pid, 0);
    assert_eq!(channel.name, "Sample Channel Name");
    assert_eq!(channel.total_clients, 4);
}

#[test]
fn test_invalid_property() {
    let mut channel = Channel::default();
    let err = deserialize("invalid_property=foo", &mut channel).unwrap_err();
    assert!(matches!(err, QueryError::UnknownAttribute { .. }));
}

#[test]
fn test_new_channel_without_cid() {
    let channel: Channel = Channel::schema()
        .deserialize_new("pid=2 channel_order=5 channel_name=Woot")
        .unwrap();

    assert_eq!(channel.cid, 0);
    assert_eq!(channel.order, 5);
    assert_eq!(channel.name, "Woot");
}

#[test]
fn test_info_adds_detail_fields() {
    let mut channel = Channel::default();
    deserialize(VALID_CHANNEL, &mut channel).unwrap();
    deserialize(CHANNEL_INFO, &mut channel).unwrap();

    // From the list call
    assert_eq!(channel.cid, 1);
    assert_eq!(channel.total_clients, 4);

    // From the info call
    assert_eq!(channel.name, "Default Channel");
    assert_eq!(channel.topic, "Default Channel has no topic");
    assert_eq!(channel.description, "");
    assert_eq!(channel.codec, 4);
    assert_eq!(channel.max_clients, -1);
    assert!(channel.flag_permanent);
    assert!(channel.flag_default);
    assert!(channel.codec_is_unencrypted);
    assert!(channel.flag_max_family_clients_inherited);
    assert_eq!(channel.filepath, "files/virtualserver_1/channel_1");
    assert_eq!(channel.seconds_empty, -1);
}

#[test]
fn test_update_then_invalid_update() {
    let mut channel = Channel::default();
    deserialize(VALID_CHANNEL, &mut channel).unwrap();

    deserialize("cid=2 pid=3", &mut channel).unwrap();
    assert_eq!(channel.cid, 2);
    assert_eq!(channel.pid, 3);

    let err = deserialize("cid=4 invalid=true", &mut channel).unwrap_err();
    assert!(matches!(err, QueryError::UnknownAttribute { .. }));
}

// =============================================================================
// Serialize Tests
// =============================================================================

#[test]
fn test_edit_never_includes_cid() {
    let channel = Channel {
        cid: 1,
        ..Channel::default()
    };

    let err = serialize(&channel, &["cid"], SerializeMode::Edit).unwrap_err();
    assert!(matches!(err, QueryError::ImmutableField(_)));
}

#[test]
fn test_edit_selected_fields() {
    let channel = Channel {
        cid: 1,
        pid: 2,
        order: 3,
        name: "foo bar".to_string(),
        ..Channel::default()
    };

    let out = serialize(&channel, &["pid", "order", "name"], SerializeMode::Edit).unwrap();
    assert_eq!(out, "pid=2 channel_order=3 channel_name=foo\\sbar");
}

#[test]
fn test_edit_all_mutable_fields_round_trip() {
    let mut source = Channel::default();
    deserialize(CHANNEL_INFO, &mut source).unwrap();

    let idents = Channel::schema().mutable_idents();
    let wire = serialize(&source, &idents, SerializeMode::Edit).unwrap();

    let mut copy = Channel::default();
    deserialize(&wire, &mut copy).unwrap();

    assert_eq!(copy.name, source.name);
    assert_eq!(copy.topic, source.topic);
    assert_eq!(copy.max_family_clients, source.max_family_clients);
    assert_eq!(copy.flag_max_clients_unlimited, source.flag_max_clients_unlimited);
    assert_eq!(copy.filepath, "");
    assert_eq!(copy.seconds_empty, 0);
}
