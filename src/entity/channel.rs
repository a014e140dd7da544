//! Channel entity
//!
//! `channellist` fills the first block of fields; `channelinfo` adds the
//! rest on top of an existing channel.

use crate::field;
use super::schema::{Entity, FieldDescriptor, Schema};

/// A channel on a virtual server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    // -------------------------------------------------------------------------
    // channellist
    // -------------------------------------------------------------------------
    pub cid: u32,
    pub pid: u32,
    pub order: u32,
    pub name: String,
    pub total_clients: u32,
    pub needed_subscribe_power: u32,

    // -------------------------------------------------------------------------
    // channelinfo
    // -------------------------------------------------------------------------
    pub topic: String,
    pub description: String,
    pub password: String,
    pub codec: u32,
    pub codec_quality: u32,
    pub max_clients: i32,
    pub max_family_clients: i32,
    pub flag_permanent: bool,
    pub flag_semi_permanent: bool,
    pub flag_default: bool,
    pub flag_password: bool,
    pub codec_latency_factor: u32,
    pub codec_is_unencrypted: bool,
    pub security_salt: String,
    pub delete_delay: u32,
    pub flag_max_clients_unlimited: bool,
    pub flag_max_family_clients_unlimited: bool,
    pub flag_max_family_clients_inherited: bool,
    pub filepath: String,
    pub needed_talk_power: u32,
    pub forced_silence: bool,
    pub name_phonetic: String,
    pub icon_id: i32,
    pub flag_private: bool,
    pub seconds_empty: i32,
}

static CHANNEL_FIELDS: [FieldDescriptor<Channel>; 31] = [
    field!(cid: UInt32 => "cid", immutable),
    field!(pid: UInt32 => "pid"),
    field!(order: UInt32 => "channel_order"),
    field!(name: String => "channel_name"),
    field!(total_clients: UInt32 => "total_clients", immutable),
    field!(needed_subscribe_power: UInt32 => "channel_needed_subscribe_power"),
    field!(topic: String => "channel_topic"),
    field!(description: String => "channel_description"),
    field!(password: String => "channel_password"),
    field!(codec: UInt32 => "channel_codec"),
    field!(codec_quality: UInt32 => "channel_codec_quality"),
    field!(max_clients: Int32 => "channel_maxclients"),
    field!(max_family_clients: Int32 => "channel_maxfamilyclients"),
    field!(flag_permanent: Bool => "channel_flag_permanent"),
    field!(flag_semi_permanent: Bool => "channel_flag_semi_permanent"),
    field!(flag_default: Bool => "channel_flag_default"),
    field!(flag_password: Bool => "channel_flag_password"),
    field!(codec_latency_factor: UInt32 => "channel_codec_latency_factor"),
    field!(codec_is_unencrypted: Bool => "channel_codec_is_unencrypted"),
    field!(security_salt: String => "channel_security_salt"),
    field!(delete_delay: UInt32 => "channel_delete_delay"),
    field!(flag_max_clients_unlimited: Bool => "channel_flag_maxclients_unlimited"),
    field!(flag_max_family_clients_unlimited: Bool => "channel_flag_maxfamilyclients_unlimited"),
    field!(flag_max_family_clients_inherited: Bool => "channel_flag_maxfamilyclients_inherited"),
    field!(filepath: String => "channel_filepath", immutable),
    field!(needed_talk_power: UInt32 => "channel_needed_talk_power"),
    field!(forced_silence: Bool => "channel_forced_silence"),
    field!(name_phonetic: String => "channel_name_phonetic"),
    field!(icon_id: Int32 => "channel_icon_id"),
    field!(flag_private: Bool => "channel_flag_private"),
    field!(seconds_empty: Int32 => "seconds_empty", immutable),
];

static CHANNEL_SCHEMA: Schema<Channel> = Schema::new("channel", &CHANNEL_FIELDS);

impl Entity for Channel {
    fn schema() -> &'static Schema<Self> {
        &CHANNEL_SCHEMA
    }
}

impl Channel {
    /// Field identifiers returned by `channellist`
    pub const LIST_FIELDS: [&'static str; 6] = [
        "cid",
        "pid",
        "order",
        "name",
        "total_clients",
        "needed_subscribe_power",
    ];
}
