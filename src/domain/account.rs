//! Account record as served by the condenser `get_accounts` method
//!
//! Every field maps one remote key. The `sbd_*` keys and the `*_steem_*`
//! reward keys keep their pre-rename names on the wire and land in the local
//! `hbd_*` / `*_hive_*` fields. Keys the node sends but this model does not
//! name are ignored; named keys the node omits take their zero value.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::asset::Asset;
use crate::domain::coerce;
use crate::shared::error::{ClientError, ClientResult};

/// Timestamp layout the node uses (ISO-8601, no zone, UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One opaque `[index, operation]` entry of an account history
pub type HistoryEntry = Vec<Value>;

/// Weighted authority: a threshold plus the accounts and keys that count
/// toward it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authority {
    pub weight_threshold: u32,
    pub account_auths: Vec<(String, u32)>,
    pub key_auths: Vec<(String, u32)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manabar {
    #[serde(deserialize_with = "coerce::int_or_string")]
    pub current_mana: i64,
    pub last_update_time: i64,
}

/// Public ledger state of one account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountData {
    pub id: i64,
    pub name: String,

    pub owner: Authority,
    pub active: Authority,
    pub posting: Authority,
    pub memo_key: String,
    pub json_metadata: String,
    pub posting_json_metadata: String,
    pub proxy: String,

    pub last_owner_update: String,
    pub last_account_update: String,
    pub created: String,
    pub mined: bool,
    pub recovery_account: String,
    pub last_account_recovery: String,
    pub reset_account: String,

    pub comment_count: i64,
    pub lifetime_vote_count: i64,
    pub post_count: i64,
    pub can_vote: bool,
    pub voting_manabar: Manabar,
    pub downvote_manabar: Manabar,
    pub voting_power: i64,

    pub balance: String,
    pub savings_balance: String,
    #[serde(rename = "sbd_balance")]
    pub hbd_balance: String,
    #[serde(rename = "sbd_seconds")]
    pub hbd_seconds: String,
    #[serde(rename = "sbd_seconds_last_update")]
    pub hbd_seconds_last_update: String,
    #[serde(rename = "sbd_last_interest_payment")]
    pub hbd_last_interest_payment: String,
    #[serde(rename = "savings_sbd_balance")]
    pub savings_hbd_balance: String,
    #[serde(rename = "savings_sbd_seconds")]
    pub savings_hbd_seconds: String,
    #[serde(rename = "savings_sbd_seconds_last_update")]
    pub savings_hbd_seconds_last_update: String,
    #[serde(rename = "savings_sbd_last_interest_payment")]
    pub savings_hbd_last_interest_payment: String,
    pub savings_withdraw_requests: i64,
    #[serde(rename = "reward_sbd_balance")]
    pub reward_hbd_balance: String,
    #[serde(rename = "reward_steem_balance")]
    pub reward_hive_balance: String,
    pub reward_vesting_balance: String,
    #[serde(rename = "reward_vesting_steem")]
    pub reward_vesting_hive: String,

    pub vesting_shares: String,
    pub delegated_vesting_shares: String,
    pub received_vesting_shares: String,
    pub vesting_withdraw_rate: String,
    pub next_vesting_withdrawal: String,
    #[serde(deserialize_with = "coerce::int_or_string")]
    pub withdrawn: i64,
    #[serde(deserialize_with = "coerce::int_or_string")]
    pub to_withdraw: i64,
    pub withdraw_routes: i64,

    pub curation_rewards: i64,
    pub posting_rewards: i64,
    #[serde(deserialize_with = "coerce::vec_int_or_string")]
    pub proxied_vsf_votes: Vec<i64>,
    pub witnesses_voted_for: i64,

    pub last_post: String,
    pub last_root_post: String,
    pub last_vote_time: String,
    pub post_bandwidth: i64,
    pub pending_claimed_accounts: i64,
    pub vesting_balance: String,
    pub reputation: String,

    pub transfer_history: Vec<Value>,
    pub market_history: Vec<Value>,
    pub post_history: Vec<Value>,
    pub vote_history: Vec<Value>,
    pub other_history: Vec<Value>,
    pub witness_votes: Vec<String>,
    pub tags_usage: Vec<Value>,
    pub guest_bloggers: Vec<Value>,
}

impl AccountData {
    /// Reputation parsed from its string form
    pub fn reputation_score(&self) -> ClientResult<i64> {
        coerce::parse_reputation(&self.reputation)
    }

    pub fn balance_asset(&self) -> ClientResult<Asset> {
        self.balance.parse()
    }

    pub fn hbd_balance_asset(&self) -> ClientResult<Asset> {
        self.hbd_balance.parse()
    }

    pub fn vesting_shares_asset(&self) -> ClientResult<Asset> {
        self.vesting_shares.parse()
    }

    pub fn created_at(&self) -> ClientResult<NaiveDateTime> {
        parse_timestamp(&self.created)
    }

    pub fn last_post_at(&self) -> ClientResult<NaiveDateTime> {
        parse_timestamp(&self.last_post)
    }
}

/// Minimal projection returned by `get_account_reputations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReputation {
    pub account: String,
    pub reputation: String,
}

/// Parse a node timestamp such as `2017-06-26T15:26:09`
pub fn parse_timestamp(raw: &str) -> ClientResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| ClientError::Decode(format!("Invalid timestamp \"{}\": {}", raw, e)))
}
