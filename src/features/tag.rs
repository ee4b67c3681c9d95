//! Tagging pipelines: mention everyone in a thread, or only the channel
//! members who have not reacted to the linked message.
//!
//! Each pipeline awaits its remote calls strictly in sequence and
//! short-circuits on the first failure.

use std::collections::HashSet;

use tracing::info;

use crate::clients::SlackApi;
use crate::errors::SlackError;
use crate::utils::links::MessageRef;

/// Outcome of the unreacted-tagging pipeline.
#[derive(Debug, PartialEq, Eq)]
pub enum TagOutcome {
    /// A threaded reply mentioning `tagged` members was posted.
    Posted { tagged: usize },
    /// Every eligible member already reacted; nothing was posted.
    AllReacted,
}

/// Members present in `members` but in neither `reacted` nor `excluded`,
/// preserving the original member order.
#[must_use]
pub fn unreacted_members(
    members: &[String],
    reacted: &HashSet<String>,
    excluded: &HashSet<String>,
) -> Vec<String> {
    members
        .iter()
        .filter(|id| !reacted.contains(*id) && !excluded.contains(*id))
        .cloned()
        .collect()
}

/// Space-joined `<@U...>` mention tokens, one per user, in input order.
/// An empty list produces an empty string.
#[must_use]
pub fn compose_mentions(user_ids: &[String]) -> String {
    user_ids
        .iter()
        .map(|id| format!("<@{id}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tag every member of the linked channel in the message thread.
/// Returns how many members were mentioned.
pub async fn tag_all_members(slack: &dyn SlackApi, msg: &MessageRef) -> Result<usize, SlackError> {
    let members = slack.channel_members(&msg.channel_id).await?;
    info!(channel = %msg.channel_id, members = members.len(), "tagging all channel members");

    let text = format!("Tagging everyone! {}", compose_mentions(&members));
    slack
        .post_thread_reply(&msg.channel_id, &msg.thread_ts, &text)
        .await?;

    Ok(members.len())
}

/// Tag only the channel members who have not reacted to the linked
/// message, skipping the excluded set.
pub async fn tag_unreacted_members(
    slack: &dyn SlackApi,
    msg: &MessageRef,
    excluded: &HashSet<String>,
) -> Result<TagOutcome, SlackError> {
    // Probe channel access first so a missing invite surfaces as a
    // permission failure rather than a generic member-listing error.
    slack.channel_info(&msg.channel_id).await?;

    let members = slack.channel_members(&msg.channel_id).await?;
    let message = slack.message_at(&msg.channel_id, &msg.thread_ts).await?;

    let reacted: HashSet<String> = message
        .reactions
        .into_iter()
        .flat_map(|reaction| reaction.users)
        .collect();

    let pending = unreacted_members(&members, &reacted, excluded);
    info!(
        channel = %msg.channel_id,
        members = members.len(),
        reacted = reacted.len(),
        pending = pending.len(),
        "resolved unreacted members"
    );

    if pending.is_empty() {
        return Ok(TagOutcome::AllReacted);
    }

    let text = format!("No reaction yet from: {}", compose_mentions(&pending));
    slack
        .post_thread_reply(&msg.channel_id, &msg.thread_ts, &text)
        .await?;

    Ok(TagOutcome::Posted {
        tagged: pending.len(),
    })
}
