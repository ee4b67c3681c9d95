use once_cell::sync::Lazy;
use regex::Regex;

/// Channel and thread coordinates extracted from a Slack message permalink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: String,
    pub thread_ts: String,
}

// Shareable message links look like
// https://<team>.slack.com/archives/C0123456789/p1680000000123456
static PERMALINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"archives/(.*?)/p(\d+)").expect("permalink regex compiles"));

/// Extract the channel ID and thread timestamp from a shareable Slack
/// message link.
///
/// The `p<digits>` segment packs the message timestamp without its decimal
/// point; the last six digits are the fractional part. A compact timestamp
/// with six or fewer digits cannot carry a whole seconds component and is
/// rejected.
///
/// # Examples
///
/// ```
/// use tagbot::utils::links::parse_message_link;
///
/// let parsed =
///     parse_message_link("https://acme.slack.com/archives/C123/p1680000000123456").unwrap();
/// assert_eq!(parsed.channel_id, "C123");
/// assert_eq!(parsed.thread_ts, "1680000000.123456");
/// ```
#[must_use]
pub fn parse_message_link(link: &str) -> Option<MessageRef> {
    let caps = PERMALINK_RE.captures(link)?;
    let channel_id = caps.get(1)?.as_str().to_string();
    let raw_ts = caps.get(2)?.as_str();

    if raw_ts.len() <= 6 {
        return None;
    }

    let (secs, micros) = raw_ts.split_at(raw_ts.len() - 6);
    Some(MessageRef {
        channel_id,
        thread_ts: format!("{secs}.{micros}"),
    })
}
