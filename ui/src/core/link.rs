//! Deep-link and data-URI construction for the two dispatch actions.

use crate::config::{MessageEncoding, MessagingConfig};

/// `{base_url}/{phone}?text={encoded message}`.
pub fn report_link(messaging: &MessagingConfig, message: &str) -> String {
    let base = messaging.base_url.trim_end_matches('/');
    format!(
        "{base}/{phone}?text={text}",
        phone = messaging.phone,
        text = encode_message(message, messaging.encoding)
    )
}

pub fn encode_message(message: &str, encoding: MessageEncoding) -> String {
    match encoding {
        MessageEncoding::Utf8 => urlencoding::encode(message).into_owned(),
        MessageEncoding::Latin1Roundtrip => {
            // Percent-decoding a UTF-8 escape sequence byte by byte into
            // code points, then encoding again.
            let widened: String = message.bytes().map(char::from).collect();
            urlencoding::encode(&widened).into_owned()
        }
    }
}

pub const CSV_MIME: &str = "text/csv";

pub fn csv_data_uri(csv: &str) -> String {
    format!(
        "data:{CSV_MIME};charset=utf-8,{}",
        urlencoding::encode(csv)
    )
}

/// `{prefix}_{date}.csv`
pub fn export_filename(prefix: &str, date: &str) -> String {
    format!("{prefix}_{date}.csv")
}
