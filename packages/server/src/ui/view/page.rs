//! Page and htmx fragments.
//!
//! Names, styles and message texts are escaped when they are submitted, so
//! they are embedded here as-is.

use chatboard_shared::time::timestamp_to_rfc850;

use crate::domain::{Message, User};

use super::Theme;

/// htmx script used unless the server is configured with another source
pub const DEFAULT_HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Clickable display name, swapped for the edit form on click
pub fn render_name(name: &str) -> String {
    format!(
        r#"<span id="name" hx-get="/name/edit" hx-trigger="click" hx-swap="outerHTML" title="Click to rename">{name}</span>"#
    )
}

pub fn render_name_edit(name: &str) -> String {
    format!(
        r#"<form id="name" hx-put="/name" hx-swap="outerHTML"><input name="name" value="{name}" autocomplete="off" autofocus><button type="submit">Save</button></form>"#
    )
}

/// Empty message input; returned after every post to clear the field
pub fn render_input() -> String {
    r#"<form id="input" hx-post="/messages" hx-swap="outerHTML"><input name="message" placeholder="Say something" autocomplete="off" autofocus><button type="submit">Send</button></form>"#
        .to_string()
}

/// Message list, in the order given (most recent first)
pub fn render_messages(messages: &[Message]) -> String {
    let mut html = String::from(r#"<ul class="messages">"#);
    for message in messages {
        let class = if message.is_system() {
            "message system"
        } else {
            "message"
        };
        html.push_str(&format!(
            r#"<li class="{class}"><strong class="author">{author}</strong><time>{time}</time><p>{text}</p></li>"#,
            author = message.author,
            time = timestamp_to_rfc850(message.timestamp.value()),
            text = message.text,
        ));
    }
    html.push_str("</ul>");
    html
}

fn render_style_picker(preferred_style: &str) -> String {
    let mut html = String::from(
        r#"<form id="style" hx-put="/style" hx-trigger="change"><select name="preferred">"#,
    );
    for theme in Theme::ALL {
        let selected = if theme.name() == preferred_style {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{name}"{selected}>{name}</option>"#,
            name = theme.name()
        ));
    }
    html.push_str("</select></form>");
    html
}

/// Full page for `user`, loading htmx from `htmx_src`
pub fn render_index(user: &User, messages: &[Message], htmx_src: &str) -> String {
    let theme = Theme::from_preference(&user.preferred_style).name();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Chat board</title>
<link rel="stylesheet" href="/style_{theme}.css">
<link rel="icon" type="image/png" href="/favicon_{theme}.ico">
<script src="{htmx}"></script>
</head>
<body>
<header>{name}{styles}</header>
{input}
<div id="messages" hx-get="/messages" hx-trigger="every 1s" hx-swap="innerHTML">{messages}</div>
</body>
</html>
"#,
        htmx = htmx_src,
        name = render_name(&user.name),
        styles = render_style_picker(&user.preferred_style),
        input = render_input(),
        messages = render_messages(messages),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SessionToken, Timestamp};

    fn sample_messages() -> Vec<Message> {
        vec![
            Message::new(
                "Bob".to_string(),
                "yo".to_string(),
                Timestamp::new(1672531260000),
            ),
            Message::system(
                "User 'Guest_7' has joined".to_string(),
                Timestamp::new(1672531200000),
            ),
        ]
    }

    #[test]
    fn test_render_messages_keeps_order_and_formats_time() {
        // テスト項目: メッセージが与えられた順で RFC 850 形式の時刻とともに描画される
        // given (前提条件):
        let messages = sample_messages();

        // when (操作):
        let html = render_messages(&messages);

        // then (期待する結果):
        let yo = html.find("<p>yo</p>").unwrap();
        let joined = html.find("<p>User 'Guest_7' has joined</p>").unwrap();
        assert!(yo < joined);
        assert!(html.contains("<time>Sunday, 01-Jan-23 00:01:00 UTC</time>"));
        assert!(html.contains(r#"<li class="message system"><strong class="author">Server</strong>"#));
    }

    #[test]
    fn test_render_messages_empty() {
        // テスト項目: メッセージがない場合は空のリストが描画される
        // given (前提条件):
        let messages: Vec<Message> = Vec::new();

        // when (操作):
        let html = render_messages(&messages);

        // then (期待する結果):
        assert_eq!(html, r#"<ul class="messages"></ul>"#);
    }

    #[test]
    fn test_render_index_selects_preferred_style() {
        // テスト項目: ページにユーザー名と選択中のスタイル・対応するアセットが含まれる
        // given (前提条件):
        let mut user = User::new(SessionToken::new("t"), "Guest_7".to_string());
        user.preferred_style = "milky".to_string();

        // when (操作):
        let html = render_index(&user, &sample_messages(), DEFAULT_HTMX_SRC);

        // then (期待する結果):
        assert!(html.contains(">Guest_7</span>"));
        assert!(html.contains(r#"<option value="milky" selected>milky</option>"#));
        assert!(html.contains(r#"<option value="brutal">brutal</option>"#));
        assert!(html.contains(r#"href="/style_milky.css""#));
        assert!(html.contains(r#"href="/favicon_milky.ico""#));
    }

    #[test]
    fn test_render_index_unknown_style_uses_default_assets() {
        // テスト項目: 未知のスタイルではデフォルトのアセットが使われ、何も選択されない
        // given (前提条件):
        let mut user = User::new(SessionToken::new("t"), "Guest_1".to_string());
        user.preferred_style = "neon".to_string();

        // when (操作):
        let html = render_index(&user, &[], DEFAULT_HTMX_SRC);

        // then (期待する結果):
        assert!(html.contains(r#"href="/style_brutal.css""#));
        assert!(!html.contains(" selected"));
    }

    #[test]
    fn test_render_index_loads_configured_htmx_src() {
        // テスト項目: htmx は指定されたソースから読み込まれる
        // given (前提条件):
        let user = User::new(SessionToken::new("t"), "Guest_3".to_string());

        // when (操作):
        let html = render_index(&user, &[], "/static/htmx.min.js");

        // then (期待する結果):
        assert!(html.contains(r#"<script src="/static/htmx.min.js"></script>"#));
        assert!(!html.contains(DEFAULT_HTMX_SRC));
    }

    #[test]
    fn test_render_index_defaults_to_cdn_htmx() {
        // テスト項目: デフォルトでは CDN の htmx が読み込まれる
        // given (前提条件):
        let user = User::new(SessionToken::new("t"), "Guest_3".to_string());

        // when (操作):
        let html = render_index(&user, &[], DEFAULT_HTMX_SRC);

        // then (期待する結果):
        assert!(html.contains(r#"<script src="https://unpkg.com/htmx.org@1.9.12"></script>"#));
    }

    #[test]
    fn test_render_name_edit_prefills_current_name() {
        // テスト項目: 名前編集フォームに現在の名前が入力済みになる
        // given (前提条件):
        let name = "Bob &amp; Co";

        // when (操作):
        let html = render_name_edit(name);

        // then (期待する結果):
        assert!(html.contains(r#"value="Bob &amp; Co""#));
        assert!(html.contains(r#"hx-put="/name""#));
    }
}
