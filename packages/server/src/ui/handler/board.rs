//! Chat board page and htmx fragment handlers.

use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::ui::{
    form::{MessageForm, NameForm, StyleForm, escape_html},
    session::{CurrentUser, redirect_home, session_cookie, session_token},
    state::AppState,
    view,
};

/// `GET /`: resume the session or start a new one, then render the page
pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), StatusCode> {
    let existing = match session_token(&jar) {
        Some(token) => state.resume_session_usecase.execute(&token).await,
        None => None,
    };

    let (jar, user) = match existing {
        Some(user) => (jar, user),
        None => {
            let user = state.join_board_usecase.execute().await.map_err(|e| {
                tracing::error!("Failed to start a session: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            tracing::info!("New session started for '{}'", user.name);
            (jar.add(session_cookie(&user.token)), user)
        }
    };

    let messages = state.list_messages_usecase.execute().await;
    Ok((jar, Html(view::render_index(&user, &messages, &state.htmx_src))))
}

/// `GET /messages`
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    CurrentUser(_user): CurrentUser,
) -> Html<String> {
    let messages = state.list_messages_usecase.execute().await;
    Html(view::render_messages(&messages))
}

/// `POST /messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<MessageForm>,
) -> Html<String> {
    state
        .post_message_usecase
        .execute(&user.token, escape_html(&form.message))
        .await;
    Html(view::render_input())
}

/// `GET /name`
pub async fn get_name(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(view::render_name(&user.name))
}

/// `GET /name/edit`
pub async fn edit_name(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(view::render_name_edit(&user.name))
}

/// `PUT /name`
pub async fn put_name(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<NameForm>,
) -> Html<String> {
    let new_name = escape_html(&form.name);
    state
        .rename_user_usecase
        .execute(&user.token, new_name.clone())
        .await;
    Html(view::render_name(&new_name))
}

/// `PUT /style`: store the preference and reload the page with the new theme
pub async fn put_style(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<StyleForm>,
) -> Response {
    state
        .set_preference_usecase
        .execute(&user.token, escape_html(&form.preferred))
        .await;
    redirect_home()
}
