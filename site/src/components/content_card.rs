//! Content section: one card per session with its speaker profiles.

use super::{Icon, ICON_GITHUB_LOGO, ICON_TWITTER_LOGO};
use crate::types::{Session, Speaker};
use leptos::prelude::*;

/// The CONTENTS section, one [`ContentCard`] per session in server order.
#[component]
pub fn ContentSection(
    sessions: Vec<Session>,
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    view! {
        <section class="section" id="contents">
            <h2 class="section-title">"CONTENTS"</h2>
            <div class="content-list">
                {sessions.into_iter().map(|session| {
                    view! { <ContentCard session=session is_ja=is_ja /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One talk: slot kind, time range, localized title and abstract, tags,
/// speakers. Anchored as `#session-N` for deep links.
#[component]
pub fn ContentCard(session: Session, is_ja: bool) -> impl IntoView {
    let anchor = format!("session-{}", session.session_id);
    let time = session.time_range();
    let title = session.localized_title(is_ja).to_owned();
    let outline = session.localized_outline(is_ja).to_owned();

    view! {
        <article class="content-card" id=anchor>
            <header class="content-card-header">
                <span class="content-card-time">{time}</span>
                <span class="content-card-type">{session.session_type.clone()}</span>
                <h3 class="content-card-title">{title}</h3>
                <ul class="content-card-tags">
                    {session.tags.iter().map(|tag| {
                        view! { <li class="content-card-tag">{format!("#{tag}")}</li> }
                    }).collect::<Vec<_>>()}
                </ul>
            </header>
            <p class="content-card-outline">{outline}</p>
            <div class="content-card-speakers">
                {session.speakers.iter().map(|speaker| {
                    view! { <ContentCardSpeaker speaker=speaker.clone() is_ja=is_ja /> }
                }).collect::<Vec<_>>()}
            </div>
        </article>
    }
}

/// Speaker row on a content card: curated photo, localized name, job
/// title and bio, plus whatever public SNS handles the speaker has.
#[component]
pub fn ContentCardSpeaker(speaker: Speaker, is_ja: bool) -> impl IntoView {
    let photo = speaker.photo_path();
    let name = speaker.localized_name(is_ja).to_owned();
    let position = speaker.localized_position(is_ja).to_owned();
    let profile = speaker.localized_profile(is_ja).to_owned();
    let alt = speaker.name.clone();

    view! {
        <div class="speaker">
            <img class="speaker-photo" src=photo alt=alt />
            <div class="speaker-profile">
                <div class="speaker-head">
                    <span class="speaker-name">{name}</span>
                    <span class="speaker-position">{position}</span>
                    <span class="speaker-sns">
                        {(!speaker.twitter_id.is_empty()).then(|| view! {
                            <a
                                class="speaker-sns-link"
                                href=format!("https://twitter.com/{}", speaker.twitter_id)
                                target="_blank"
                                rel="noopener"
                            >
                                <Icon path=ICON_TWITTER_LOGO size="16" />
                            </a>
                        })}
                        {(!speaker.github_id.is_empty()).then(|| view! {
                            <a
                                class="speaker-sns-link"
                                href=format!("https://github.com/{}", speaker.github_id)
                                target="_blank"
                                rel="noopener"
                            >
                                <Icon path=ICON_GITHUB_LOGO size="16" />
                            </a>
                        })}
                    </span>
                </div>
                <p class="speaker-profile-body">{profile}</p>
            </div>
        </div>
    }
}
