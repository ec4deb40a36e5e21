//! HTML fragments for the three widget containers.
//!
//! An empty post list renders an explicit error message; empty repository and
//! achievement lists render nothing.

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::{Achievement, Post, RepoSummary};

pub const POSTS_ERROR: &str = "Unable to load posts.";

const PIN_ICON: &str = r#"<svg class="pin-icon" viewBox="0 0 16 16" fill="currentColor"><path d="M9.828.722a.5.5 0 0 1 .354.146l4.95 4.95a.5.5 0 0 1 0 .707c-.48.48-1.072.588-1.503.588-.177 0-.335-.018-.46-.039l-3.134 3.134a5.927 5.927 0 0 1 .16 1.013c.046.702-.032 1.687-.72 2.375a.5.5 0 0 1-.707 0l-2.829-2.828-3.182 3.182c-.195.195-1.219.902-1.414.707-.195-.195.512-1.22.707-1.414l3.182-3.182-2.828-2.829a.5.5 0 0 1 0-.707c.688-.688 1.673-.767 2.375-.72a5.922 5.922 0 0 1 1.013.16l3.134-3.133a2.772 2.772 0 0 1-.04-.461c0-.43.108-1.022.589-1.503a.5.5 0 0 1 .353-.146z"/></svg>"#;

const STAR_ICON: &str = r#"<svg class="repo-icon" viewBox="0 0 16 16" fill="currentColor"><path d="M8 .25a.75.75 0 0 1 .673.418l1.882 3.815 4.21.612a.75.75 0 0 1 .416 1.279l-3.046 2.97.719 4.192a.75.75 0 0 1-1.088.791L8 12.347l-3.766 1.98a.75.75 0 0 1-1.088-.79l.72-4.194L.818 6.374a.75.75 0 0 1 .416-1.28l4.21-.611L7.327.668A.75.75 0 0 1 8 .25z"/></svg>"#;

const FORK_ICON: &str = r#"<svg class="repo-icon" viewBox="0 0 16 16" fill="currentColor"><path d="M5 5.372v.878c0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75v-.878a2.25 2.25 0 1 1 1.5 0v.878a2.25 2.25 0 0 1-2.25 2.25h-1.5v2.128a2.251 2.251 0 1 1-1.5 0V8.5h-1.5A2.25 2.25 0 0 1 3.5 6.25v-.878a2.25 2.25 0 1 1 1.5 0ZM5 3.25a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Zm6.75.75a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm-3 8.75a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Z"/></svg>"#;

/// `Jan 5, 2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Medium / publication`, or just the source label.
pub fn source_label(post: &Post) -> String {
    match &post.publication {
        Some(publication) => format!("{} / {}", post.source, publication),
        None => post.source.to_string(),
    }
}

pub fn posts_html(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!(r#"<p class="posts-error">{}</p>"#, POSTS_ERROR);
    }

    let items: String = posts.iter().map(post_item).collect();
    format!(r#"<ul class="posts-list">{}</ul>"#, items)
}

fn post_item(post: &Post) -> String {
    let class = if post.pinned {
        "post-item is-pinned"
    } else {
        "post-item"
    };
    let icon = if post.pinned { PIN_ICON } else { "" };

    format!(
        concat!(
            r#"<li class="{class}">"#,
            r#"<a href="{url}" class="post-link" target="_blank" rel="noopener">"#,
            r#"<div class="post-title">{icon}{title}</div>"#,
            r#"<div class="post-meta">"#,
            r#"<span class="post-date">{date}</span>"#,
            r#"<span class="post-source">{source}</span>"#,
            "</div></a></li>"
        ),
        class = class,
        url = encode_double_quoted_attribute(&post.url),
        icon = icon,
        title = encode_text(&post.title),
        date = format_date(&post.date),
        source = encode_text(&source_label(post)),
    )
}

pub fn repos_html(repos: &[RepoSummary]) -> String {
    if repos.is_empty() {
        return String::new();
    }

    let cards: String = repos.iter().map(repo_card).collect();
    format!(r#"<div class="repos-grid">{}</div>"#, cards)
}

fn repo_card(repo: &RepoSummary) -> String {
    let language = if repo.language.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="repo-language"><span class="language-dot"></span>{}</span>"#,
            encode_text(&repo.language)
        )
    };

    format!(
        concat!(
            r#"<a href="{url}" class="repo-card" target="_blank" rel="noopener">"#,
            r#"<div class="repo-header"><span class="repo-name">{name}</span></div>"#,
            r#"<p class="repo-description">{description}</p>"#,
            r#"<div class="repo-meta">{language}"#,
            r#"<span class="repo-stat">{star_icon}{stars}</span>"#,
            r#"<span class="repo-stat">{fork_icon}{forks}</span>"#,
            "</div></a>"
        ),
        url = encode_double_quoted_attribute(&repo.url),
        name = encode_text(&repo.name),
        description = encode_text(&repo.description),
        language = language,
        star_icon = STAR_ICON,
        stars = repo.star_count,
        fork_icon = FORK_ICON,
        forks = repo.fork_count,
    )
}

pub fn achievements_html(achievements: &[Achievement]) -> String {
    if achievements.is_empty() {
        return String::new();
    }

    let items: String = achievements
        .iter()
        .map(|achievement| {
            let tier = achievement
                .tier
                .as_deref()
                .map(|tier| {
                    format!(
                        r#"<span class="achievement-tier">{}</span>"#,
                        encode_text(tier)
                    )
                })
                .unwrap_or_default();

            format!(
                r#"<li class="achievement-item" data-tooltip="{}"><span class="achievement-name">{}</span>{}</li>"#,
                encode_double_quoted_attribute(&achievement.description),
                encode_text(&achievement.name),
                tier
            )
        })
        .collect();

    format!(r#"<ul class="achievements-list">{}</ul>"#, items)
}
