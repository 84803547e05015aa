//! Blog index and article pages, rendered from the built-in posts.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::pages::NotFound;
use crate::app::Route;
use crate::content::blog;

#[component]
pub fn BlogIndex() -> Element {
    rsx! {
        Layout {
            title: "Blog".to_string(),
            nav_active: "blog".to_string(),

            section { class: "page-header",
                h1 { "Blog" }
                p { class: "text-muted", "Field notes from the team building Pavit." }
            }
            div { class: "post-list",
                for post in blog::all() {
                    article { class: "post-card",
                        p { class: "post-meta",
                            span { class: "post-tag", "{post.tag}" }
                            span { class: "text-muted", "{post.date}" }
                        }
                        h2 {
                            Link {
                                to: Route::BlogArticle { slug: post.slug.to_string() },
                                "{post.title}"
                            }
                        }
                        p { "{post.excerpt}" }
                        p { class: "text-muted", "By {post.author}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogArticle(slug: String) -> Element {
    let Some(post) = blog::by_slug(&slug) else {
        return rsx! {
            NotFound { segments: vec!["blog".to_string(), slug] }
        };
    };

    rsx! {
        Layout {
            title: post.title.to_string(),
            nav_active: "blog".to_string(),

            article { class: "post-article",
                p { class: "post-meta",
                    span { class: "post-tag", "{post.tag}" }
                    span { class: "text-muted", "{post.date} · {post.author}" }
                }
                h1 { "{post.title}" }
                for paragraph in post.body {
                    p { "{paragraph}" }
                }
                p {
                    Link { to: Route::BlogIndex {}, "← All posts" }
                }
            }
        }
    }
}
