use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::strings;
use crate::vm::{ChapterCardVm, map_chapter_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress().snapshot();
    let cards = map_chapter_cards(&ctx.catalog(), &progress);

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "{strings::CHAPTERS}" }
            if cards.is_empty() {
                p { class: "empty", "{strings::COMING_SOON}" }
            } else {
                div { class: "chapter-grid",
                    for card in cards {
                        ChapterCard { key: "{card.id}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn ChapterCard(card: ChapterCardVm) -> Element {
    rsx! {
        Link { class: "card chapter-card", to: Route::Chapter { chapter_id: card.id.clone() },
            if let Some(icon) = card.icon.clone() {
                div { class: "chapter-card__icon", "{icon}" }
            }
            div { class: "chapter-card__body",
                h3 { "{card.title}" }
                p { class: "chapter-card__description", "{card.description}" }
                div { class: "bar",
                    div { class: "bar__fill", style: "{card.bar_width}" }
                }
                p { class: card.status_class(), "{card.status_label()} ({card.percent_label}%)" }
            }
        }
    }
}
