//! Server-rendered HTML (maud).
//!
//! All interpolated text is HTML-escaped by maud. The one exception is
//! preparation steps flagged `preparation_steps_is_html`, which are trusted
//! author markup and emitted as-is.

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use recipes_core::pagination::{Page, PageRange};
use recipes_db::models::recipe::RecipeWithTags;

pub const EMPTY_LISTING_HEADING: &str = "No recipes found here";

/// Full document shell shared by every page.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Recipes" }
            }
            body {
                header class="main-header" {
                    a href="/" { h1 { "Recipes" } }
                    form class="search-form" action="/recipes/search/" method="get" {
                        input type="search" name="q" placeholder="Search for a recipe";
                        button type="submit" { "Search" }
                    }
                }
                main class="main-content-container" {
                    (content)
                }
                footer class="main-footer" {
                    p { "Recipes" }
                }
            }
        }
    }
}

fn recipe_meta(r: &RecipeWithTags) -> Markup {
    let recipe = &r.recipe;
    html! {
        div class="recipe-author" {
            span {
                "by "
                a href={ "/authors/profile/" (recipe.author_id) "/" } { (recipe.author_username) }
            }
            span { (recipe.created_at.format("%d/%m/%Y %H:%M").to_string()) }
            span {
                a href={ "/recipes/category/" (recipe.category_id) "/" } { (recipe.category_name) }
            }
        }
        div class="recipe-meta-container" {
            div class="recipe-meta" {
                h3 { "Preparation" }
                p { (recipe.preparation_time) " " (recipe.preparation_time_unit) }
            }
            div class="recipe-meta" {
                h3 { "Servings" }
                p { (recipe.servings) " " (recipe.servings_unit) }
            }
        }
    }
}

/// A recipe as shown in listings: summary plus a link to the detail page.
pub fn recipe_card(r: &RecipeWithTags) -> Markup {
    let recipe = &r.recipe;
    html! {
        article class="recipe recipe-list-item" {
            @if let Some(cover) = &recipe.cover {
                img class="recipe-cover" src=(cover) alt=(recipe.title);
            }
            div class="recipe-title-container" {
                h2 class="recipe-title" {
                    a href={ "/recipes/" (recipe.id) "/" } { (recipe.title) }
                }
            }
            (recipe_meta(r))
            div class="recipe-content" {
                p { (recipe.description) }
            }
            footer class="recipe-footer" {
                a class="recipe-read-more" href={ "/recipes/" (recipe.id) "/" } { "read more..." }
            }
        }
    }
}

/// A single recipe with its full preparation steps and tags.
pub fn recipe_detail(r: &RecipeWithTags) -> Markup {
    let recipe = &r.recipe;
    html! {
        article class="recipe recipe-detail" {
            @if let Some(cover) = &recipe.cover {
                img class="recipe-cover" src=(cover) alt=(recipe.title);
            }
            h2 class="recipe-title" { (recipe.title) }
            (recipe_meta(r))
            div class="recipe-content" {
                p { (recipe.description) }
            }
            div class="preparation-steps" {
                @if recipe.preparation_steps_is_html {
                    (PreEscaped(&recipe.preparation_steps))
                } @else {
                    @for line in recipe.preparation_steps.lines().filter(|l| !l.trim().is_empty()) {
                        p { (line) }
                    }
                }
            }
            @if !r.tags.is_empty() {
                p class="recipe-tags" {
                    "Tags: "
                    @for tag in &r.tags {
                        a href={ "/recipes/tags/" (tag.slug) } { (tag.name) } " "
                    }
                }
            }
        }
    }
}

/// Page-number navigation. `link` maps a page number to its URL.
pub fn pagination(range: &PageRange, link: &dyn Fn(usize) -> String) -> Markup {
    html! {
        @if range.total_pages > 1 {
            nav class="pagination-content" {
                @if range.first_page_out_of_range {
                    a class="page-item" href=(link(1)) { "1" }
                    span class="page-item" { "..." }
                }
                @for n in &range.pages {
                    @if *n == range.current_page {
                        span class="page-item page-active" { (n) }
                    } @else {
                        a class="page-item" href=(link(*n)) { (n) }
                    }
                }
                @if range.last_page_out_of_range {
                    span class="page-item" { "..." }
                    a class="page-item" href=(link(range.total_pages)) { (range.total_pages) }
                }
            }
        }
    }
}

/// A listing page: heading, recipe cards (or the empty-listing heading) and
/// the pagination widget.
pub fn recipe_list(
    title: &str,
    heading: Option<&str>,
    page: &Page<RecipeWithTags>,
    range: &PageRange,
    link: &dyn Fn(usize) -> String,
) -> Markup {
    let content = html! {
        @if let Some(heading) = heading {
            h2 class="listing-heading" { (heading) }
        }
        @if page.items.is_empty() {
            div class="center m-y" {
                h1 { (EMPTY_LISTING_HEADING) }
            }
        } @else {
            div class="recipe-list-container" {
                @for recipe in &page.items {
                    (recipe_card(recipe))
                }
            }
        }
        (pagination(range, link))
    };
    layout(title, content)
}

/// An author's public profile: bio plus published recipes.
pub fn author_profile(
    username: &str,
    bio: &str,
    page: &Page<RecipeWithTags>,
    range: &PageRange,
    link: &dyn Fn(usize) -> String,
) -> Markup {
    let content = html! {
        section class="author-profile" {
            h2 { (username) }
            @if bio.is_empty() {
                p class="author-bio" { "This author has not written a bio yet." }
            } @else {
                p class="author-bio" { (bio) }
            }
        }
        @if page.items.is_empty() {
            div class="center m-y" {
                h1 { (EMPTY_LISTING_HEADING) }
            }
        } @else {
            div class="recipe-list-container" {
                @for recipe in &page.items {
                    (recipe_card(recipe))
                }
            }
        }
        (pagination(range, link))
    };
    layout(username, content)
}

/// Error page for a failed page request, e.g. "404 Not Found".
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    let content = html! {
        div class="center m-y error-page" {
            h1 { (status.as_u16()) " " (reason) }
            p class="error-message" { (message) }
            a href="/" { "Back to the recipe list" }
        }
    };
    layout(reason, content)
}
