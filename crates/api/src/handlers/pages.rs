//! Server-rendered HTML pages.
//!
//! Every listing runs the same retrieval pipeline as the JSON API with the
//! HTML page size (`PER_PAGE`) and renders through [`crate::templates`].

use axum::extract::{Query, State};
use maud::Markup;
use recipes_core::error::CoreError;
use recipes_core::filters::TagRef;
use recipes_core::pagination::{page_range, parse_page_number, Page, PAGE_RANGE_WINDOW};
use recipes_core::retrieval::{get_recipe, list_recipes, RecipeFilters};
use recipes_core::search::normalize_query;
use recipes_core::slug::validate_slug;
use recipes_core::types::DbId;
use recipes_db::models::recipe::RecipeWithTags;
use recipes_db::repositories::{ProfileRepo, RecipeRepo, TagRepo, UserRepo};

use crate::error::{AppError, AppResult, PageResult};
use crate::extract::PagePath;
use crate::middleware::auth::MaybeAuthUser;
use crate::query::{PageParams, SearchParams};
use crate::state::AppState;
use crate::templates;

/// Published recipes narrowed by `filters`, at the requested page.
async fn published_page(
    state: &AppState,
    filters: &RecipeFilters,
    raw_page: Option<&str>,
) -> AppResult<Page<RecipeWithTags>> {
    let collection = RecipeRepo::list_published(&state.pool).await?;
    Ok(list_recipes(
        collection,
        filters,
        state.config.per_page,
        parse_page_number(raw_page),
    ))
}

fn render_list(
    title: &str,
    heading: Option<&str>,
    page: &Page<RecipeWithTags>,
    link: &dyn Fn(usize) -> String,
) -> Markup {
    let range = page_range(page.current_page, page.total_pages, PAGE_RANGE_WINDOW);
    templates::recipe_list(title, heading, page, &range, link)
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> PageResult<Markup> {
    let page = published_page(&state, &RecipeFilters::default(), params.page.as_deref()).await?;
    Ok(render_list("Home", None, &page, &|n| format!("/?page={n}")))
}

/// GET /recipes/search/?q=
///
/// A blank query has nothing to search and is 404.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> PageResult<Markup> {
    let term = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::NotFound("Nothing to search".into()))?;

    let filters = RecipeFilters {
        query: normalize_query(Some(term)),
        ..RecipeFilters::default()
    };
    let page = published_page(&state, &filters, params.page.as_deref()).await?;

    let title = format!("Search for \"{term}\"");
    let encoded = urlencoding::encode(term);
    Ok(render_list(&title, Some(&title), &page, &|n| {
        format!("/recipes/search/?q={encoded}&page={n}")
    }))
}

/// GET /recipes/tags/{slug}
///
/// An unknown tag renders an empty listing; a malformed slug is 404.
pub async fn tag(
    State(state): State<AppState>,
    PagePath(slug): PagePath<String>,
    Query(params): Query<PageParams>,
) -> PageResult<Markup> {
    validate_slug(&slug).map_err(|_| AppError::NotFound(format!("No tag '{slug}'")))?;

    let name = TagRepo::find_by_slug(&state.pool, &slug)
        .await?
        .map(|t| t.name)
        .unwrap_or_else(|| slug.clone());

    let filters = RecipeFilters {
        tag: Some(TagRef::Slug(slug.clone())),
        ..RecipeFilters::default()
    };
    let page = published_page(&state, &filters, params.page.as_deref()).await?;

    let title = format!("\"{name}\" - Tag");
    Ok(render_list(&title, Some(&title), &page, &|n| {
        format!("/recipes/tags/{slug}?page={n}")
    }))
}

/// GET /recipes/category/{id}/
///
/// 404 when no published recipe is in the category.
pub async fn category(
    State(state): State<AppState>,
    PagePath(category_id): PagePath<DbId>,
    Query(params): Query<PageParams>,
) -> PageResult<Markup> {
    let filters = RecipeFilters {
        category_id: Some(category_id),
        ..RecipeFilters::default()
    };
    let page = published_page(&state, &filters, params.page.as_deref()).await?;

    let Some(first) = page.items.first() else {
        return Err(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }
        .into());
    };

    let title = format!("{} - Category", first.recipe.category_name);
    Ok(render_list(&title, Some(&title), &page, &|n| {
        format!("/recipes/category/{category_id}/?page={n}")
    }))
}

/// GET /recipes/{id}/
pub async fn detail(
    MaybeAuthUser(requester): MaybeAuthUser,
    State(state): State<AppState>,
    PagePath(recipe_id): PagePath<DbId>,
) -> PageResult<Markup> {
    let found = RecipeRepo::find_by_id(&state.pool, recipe_id).await?;
    let recipe = get_recipe(found, recipe_id, requester)?;

    Ok(templates::layout(
        &recipe.recipe.title,
        templates::recipe_detail(&recipe),
    ))
}

/// GET /authors/profile/{id}/
///
/// Bio plus the author's published recipes.
pub async fn author_profile(
    State(state): State<AppState>,
    PagePath(author_id): PagePath<DbId>,
    Query(params): Query<PageParams>,
) -> PageResult<Markup> {
    let user = UserRepo::find_by_id(&state.pool, author_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id: author_id,
        }))?;
    let bio = ProfileRepo::find_by_author(&state.pool, author_id)
        .await?
        .map(|p| p.bio)
        .unwrap_or_default();

    let collection = RecipeRepo::list_by_author(&state.pool, author_id).await?;
    let page = list_recipes(
        collection,
        &RecipeFilters::default(),
        state.config.per_page,
        parse_page_number(params.page.as_deref()),
    );
    let range = page_range(page.current_page, page.total_pages, PAGE_RANGE_WINDOW);

    Ok(templates::author_profile(
        &user.username,
        &bio,
        &page,
        &range,
        &|n| format!("/authors/profile/{author_id}/?page={n}"),
    ))
}
