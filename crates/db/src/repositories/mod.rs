//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod profile_repo;
pub mod recipe_repo;
pub mod tag_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use profile_repo::ProfileRepo;
pub use recipe_repo::RecipeRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
