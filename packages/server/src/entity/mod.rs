pub mod blog_article;
pub mod user;
