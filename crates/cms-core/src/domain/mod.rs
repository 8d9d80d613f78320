//! Domain entities - the content records served by the CMS.

mod blog;
mod game;
mod job;
mod meta;
mod news;
mod page;
mod update;

pub use blog::BlogPost;
pub use game::{Discount, Game, GameStatus, Price, Review};
pub use job::JobPosting;
pub use meta::{Author, Category, ContentStatus, Image, Seo, Social, Tag};
pub use news::{NewsArticle, NewsType, Priority};
pub use page::{Page, PageTemplate};
pub use update::GameUpdate;
