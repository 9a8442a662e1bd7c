//! Aggregates over a list of blogs.
//!
//! Author aggregates key on the blog's `author` field. Blogs without an
//! author are left out of them.

use crate::domain::blog::models::Blog;

/// Author with the largest number of blogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: usize,
}

/// Author whose blogs gathered the most likes in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The most liked blog. The earliest one wins a tie.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best: Option<&Blog>, blog| match best {
        Some(current) if current.likes >= blog.likes => Some(current),
        _ => Some(blog),
    })
}

pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    tally(blogs, |_| 1)
        .into_iter()
        .fold(None, keep_first_max)
        .map(|(author, blogs)| AuthorBlogCount {
            author,
            blogs: blogs as usize,
        })
}

pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    tally(blogs, |blog| blog.likes)
        .into_iter()
        .fold(None, keep_first_max)
        .map(|(author, likes)| AuthorLikes { author, likes })
}

/// Per-author totals in order of first appearance.
fn tally(blogs: &[Blog], weight: impl Fn(&Blog) -> i64) -> Vec<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();

    for blog in blogs {
        let Some(author) = blog.author.as_deref() else {
            continue;
        };

        match totals.iter_mut().find(|(name, _)| name == author) {
            Some((_, total)) => *total += weight(blog),
            None => totals.push((author.to_string(), weight(blog))),
        }
    }

    totals
}

fn keep_first_max(
    best: Option<(String, i64)>,
    candidate: (String, i64),
) -> Option<(String, i64)> {
    match best {
        Some(current) if current.1 >= candidate.1 => Some(current),
        _ => Some(candidate),
    }
}
