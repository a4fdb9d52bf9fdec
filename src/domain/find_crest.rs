use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::Selector;
use crate::repository::errors::FindError;
use crate::repository::team::Repository;

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

pub struct Request {
    pub slug: String,
    pub crest_dir: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct Response {
    pub path: PathBuf,
}

/// Resolves `<crest_dir>/<slug>.png` for an existing team. The file itself is
/// not checked.
pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    if !is_plain_file_stem(&req.slug) {
        log::debug!("refusing crest lookup for slug {:?}", req.slug);
        return Err(Error::NotFound);
    }

    if let Err(err) = repo.find_team(&Selector::Slug(req.slug.clone())).await {
        return Err(match err {
            FindError::NotFound => Error::NotFound,
            FindError::Unknown => Error::Unknown,
        });
    }

    Ok(Response {
        path: req.crest_dir.join(format!("{}.png", req.slug)),
    })
}

fn is_plain_file_stem(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}
